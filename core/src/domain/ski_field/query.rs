//! Translation of a [`FindManyRequest`] into a normalized query plan.
//!
//! Field names coming from clients are only ever resolved through
//! [`SkiFieldColumn::parse`], a fixed whitelist. Every store executes the
//! resulting [`SkiFieldQuery`] with its own dispatch on [`SkiFieldColumn`]:
//! the Postgres store maps columns to sea-orm columns, the in-memory store
//! uses [`SkiFieldColumn::compare`] and [`SkiFieldFilter::matches`].

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::ski_field::{
    entities::{SkiField, fold_case},
    value_objects::{
        DateTimeFilter, FindManyRequest, NumericFilter, OrderByClause, SkiFieldFilter,
        SortDirection, StringFilter, StringFilterMode,
    },
};

pub const DEFAULT_TAKE: u64 = 10;
pub const MAX_TAKE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkiFieldColumn {
    Name,
    CountryCode,
    Region,
    FullDayPassPrice,
    Currency,
    NearestTown,
    CreatedAt,
    UpdatedAt,
}

impl SkiFieldColumn {
    pub const ALL: [SkiFieldColumn; 8] = [
        SkiFieldColumn::Name,
        SkiFieldColumn::CountryCode,
        SkiFieldColumn::Region,
        SkiFieldColumn::FullDayPassPrice,
        SkiFieldColumn::Currency,
        SkiFieldColumn::NearestTown,
        SkiFieldColumn::CreatedAt,
        SkiFieldColumn::UpdatedAt,
    ];

    /// Resolves a client-supplied field name, ignoring case and surrounding
    /// whitespace. Anything outside the whitelist yields `None`.
    pub fn parse(field: &str) -> Option<Self> {
        match field.trim().to_ascii_lowercase().as_str() {
            "name" => Some(SkiFieldColumn::Name),
            "countrycode" => Some(SkiFieldColumn::CountryCode),
            "region" => Some(SkiFieldColumn::Region),
            "fulldaypassprice" => Some(SkiFieldColumn::FullDayPassPrice),
            "currency" => Some(SkiFieldColumn::Currency),
            "nearesttown" => Some(SkiFieldColumn::NearestTown),
            "createdat" => Some(SkiFieldColumn::CreatedAt),
            "updatedat" => Some(SkiFieldColumn::UpdatedAt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkiFieldColumn::Name => "name",
            SkiFieldColumn::CountryCode => "countryCode",
            SkiFieldColumn::Region => "region",
            SkiFieldColumn::FullDayPassPrice => "fullDayPassPrice",
            SkiFieldColumn::Currency => "currency",
            SkiFieldColumn::NearestTown => "nearestTown",
            SkiFieldColumn::CreatedAt => "createdAt",
            SkiFieldColumn::UpdatedAt => "updatedAt",
        }
    }

    /// Text accessor for the string columns.
    pub fn text<'a>(&self, ski_field: &'a SkiField) -> Option<&'a str> {
        match self {
            SkiFieldColumn::Name => Some(&ski_field.name),
            SkiFieldColumn::CountryCode => Some(&ski_field.country_code),
            SkiFieldColumn::Region => Some(&ski_field.region),
            SkiFieldColumn::Currency => Some(&ski_field.currency),
            SkiFieldColumn::NearestTown => Some(&ski_field.nearest_town),
            SkiFieldColumn::FullDayPassPrice
            | SkiFieldColumn::CreatedAt
            | SkiFieldColumn::UpdatedAt => None,
        }
    }

    pub fn compare(&self, a: &SkiField, b: &SkiField) -> Ordering {
        match self {
            SkiFieldColumn::FullDayPassPrice => a.full_day_pass_price.cmp(&b.full_day_pass_price),
            SkiFieldColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            SkiFieldColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            text => text.text(a).cmp(&text.text(b)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: SkiFieldColumn,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(column: SkiFieldColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: SkiFieldColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    pub fn compare(&self, a: &SkiField, b: &SkiField) -> Ordering {
        let ordering = self.column.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub take: u64,
}

impl Pagination {
    pub fn new(skip: Option<i64>, take: Option<i64>) -> Self {
        let skip = skip.filter(|s| *s >= 0).unwrap_or(0) as u64;
        let take = take
            .filter(|t| *t > 0)
            .map(|t| (t as u64).min(MAX_TAKE))
            .unwrap_or(DEFAULT_TAKE);

        Self { skip, take }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Normalized query: the filter, a non-empty list of sort keys and bounded
/// pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkiFieldQuery {
    pub filter: SkiFieldFilter,
    pub order: Vec<SortKey>,
    pub pagination: Pagination,
}

impl SkiFieldQuery {
    pub fn from_request(request: FindManyRequest) -> Self {
        Self {
            filter: request.filter.unwrap_or_default(),
            order: sort_keys(request.order_by.as_deref().unwrap_or_default()),
            pagination: Pagination::new(request.skip, request.take),
        }
    }

    pub fn compare(&self, a: &SkiField, b: &SkiField) -> Ordering {
        self.order
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl From<FindManyRequest> for SkiFieldQuery {
    fn from(request: FindManyRequest) -> Self {
        Self::from_request(request)
    }
}

/// Keeps the whitelisted clauses in order, falling back to `name asc` when
/// none survive.
pub fn sort_keys(clauses: &[OrderByClause]) -> Vec<SortKey> {
    let keys: Vec<SortKey> = clauses
        .iter()
        .filter_map(|clause| {
            SkiFieldColumn::parse(&clause.field).map(|column| SortKey {
                column,
                direction: clause.direction,
            })
        })
        .collect();

    if keys.is_empty() {
        vec![SortKey::asc(SkiFieldColumn::Name)]
    } else {
        keys
    }
}

impl SkiFieldFilter {
    /// String filters in whitelist order, paired with their column.
    pub fn string_filters(&self) -> impl Iterator<Item = (SkiFieldColumn, &StringFilter)> {
        [
            (SkiFieldColumn::Name, self.name.as_ref()),
            (SkiFieldColumn::CountryCode, self.country_code.as_ref()),
            (SkiFieldColumn::Region, self.region.as_ref()),
            (SkiFieldColumn::Currency, self.currency.as_ref()),
            (SkiFieldColumn::NearestTown, self.nearest_town.as_ref()),
        ]
        .into_iter()
        .filter_map(|(column, filter)| filter.map(|f| (column, f)))
    }

    /// Timestamp filters paired with their column.
    pub fn date_time_filters(&self) -> impl Iterator<Item = (SkiFieldColumn, &DateTimeFilter)> {
        [
            (SkiFieldColumn::CreatedAt, self.created_at.as_ref()),
            (SkiFieldColumn::UpdatedAt, self.updated_at.as_ref()),
        ]
        .into_iter()
        .filter_map(|(column, filter)| filter.map(|f| (column, f)))
    }

    pub fn matches(&self, ski_field: &SkiField) -> bool {
        let strings = self.string_filters().all(|(column, filter)| {
            column
                .text(ski_field)
                .is_some_and(|value| filter.matches(value))
        });
        let price = self
            .full_day_pass_price
            .as_ref()
            .is_none_or(|filter| filter.matches(&ski_field.full_day_pass_price));
        let dates = self.date_time_filters().all(|(column, filter)| match column {
            SkiFieldColumn::CreatedAt => filter.matches(&ski_field.created_at),
            SkiFieldColumn::UpdatedAt => filter.matches(&ski_field.updated_at),
            _ => true,
        });

        strings && price && dates
    }
}

impl StringFilter {
    pub fn matches(&self, value: &str) -> bool {
        let equals = self.equals_value().is_none_or(|expected| match self.mode {
            StringFilterMode::Sensitive => value == expected,
            StringFilterMode::Insensitive => fold_case(value) == fold_case(expected),
        });
        let contains = self.contains_value().is_none_or(|needle| match self.mode {
            StringFilterMode::Sensitive => value.contains(needle),
            StringFilterMode::Insensitive => fold_case(value).contains(&fold_case(needle)),
        });

        equals && contains
    }
}

/// Comparison operators shared by the numeric and timestamp filters.
pub trait RangeFilter<T: Ord> {
    fn bounds(&self) -> [(Ordering, bool, Option<&T>); 5];

    fn matches(&self, value: &T) -> bool {
        self.bounds().into_iter().all(|(expected, or_equal, bound)| {
            bound.is_none_or(|bound| {
                let ordering = value.cmp(bound);
                ordering == expected || (or_equal && ordering.is_eq())
            })
        })
    }
}

impl RangeFilter<Decimal> for NumericFilter {
    fn bounds(&self) -> [(Ordering, bool, Option<&Decimal>); 5] {
        [
            (Ordering::Equal, true, self.equals.as_ref()),
            (Ordering::Greater, false, self.gt.as_ref()),
            (Ordering::Greater, true, self.gte.as_ref()),
            (Ordering::Less, false, self.lt.as_ref()),
            (Ordering::Less, true, self.lte.as_ref()),
        ]
    }
}

impl RangeFilter<DateTime<Utc>> for DateTimeFilter {
    fn bounds(&self) -> [(Ordering, bool, Option<&DateTime<Utc>>); 5] {
        [
            (Ordering::Equal, true, self.equals.as_ref()),
            (Ordering::Greater, false, self.gt.as_ref()),
            (Ordering::Greater, true, self.gte.as_ref()),
            (Ordering::Less, false, self.lt.as_ref()),
            (Ordering::Less, true, self.lte.as_ref()),
        ]
    }
}

impl NumericFilter {
    pub fn matches(&self, value: &Decimal) -> bool {
        RangeFilter::matches(self, value)
    }
}

impl DateTimeFilter {
    pub fn matches(&self, value: &DateTime<Utc>) -> bool {
        RangeFilter::matches(self, value)
    }
}
