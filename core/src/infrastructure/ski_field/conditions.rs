use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select,
    Value,
    sea_query::{Expr, Func, LikeExpr},
};

use crate::domain::ski_field::{
    entities::fold_case,
    query::{RangeFilter, SkiFieldColumn, SkiFieldQuery},
    value_objects::{SkiFieldFilter, SortDirection, StringFilter, StringFilterMode},
};
use crate::entity::ski_fields::{Column as SkiFieldColumnDef, Entity as SkiFieldEntity};

const LIKE_ESCAPE: char = '\\';

impl From<SkiFieldColumn> for SkiFieldColumnDef {
    fn from(column: SkiFieldColumn) -> Self {
        match column {
            SkiFieldColumn::Name => SkiFieldColumnDef::Name,
            SkiFieldColumn::CountryCode => SkiFieldColumnDef::CountryCode,
            SkiFieldColumn::Region => SkiFieldColumnDef::Region,
            SkiFieldColumn::FullDayPassPrice => SkiFieldColumnDef::FullDayPassPrice,
            SkiFieldColumn::Currency => SkiFieldColumnDef::Currency,
            SkiFieldColumn::NearestTown => SkiFieldColumnDef::NearestTown,
            SkiFieldColumn::CreatedAt => SkiFieldColumnDef::CreatedAt,
            SkiFieldColumn::UpdatedAt => SkiFieldColumnDef::UpdatedAt,
        }
    }
}

/// Builds the `WHERE` clause for a filter. Every present constraint is
/// combined with `AND`.
pub fn filter_condition(filter: &SkiFieldFilter) -> Condition {
    let mut condition = Condition::all();

    for (column, string_filter) in filter.string_filters() {
        condition = condition.add(string_condition(column.into(), string_filter));
    }

    if let Some(price) = &filter.full_day_pass_price {
        condition = condition.add(range_condition::<Decimal, _>(
            SkiFieldColumnDef::FullDayPassPrice,
            price,
        ));
    }

    for (column, date_filter) in filter.date_time_filters() {
        condition = condition.add(range_condition::<DateTime<Utc>, _>(
            column.into(),
            date_filter,
        ));
    }

    condition
}

/// Filtered, ordered and paginated select. The primary key is appended as a
/// final sort key so pages stay stable across equal values.
pub fn select_query(query: &SkiFieldQuery) -> Select<SkiFieldEntity> {
    let mut select = SkiFieldEntity::find().filter(filter_condition(&query.filter));

    for key in &query.order {
        let order = match key.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        select = select.order_by(SkiFieldColumnDef::from(key.column), order);
    }

    select
        .order_by(SkiFieldColumnDef::Id, Order::Asc)
        .offset(query.pagination.skip)
        .limit(query.pagination.take)
}

/// Case-insensitive equality against the stored name, matching the
/// `LOWER(name)` unique index.
pub fn name_equals_condition(name: &str) -> Condition {
    Condition::all()
        .add(Expr::expr(Func::lower(Expr::col(SkiFieldColumnDef::Name))).eq(fold_case(name)))
}

fn string_condition(column: SkiFieldColumnDef, filter: &StringFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(expected) = filter.equals_value() {
        condition = condition.add(match filter.mode {
            StringFilterMode::Sensitive => column.eq(expected),
            StringFilterMode::Insensitive => {
                Expr::expr(Func::lower(Expr::col(column))).eq(fold_case(expected))
            }
        });
    }

    // No ILIKE: sea-query parenthesizes its ESCAPE clause and Postgres rejects it.
    if let Some(needle) = filter.contains_value() {
        condition = condition.add(match filter.mode {
            StringFilterMode::Sensitive => Expr::col(column).like(contains_pattern(needle)),
            StringFilterMode::Insensitive => Expr::expr(Func::lower(Expr::col(column)))
                .like(contains_pattern(&fold_case(needle))),
        });
    }

    condition
}

fn range_condition<T, F>(column: SkiFieldColumnDef, filter: &F) -> Condition
where
    T: Ord + Clone + Into<Value>,
    F: RangeFilter<T>,
{
    filter
        .bounds()
        .into_iter()
        .filter_map(|(ordering, or_equal, bound)| bound.map(|b| (ordering, or_equal, b.clone())))
        .fold(Condition::all(), |condition, (ordering, or_equal, bound)| {
            condition.add(match (ordering, or_equal) {
                (Ordering::Equal, _) => column.eq(bound),
                (Ordering::Greater, false) => column.gt(bound),
                (Ordering::Greater, true) => column.gte(bound),
                (Ordering::Less, false) => column.lt(bound),
                (Ordering::Less, true) => column.lte(bound),
            })
        })
}

fn contains_pattern(needle: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(needle))).escape(LIKE_ESCAPE)
}

/// Escapes the LIKE wildcards so user input is matched literally.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::domain::ski_field::value_objects::{FindManyRequest, NumericFilter, OrderByClause};

    fn sql(query: &SkiFieldQuery) -> String {
        select_query(query).build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("Coronet"), "Coronet");
    }

    #[test]
    fn default_query_orders_by_name_then_id() {
        let sql = sql(&SkiFieldQuery::from_request(FindManyRequest::default()));

        assert!(sql.contains(r#"ORDER BY "ski_fields"."name" ASC, "ski_fields"."id" ASC"#));
        assert!(sql.contains("LIMIT 10"));
        assert!(sql.contains("OFFSET 0"));
    }

    #[test]
    fn insensitive_contains_lowers_column_and_pattern() {
        let sql = sql(&SkiFieldQuery::from_request(FindManyRequest {
            filter: Some(SkiFieldFilter {
                region: Some(StringFilter {
                    contains: Some("OtaGo".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }));

        assert!(sql.contains(r#"LOWER("region") LIKE '%otago%' ESCAPE"#));
        assert!(!sql.contains("ILIKE"));
        assert!(!sql.contains("(E'"));
    }

    #[test]
    fn contains_escapes_wildcards_in_the_pattern() {
        let condition = filter_condition(&SkiFieldFilter {
            name: Some(StringFilter {
                contains: Some("50%_".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let sql = SkiFieldEntity::find()
            .filter(condition)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"LOWER("name") LIKE E'%50\%\_%' ESCAPE E'\'"#));
    }

    #[test]
    fn sensitive_filters_use_plain_comparisons() {
        let sql = sql(&SkiFieldQuery::from_request(FindManyRequest {
            filter: Some(SkiFieldFilter {
                name: Some(StringFilter {
                    equals: Some("Vail".to_string()),
                    contains: Some("ai".to_string()),
                    mode: StringFilterMode::Sensitive,
                }),
                ..Default::default()
            }),
            ..Default::default()
        }));

        assert!(sql.contains(r#""ski_fields"."name" = 'Vail'"#));
        assert!(sql.contains(r#""name" LIKE '%ai%' ESCAPE"#));
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn insensitive_equals_lowercases_both_sides() {
        let condition = filter_condition(&SkiFieldFilter {
            currency: Some(StringFilter {
                equals: Some("NZD".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let sql = SkiFieldEntity::find()
            .filter(condition)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"LOWER("currency") = 'nzd'"#));
    }

    #[test]
    fn price_bounds_and_order_follow_the_request() {
        let sql = sql(&SkiFieldQuery::from_request(FindManyRequest {
            filter: Some(SkiFieldFilter {
                full_day_pass_price: Some(NumericFilter {
                    gte: Some(Decimal::from(20)),
                    lt: Some(Decimal::from(30)),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            order_by: Some(vec![OrderByClause {
                field: "fullDayPassPrice".to_string(),
                direction: SortDirection::Desc,
            }]),
            skip: Some(5),
            take: Some(2),
        }));

        assert!(sql.contains(r#""ski_fields"."full_day_pass_price" >= 20"#));
        assert!(sql.contains(r#""ski_fields"."full_day_pass_price" < 30"#));
        assert!(sql.contains(
            r#"ORDER BY "ski_fields"."full_day_pass_price" DESC, "ski_fields"."id" ASC"#
        ));
        assert!(sql.contains("LIMIT 2"));
        assert!(sql.contains("OFFSET 5"));
    }

    #[test]
    fn name_lookup_matches_the_unique_index_expression() {
        let sql = SkiFieldEntity::find()
            .filter(name_equals_condition("Mt Hutt"))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"LOWER("name") = 'mt hutt'"#));
    }
}
