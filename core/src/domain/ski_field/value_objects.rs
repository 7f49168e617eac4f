use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ski_field::entities::SkiField;

/// Raw field set shared by the create and update use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkiFieldInput {
    pub name: String,
    pub country_code: String,
    pub region: String,
    pub full_day_pass_price: Decimal,
    pub currency: String,
    pub nearest_town: String,
}

pub struct CreateSkiFieldInput {
    pub fields: SkiFieldInput,
}

pub struct UpdateSkiFieldInput {
    pub uid: String,
    pub fields: SkiFieldInput,
}

pub struct DeleteSkiFieldInput {
    pub uid: String,
}

/// Public representation of a ski field. `id` carries the public uid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkiFieldResponse {
    pub id: String,
    pub name: String,
    pub country_code: String,
    pub region: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub full_day_pass_price: Decimal,
    pub currency: String,
    pub nearest_town: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SkiField> for SkiFieldResponse {
    fn from(ski_field: SkiField) -> Self {
        Self {
            id: ski_field.uid,
            name: ski_field.name,
            country_code: ski_field.country_code,
            region: ski_field.region,
            full_day_pass_price: ski_field.full_day_pass_price,
            currency: ski_field.currency,
            nearest_town: ski_field.nearest_town,
            created_at: ski_field.created_at,
            updated_at: ski_field.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

/// Prisma-style `findMany` request: `where`, `orderBy`, `skip` and `take`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindManyRequest {
    #[serde(rename = "where", default)]
    pub filter: Option<SkiFieldFilter>,
    #[serde(default)]
    pub order_by: Option<Vec<OrderByClause>>,
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub take: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkiFieldFilter {
    pub name: Option<StringFilter>,
    pub country_code: Option<StringFilter>,
    pub region: Option<StringFilter>,
    pub full_day_pass_price: Option<NumericFilter>,
    pub currency: Option<StringFilter>,
    pub nearest_town: Option<StringFilter>,
    pub created_at: Option<DateTimeFilter>,
    pub updated_at: Option<DateTimeFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StringFilter {
    pub equals: Option<String>,
    pub contains: Option<String>,
    #[serde(default)]
    pub mode: StringFilterMode,
}

impl StringFilter {
    /// Trimmed `equals` value; blank values impose no constraint.
    pub fn equals_value(&self) -> Option<&str> {
        non_blank(self.equals.as_deref())
    }

    /// Trimmed `contains` value; blank values impose no constraint.
    pub fn contains_value(&self) -> Option<&str> {
        non_blank(self.contains.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StringFilterMode {
    #[serde(alias = "Sensitive")]
    Sensitive,
    #[default]
    #[serde(alias = "Insensitive")]
    Insensitive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NumericFilter {
    #[schema(value_type = Option<f64>)]
    pub equals: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub gt: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub gte: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub lt: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub lte: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateTimeFilter {
    pub equals: Option<DateTime<Utc>>,
    pub gt: Option<DateTime<Utc>>,
    pub gte: Option<DateTime<Utc>>,
    pub lt: Option<DateTime<Utc>>,
    pub lte: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderByClause {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "Asc", alias = "ASC")]
    Asc,
    #[serde(alias = "Desc", alias = "DESC")]
    Desc,
}
