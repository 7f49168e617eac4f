use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uid},
    ski_field::value_objects::SkiFieldInput,
};

pub const MAX_TEXT_LENGTH: usize = 120;
pub const CODE_LENGTH: usize = 3;
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkiField {
    /// Storage key. `None` until the store has persisted the record.
    pub id: Option<i32>,
    pub uid: String,
    pub name: String,
    pub country_code: String,
    pub region: String,
    pub full_day_pass_price: Decimal,
    pub currency: String,
    pub nearest_town: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trimmed, upper-cased and rounded field set, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSkiField {
    pub name: String,
    pub country_code: String,
    pub region: String,
    pub full_day_pass_price: Decimal,
    pub currency: String,
    pub nearest_town: String,
}

impl SkiField {
    pub fn new(fields: NormalizedSkiField) -> Self {
        let now = generate_timestamp();

        Self {
            id: None,
            uid: generate_uid(),
            name: fields.name,
            country_code: fields.country_code,
            region: fields.region,
            full_day_pass_price: fields.full_day_pass_price,
            currency: fields.currency,
            nearest_town: fields.nearest_town,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, fields: NormalizedSkiField) {
        self.name = fields.name;
        self.country_code = fields.country_code;
        self.region = fields.region;
        self.full_day_pass_price = fields.full_day_pass_price;
        self.currency = fields.currency;
        self.nearest_town = fields.nearest_town;
        self.updated_at = generate_timestamp();
    }

    pub fn has_name(&self, name: &str) -> bool {
        fold_case(&self.name) == fold_case(name)
    }
}

impl NormalizedSkiField {
    pub fn try_from_input(input: SkiFieldInput) -> Result<Self, CoreError> {
        let name = required_text("name", &input.name)?;
        let country_code = code("countryCode", &input.country_code)?;
        let region = required_text("region", &input.region)?;
        let currency = code("currency", &input.currency)?;
        let nearest_town = required_text("nearestTown", &input.nearest_town)?;

        if input.full_day_pass_price < Decimal::ZERO {
            return Err(CoreError::validation(
                "fullDayPassPrice",
                "must not be negative",
            ));
        }
        let full_day_pass_price = round_price(input.full_day_pass_price);
        if full_day_pass_price > MAX_PRICE {
            return Err(CoreError::validation(
                "fullDayPassPrice",
                format!("must not exceed {MAX_PRICE}"),
            ));
        }

        Ok(Self {
            name,
            country_code,
            region,
            full_day_pass_price,
            currency,
            nearest_town,
        })
    }
}

pub fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Case folding used for name uniqueness and insensitive matching.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

fn required_text(field: &str, value: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::validation(field, "is required"));
    }
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(CoreError::validation(
            field,
            format!("must be at most {MAX_TEXT_LENGTH} characters"),
        ));
    }
    Ok(value.to_string())
}

fn code(field: &str, value: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.len() != CODE_LENGTH || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::validation(
            field,
            format!("must be a {CODE_LENGTH}-letter code"),
        ));
    }
    Ok(value.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn input(name: &str, price: &str) -> SkiFieldInput {
        SkiFieldInput {
            name: name.to_string(),
            country_code: " nzl ".to_string(),
            region: " Otago ".to_string(),
            full_day_pass_price: Decimal::from_str(price).unwrap(),
            currency: "nzd".to_string(),
            nearest_town: "Queenstown  ".to_string(),
        }
    }

    #[test]
    fn normalization_trims_and_uppercases() {
        let fields = NormalizedSkiField::try_from_input(input("  Coronet Peak ", "135")).unwrap();
        assert_eq!(fields.name, "Coronet Peak");
        assert_eq!(fields.country_code, "NZL");
        assert_eq!(fields.region, "Otago");
        assert_eq!(fields.currency, "NZD");
        assert_eq!(fields.nearest_town, "Queenstown");
    }

    #[test]
    fn price_rounds_half_away_from_zero() {
        assert_eq!(
            round_price(Decimal::from_str("10.005").unwrap()),
            Decimal::from_str("10.01").unwrap()
        );
        assert_eq!(
            round_price(Decimal::from_str("10.004").unwrap()),
            Decimal::from_str("10.00").unwrap()
        );
        assert_eq!(
            round_price(Decimal::from_str("0.125").unwrap()),
            Decimal::from_str("0.13").unwrap()
        );
    }

    #[test]
    fn rejects_blank_name() {
        let err = NormalizedSkiField::try_from_input(input("   ", "10")).unwrap_err();
        assert_eq!(err, CoreError::validation("name", "is required"));
    }

    #[test]
    fn rejects_overlong_region() {
        let mut raw = input("Ohau", "89");
        raw.region = "x".repeat(MAX_TEXT_LENGTH + 1);
        let err = NormalizedSkiField::try_from_input(raw).unwrap_err();
        assert!(matches!(err, CoreError::Validation { ref field, .. } if field == "region"));
    }

    #[test]
    fn rejects_bad_codes_and_prices() {
        let mut raw = input("Ohau", "89");
        raw.country_code = "NZ".to_string();
        assert!(NormalizedSkiField::try_from_input(raw).is_err());

        let mut raw = input("Ohau", "89");
        raw.currency = "N2D".to_string();
        assert!(NormalizedSkiField::try_from_input(raw).is_err());

        assert!(NormalizedSkiField::try_from_input(input("Ohau", "-0.01")).is_err());
        assert!(NormalizedSkiField::try_from_input(input("Ohau", "10000.01")).is_err());
        assert!(NormalizedSkiField::try_from_input(input("Ohau", "10000")).is_ok());
    }

    #[test]
    fn update_refreshes_updated_at_only() {
        let mut ski_field =
            SkiField::new(NormalizedSkiField::try_from_input(input("Ohau", "89")).unwrap());
        let created_at = ski_field.created_at;
        let uid = ski_field.uid.clone();

        ski_field.update(NormalizedSkiField::try_from_input(input("Ohau Snow", "90")).unwrap());

        assert_eq!(ski_field.name, "Ohau Snow");
        assert_eq!(ski_field.created_at, created_at);
        assert_eq!(ski_field.uid, uid);
        assert!(ski_field.updated_at >= created_at);
    }

    #[test]
    fn name_comparison_ignores_case() {
        let ski_field =
            SkiField::new(NormalizedSkiField::try_from_input(input("Vail", "199")).unwrap());
        assert!(ski_field.has_name("VAIL"));
        assert!(!ski_field.has_name("Vail Pass"));
    }
}
