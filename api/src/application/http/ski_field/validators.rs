use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use skifield_core::domain::ski_field::{
    entities::{MAX_PRICE, MAX_TEXT_LENGTH, round_price},
    value_objects::SkiFieldInput,
};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Za-z]{3}\s*$").expect("valid code regex"));

/// Request body shared by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkiFieldValidator {
    #[validate(custom(function = "validate_text", message = "name must be 1 to 120 characters"))]
    pub name: String,

    #[validate(regex(path = *CODE_REGEX, message = "countryCode must be a 3-letter code"))]
    pub country_code: String,

    #[validate(custom(function = "validate_text", message = "region must be 1 to 120 characters"))]
    pub region: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, minimum = 0, maximum = 10000)]
    pub full_day_pass_price: Decimal,

    #[validate(regex(path = *CODE_REGEX, message = "currency must be a 3-letter code"))]
    pub currency: String,

    #[validate(custom(
        function = "validate_text",
        message = "nearestTown must be 1 to 120 characters"
    ))]
    pub nearest_town: String,
}

/// Length is measured after trimming, the same way the stored value is.
fn validate_text(value: &str) -> Result<(), ValidationError> {
    let length = value.trim().chars().count();
    if length == 0 || length > MAX_TEXT_LENGTH {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO || round_price(*price) > MAX_PRICE {
        return Err(ValidationError::new("range")
            .with_message("fullDayPassPrice must be between 0 and 10000".into()));
    }
    Ok(())
}

impl From<SkiFieldValidator> for SkiFieldInput {
    fn from(payload: SkiFieldValidator) -> Self {
        SkiFieldInput {
            name: payload.name,
            country_code: payload.country_code,
            region: payload.region,
            full_day_pass_price: payload.full_day_pass_price,
            currency: payload.currency,
            nearest_town: payload.nearest_town,
        }
    }
}
