use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::ski_field::entities::SkiField;
use crate::entity::ski_fields::{ActiveModel as SkiFieldActiveModel, Model as SkiFieldModel};

impl From<SkiFieldModel> for SkiField {
    fn from(model: SkiFieldModel) -> Self {
        SkiField {
            id: Some(model.id),
            uid: model.uid,
            name: model.name,
            country_code: model.country_code,
            region: model.region,
            full_day_pass_price: model.full_day_pass_price,
            currency: model.currency,
            nearest_town: model.nearest_town,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<SkiField> for SkiFieldActiveModel {
    fn from(ski_field: SkiField) -> Self {
        SkiFieldActiveModel {
            id: ski_field.id.map(Set).unwrap_or(NotSet),
            uid: Set(ski_field.uid),
            name: Set(ski_field.name),
            country_code: Set(ski_field.country_code),
            region: Set(ski_field.region),
            full_day_pass_price: Set(ski_field.full_day_pass_price),
            currency: Set(ski_field.currency),
            nearest_town: Set(ski_field.nearest_town),
            created_at: Set(ski_field.created_at.fixed_offset()),
            updated_at: Set(ski_field.updated_at.fixed_offset()),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn unsaved_ski_field_leaves_identity_to_the_database() {
        let now = Utc::now();
        let active = SkiFieldActiveModel::from(SkiField {
            id: None,
            uid: "uid".to_string(),
            name: "Cardrona".to_string(),
            country_code: "NZL".to_string(),
            region: "Otago".to_string(),
            full_day_pass_price: Decimal::from(159),
            currency: "NZD".to_string(),
            nearest_town: "Wanaka".to_string(),
            created_at: now,
            updated_at: now,
        });

        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Cardrona".to_string()));
        assert_eq!(active.created_at, Set(now.fixed_offset()));
    }
}
