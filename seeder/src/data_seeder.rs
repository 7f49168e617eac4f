use skifield_core::domain::{
    common::entities::app_errors::CoreError,
    ski_field::{
        entities::{NormalizedSkiField, SkiField},
        ports::{SkiFieldRepository, SkiFieldStore},
        query::{MAX_TAKE, Pagination, SkiFieldQuery},
        value_objects::{FindManyRequest, SkiFieldFilter, SkiFieldInput},
    },
};
use tracing::info;

/// Clean and seed operations, run through the store port so the same domain
/// rules apply as for API writes.
pub struct DataSeeder<S: SkiFieldStore> {
    store: S,
}

impl<S: SkiFieldStore> DataSeeder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Deletes every ski field in a single unit of work.
    pub async fn clean(&self) -> Result<u64, CoreError> {
        let repository = self.store.begin().await?;

        let count = repository.count(&SkiFieldFilter::default()).await?;
        if count == 0 {
            info!("Database is already empty. Nothing to clean.");
            return Ok(0);
        }

        info!("Cleaning {} ski fields from database...", count);
        let mut query = SkiFieldQuery::from_request(FindManyRequest::default());
        query.pagination = Pagination::new(None, Some(MAX_TAKE as i64));
        loop {
            let batch = repository.query(&query).await?;
            if batch.is_empty() {
                break;
            }
            for ski_field in &batch {
                repository.delete(ski_field).await?;
            }
        }
        repository.commit().await?;
        info!("Database cleaned successfully.");

        Ok(count)
    }

    /// Inserts the seed rows whose names are not present yet.
    pub async fn seed(&self, items: Vec<SkiFieldInput>) -> Result<u64, CoreError> {
        if items.is_empty() {
            info!("No seed data found.");
            return Ok(0);
        }

        let repository = self.store.begin().await?;

        let mut inserted = 0;
        for item in items {
            let fields = NormalizedSkiField::try_from_input(item)?;
            if repository.exists_by_name(&fields.name).await? {
                continue;
            }
            repository.add(SkiField::new(fields)).await?;
            inserted += 1;
        }

        if inserted == 0 {
            info!("Seed data already present. No new ski fields inserted.");
            return Ok(0);
        }

        repository.commit().await?;
        info!("Seeded {} ski fields.", inserted);

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use skifield_core::infrastructure::ski_field::repositories::in_memory::InMemorySkiFieldStore;

    use super::*;
    use crate::seed_data;

    async fn total(store: &InMemorySkiFieldStore) -> u64 {
        let repository = store.begin().await.unwrap();
        repository.count(&SkiFieldFilter::default()).await.unwrap()
    }

    #[tokio::test]
    async fn seed_inserts_all_rows_once() {
        let store = InMemorySkiFieldStore::new();
        let seeder = DataSeeder::new(store.clone());

        assert_eq!(seeder.seed(seed_data::ski_fields()).await.unwrap(), 25);
        assert_eq!(seeder.seed(seed_data::ski_fields()).await.unwrap(), 0);
        assert_eq!(total(&store).await, 25);
    }

    #[tokio::test]
    async fn seed_skips_names_already_present_in_other_case() {
        let store = InMemorySkiFieldStore::new();
        let seeder = DataSeeder::new(store.clone());
        seeder
            .seed(vec![SkiFieldInput {
                name: "VAIL".to_string(),
                country_code: "USA".to_string(),
                region: "Colorado".to_string(),
                full_day_pass_price: Decimal::from(150),
                currency: "USD".to_string(),
                nearest_town: "Vail".to_string(),
            }])
            .await
            .unwrap();

        assert_eq!(seeder.seed(seed_data::ski_fields()).await.unwrap(), 24);
    }

    #[tokio::test]
    async fn clean_removes_more_than_one_page() {
        let store = InMemorySkiFieldStore::new();
        let seeder = DataSeeder::new(store.clone());
        let items = (0..(MAX_TAKE + 5))
            .map(|i| SkiFieldInput {
                name: format!("Field {i}"),
                country_code: "NZL".to_string(),
                region: "Otago".to_string(),
                full_day_pass_price: Decimal::from(50),
                currency: "NZD".to_string(),
                nearest_town: "Wanaka".to_string(),
            })
            .collect();
        seeder.seed(items).await.unwrap();

        assert_eq!(seeder.clean().await.unwrap(), MAX_TAKE + 5);
        assert_eq!(total(&store).await, 0);
        assert_eq!(seeder.clean().await.unwrap(), 0);
    }
}
