use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    ski_field::{
        entities::SkiField,
        ports::{SkiFieldRepository, SkiFieldStore},
        query::SkiFieldQuery,
        value_objects::SkiFieldFilter,
    },
};

#[derive(Debug, Clone, Default)]
struct InMemoryState {
    rows: Vec<SkiField>,
    last_id: i32,
}

impl InMemoryState {
    fn position(&self, uid: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.uid == uid)
    }

    fn name_taken_by_other(&self, ski_field: &SkiField) -> bool {
        self.rows
            .iter()
            .any(|row| row.uid != ski_field.uid && row.has_name(&ski_field.name))
    }
}

/// Process-local store used for development and tests. Units of work are
/// serialized: [`SkiFieldStore::begin`] holds the store lock until the
/// repository is committed or dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemorySkiFieldStore {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemorySkiFieldStore {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct InMemorySkiFieldRepository {
    committed: OwnedMutexGuard<InMemoryState>,
    pending: Mutex<InMemoryState>,
}

impl SkiFieldStore for InMemorySkiFieldStore {
    type Repository = InMemorySkiFieldRepository;

    async fn begin(&self) -> Result<Self::Repository, CoreError> {
        let committed = self.state.clone().lock_owned().await;
        let pending = Mutex::new(committed.clone());

        Ok(InMemorySkiFieldRepository { committed, pending })
    }
}

impl SkiFieldRepository for InMemorySkiFieldRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool, CoreError> {
        let state = self.pending.lock().await;
        Ok(state.rows.iter().any(|row| row.has_name(name)))
    }

    async fn get_by_uid(&self, uid: &str) -> Result<Option<SkiField>, CoreError> {
        let state = self.pending.lock().await;
        Ok(state.rows.iter().find(|row| row.uid == uid).cloned())
    }

    async fn add(&self, mut ski_field: SkiField) -> Result<SkiField, CoreError> {
        let mut state = self.pending.lock().await;

        if state.name_taken_by_other(&ski_field) {
            return Err(CoreError::NameAlreadyExists(ski_field.name));
        }

        state.last_id += 1;
        ski_field.id = Some(state.last_id);
        state.rows.push(ski_field.clone());

        Ok(ski_field)
    }

    async fn update(&self, ski_field: SkiField) -> Result<SkiField, CoreError> {
        let mut state = self.pending.lock().await;

        let index = state
            .position(&ski_field.uid)
            .ok_or_else(|| CoreError::NotFound(ski_field.uid.clone()))?;

        if state.name_taken_by_other(&ski_field) {
            return Err(CoreError::NameAlreadyExists(ski_field.name));
        }

        state.rows[index] = ski_field.clone();

        Ok(ski_field)
    }

    async fn delete(&self, ski_field: &SkiField) -> Result<(), CoreError> {
        let mut state = self.pending.lock().await;

        let index = state
            .position(&ski_field.uid)
            .ok_or_else(|| CoreError::NotFound(ski_field.uid.clone()))?;
        state.rows.remove(index);

        Ok(())
    }

    async fn count(&self, filter: &SkiFieldFilter) -> Result<u64, CoreError> {
        let state = self.pending.lock().await;
        Ok(state.rows.iter().filter(|row| filter.matches(row)).count() as u64)
    }

    async fn query(&self, query: &SkiFieldQuery) -> Result<Vec<SkiField>, CoreError> {
        let state = self.pending.lock().await;

        let mut rows: Vec<&SkiField> = state
            .rows
            .iter()
            .filter(|row| query.filter.matches(row))
            .collect();
        // Stable sort: rows are kept in insertion order, so ties fall back to id.
        rows.sort_by(|a, b| query.compare(a, b));

        Ok(rows
            .into_iter()
            .skip(query.pagination.skip as usize)
            .take(query.pagination.take as usize)
            .cloned()
            .collect())
    }

    async fn commit(self) -> Result<(), CoreError> {
        let Self {
            mut committed,
            pending,
        } = self;
        *committed = pending.into_inner();

        Ok(())
    }
}

impl HealthCheckRepository for InMemorySkiFieldStore {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            backend: "memory".to_string(),
            healthy: true,
            latency_ms: 0,
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::ski_field::{
        entities::NormalizedSkiField,
        value_objects::{FindManyRequest, SkiFieldInput},
    };

    fn ski_field(name: &str) -> SkiField {
        SkiField::new(
            NormalizedSkiField::try_from_input(SkiFieldInput {
                name: name.to_string(),
                country_code: "AUS".to_string(),
                region: "Victoria".to_string(),
                full_day_pass_price: Decimal::from(149),
                currency: "AUD".to_string(),
                nearest_town: "Mansfield".to_string(),
            })
            .unwrap(),
        )
    }

    async fn all(store: &InMemorySkiFieldStore) -> Vec<SkiField> {
        let repository = store.begin().await.unwrap();
        repository
            .query(&SkiFieldQuery::from_request(FindManyRequest::default()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn commit_publishes_writes_and_assigns_ids() {
        let store = InMemorySkiFieldStore::new();

        let repository = store.begin().await.unwrap();
        let first = repository.add(ski_field("Mt Buller")).await.unwrap();
        let second = repository.add(ski_field("Falls Creek")).await.unwrap();
        repository.commit().await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(all(&store).await.len(), 2);
    }

    #[tokio::test]
    async fn dropped_unit_of_work_discards_writes() {
        let store = InMemorySkiFieldStore::new();

        {
            let repository = store.begin().await.unwrap();
            repository.add(ski_field("Mt Hotham")).await.unwrap();
        }

        assert!(all(&store).await.is_empty());
    }

    #[tokio::test]
    async fn add_enforces_case_insensitive_name_uniqueness() {
        let store = InMemorySkiFieldStore::new();
        let repository = store.begin().await.unwrap();
        repository.add(ski_field("Thredbo")).await.unwrap();

        let err = repository.add(ski_field("THREDBO")).await.unwrap_err();

        assert_eq!(err, CoreError::NameAlreadyExists("THREDBO".to_string()));
    }

    #[tokio::test]
    async fn query_skips_past_the_end_and_counts_everything() {
        let store = InMemorySkiFieldStore::new();
        let repository = store.begin().await.unwrap();
        for name in ["Perisher", "Charlotte Pass", "Selwyn"] {
            repository.add(ski_field(name)).await.unwrap();
        }

        let rows = repository
            .query(&SkiFieldQuery::from_request(FindManyRequest {
                skip: Some(10),
                ..Default::default()
            }))
            .await
            .unwrap();
        let total = repository.count(&SkiFieldFilter::default()).await.unwrap();

        assert!(rows.is_empty());
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn delete_of_missing_row_is_not_found() {
        let store = InMemorySkiFieldStore::new();
        let repository = store.begin().await.unwrap();

        let err = repository.delete(&ski_field("Mt Baw Baw")).await.unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
