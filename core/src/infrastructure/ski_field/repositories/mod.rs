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

use self::{
    in_memory::{InMemorySkiFieldRepository, InMemorySkiFieldStore},
    postgres::{PostgresSkiFieldRepository, PostgresSkiFieldStore},
};

pub mod in_memory;
pub mod postgres;

/// Storage backend chosen at startup.
#[derive(Debug, Clone)]
pub enum AnySkiFieldStore {
    Postgres(PostgresSkiFieldStore),
    InMemory(InMemorySkiFieldStore),
}

pub enum AnySkiFieldRepository {
    Postgres(PostgresSkiFieldRepository),
    InMemory(InMemorySkiFieldRepository),
}

impl SkiFieldStore for AnySkiFieldStore {
    type Repository = AnySkiFieldRepository;

    async fn begin(&self) -> Result<Self::Repository, CoreError> {
        match self {
            AnySkiFieldStore::Postgres(store) => {
                store.begin().await.map(AnySkiFieldRepository::Postgres)
            }
            AnySkiFieldStore::InMemory(store) => {
                store.begin().await.map(AnySkiFieldRepository::InMemory)
            }
        }
    }
}

impl SkiFieldRepository for AnySkiFieldRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool, CoreError> {
        match self {
            AnySkiFieldRepository::Postgres(r) => r.exists_by_name(name).await,
            AnySkiFieldRepository::InMemory(r) => r.exists_by_name(name).await,
        }
    }

    async fn get_by_uid(&self, uid: &str) -> Result<Option<SkiField>, CoreError> {
        match self {
            AnySkiFieldRepository::Postgres(r) => r.get_by_uid(uid).await,
            AnySkiFieldRepository::InMemory(r) => r.get_by_uid(uid).await,
        }
    }

    async fn add(&self, ski_field: SkiField) -> Result<SkiField, CoreError> {
        match self {
            AnySkiFieldRepository::Postgres(r) => r.add(ski_field).await,
            AnySkiFieldRepository::InMemory(r) => r.add(ski_field).await,
        }
    }

    async fn update(&self, ski_field: SkiField) -> Result<SkiField, CoreError> {
        match self {
            AnySkiFieldRepository::Postgres(r) => r.update(ski_field).await,
            AnySkiFieldRepository::InMemory(r) => r.update(ski_field).await,
        }
    }

    async fn delete(&self, ski_field: &SkiField) -> Result<(), CoreError> {
        match self {
            AnySkiFieldRepository::Postgres(r) => r.delete(ski_field).await,
            AnySkiFieldRepository::InMemory(r) => r.delete(ski_field).await,
        }
    }

    async fn count(&self, filter: &SkiFieldFilter) -> Result<u64, CoreError> {
        match self {
            AnySkiFieldRepository::Postgres(r) => r.count(filter).await,
            AnySkiFieldRepository::InMemory(r) => r.count(filter).await,
        }
    }

    async fn query(&self, query: &SkiFieldQuery) -> Result<Vec<SkiField>, CoreError> {
        match self {
            AnySkiFieldRepository::Postgres(r) => r.query(query).await,
            AnySkiFieldRepository::InMemory(r) => r.query(query).await,
        }
    }

    async fn commit(self) -> Result<(), CoreError> {
        match self {
            AnySkiFieldRepository::Postgres(r) => r.commit().await,
            AnySkiFieldRepository::InMemory(r) => r.commit().await,
        }
    }
}

impl HealthCheckRepository for AnySkiFieldStore {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        match self {
            AnySkiFieldStore::Postgres(store) => store.readiness().await,
            AnySkiFieldStore::InMemory(store) => store.readiness().await,
        }
    }

    async fn health(&self) -> Result<u64, CoreError> {
        match self {
            AnySkiFieldStore::Postgres(store) => store.health().await,
            AnySkiFieldStore::InMemory(store) => store.health().await,
        }
    }
}
