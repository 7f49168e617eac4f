use std::time::Instant;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, SqlErr, TransactionTrait,
};
use tracing::error;

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
use crate::entity::ski_fields::{
    ActiveModel as SkiFieldActiveModel, Column as SkiFieldColumn, Entity as SkiFieldEntity,
};
use crate::infrastructure::ski_field::conditions::{
    filter_condition, name_equals_condition, select_query,
};

/// Unique index enforcing case-insensitive names.
const NAME_INDEX: &str = "ux_ski_fields_name";

#[derive(Debug, Clone)]
pub struct PostgresSkiFieldStore {
    pub db: DatabaseConnection,
}

impl PostgresSkiFieldStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

pub struct PostgresSkiFieldRepository {
    txn: DatabaseTransaction,
}

impl SkiFieldStore for PostgresSkiFieldStore {
    type Repository = PostgresSkiFieldRepository;

    async fn begin(&self) -> Result<Self::Repository, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin ski field transaction: {}", e);
            CoreError::ServiceUnavailable
        })?;

        Ok(PostgresSkiFieldRepository { txn })
    }
}

impl SkiFieldRepository for PostgresSkiFieldRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool, CoreError> {
        let count = SkiFieldEntity::find()
            .filter(name_equals_condition(name))
            .count(&self.txn)
            .await
            .map_err(|e| {
                error!("Failed to look up ski field by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(count > 0)
    }

    async fn get_by_uid(&self, uid: &str) -> Result<Option<SkiField>, CoreError> {
        let ski_field = SkiFieldEntity::find()
            .filter(SkiFieldColumn::Uid.eq(uid))
            .one(&self.txn)
            .await
            .map_err(|e| {
                error!("Failed to get ski field by uid: {}", e);
                CoreError::InternalServerError
            })?
            .map(SkiField::from);

        Ok(ski_field)
    }

    async fn add(&self, ski_field: SkiField) -> Result<SkiField, CoreError> {
        let name = ski_field.name.clone();

        SkiFieldEntity::insert(SkiFieldActiveModel::from(SkiField {
            id: None,
            ..ski_field
        }))
        .exec_with_returning(&self.txn)
        .await
        .map(SkiField::from)
        .map_err(|e| write_error("create", name, e))
    }

    async fn update(&self, ski_field: SkiField) -> Result<SkiField, CoreError> {
        if ski_field.id.is_none() {
            return Err(CoreError::NotFound(ski_field.uid));
        }
        let name = ski_field.name.clone();

        SkiFieldEntity::update(SkiFieldActiveModel::from(ski_field))
            .exec(&self.txn)
            .await
            .map(SkiField::from)
            .map_err(|e| write_error("update", name, e))
    }

    async fn delete(&self, ski_field: &SkiField) -> Result<(), CoreError> {
        let result = SkiFieldEntity::delete_many()
            .filter(SkiFieldColumn::Uid.eq(ski_field.uid.as_str()))
            .exec(&self.txn)
            .await
            .map_err(|e| {
                error!("Failed to delete ski field: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound(ski_field.uid.clone()));
        }

        Ok(())
    }

    async fn count(&self, filter: &SkiFieldFilter) -> Result<u64, CoreError> {
        SkiFieldEntity::find()
            .filter(filter_condition(filter))
            .count(&self.txn)
            .await
            .map_err(|e| {
                error!("Failed to count ski fields: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn query(&self, query: &SkiFieldQuery) -> Result<Vec<SkiField>, CoreError> {
        let ski_fields = select_query(query)
            .all(&self.txn)
            .await
            .map_err(|e| {
                error!("Failed to query ski fields: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(SkiField::from)
            .collect::<Vec<SkiField>>();

        Ok(ski_fields)
    }

    async fn commit(self) -> Result<(), CoreError> {
        self.txn.commit().await.map_err(|e| {
            error!("Failed to commit ski field transaction: {}", e);
            CoreError::InternalServerError
        })
    }
}

/// A concurrent writer can slip past the name pre-check; the unique index
/// still rejects it and the violation is reported as a name conflict.
fn write_error(action: &str, name: String, e: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(message)) = e.sql_err()
        && message.contains(NAME_INDEX)
    {
        return CoreError::NameAlreadyExists(name);
    }

    error!("Failed to {} ski field: {}", action, e);
    CoreError::InternalServerError
}

impl HealthCheckRepository for PostgresSkiFieldStore {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let started = Instant::now();
        let healthy = self.db.ping().await.is_ok();

        Ok(DatabaseHealthStatus {
            backend: "postgres".to_string(),
            healthy,
            latency_ms: started.elapsed().as_millis() as u64,
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        let started = Instant::now();

        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::ServiceUnavailable
        })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}
