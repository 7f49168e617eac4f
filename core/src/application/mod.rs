use tracing::info;

use crate::{
    domain::common::{SkiFieldTrackerConfig, StorageBackend, services::Service},
    infrastructure::{
        db::postgres::Postgres,
        ski_field::repositories::{
            AnySkiFieldStore, in_memory::InMemorySkiFieldStore, postgres::PostgresSkiFieldStore,
        },
    },
};

pub type SkiFieldTrackerService = Service<AnySkiFieldStore, AnySkiFieldStore>;

/// Wires the configured storage backend into the service.
pub async fn create_service(
    config: SkiFieldTrackerConfig,
) -> Result<SkiFieldTrackerService, anyhow::Error> {
    let store = match config.storage {
        StorageBackend::Postgres => {
            let postgres = Postgres::new(&config.database).await?;
            if config.database.run_migrations {
                postgres.migrate().await?;
            }
            AnySkiFieldStore::Postgres(PostgresSkiFieldStore::new(postgres.get_db()))
        }
        StorageBackend::Memory => {
            info!("using in-memory ski field store");
            AnySkiFieldStore::InMemory(InMemorySkiFieldStore::new())
        }
    };

    Ok(Service::new(store.clone(), store))
}

/// Service backed by a fresh in-memory store.
pub fn create_in_memory_service() -> SkiFieldTrackerService {
    let store = AnySkiFieldStore::InMemory(InMemorySkiFieldStore::new());
    Service::new(store.clone(), store)
}
