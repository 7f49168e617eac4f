use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let postgres = Self::connect(config.url()).await?;
        info!(host = %config.host, database = %config.name, "connected to postgres");

        Ok(postgres)
    }

    pub async fn connect(url: String) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(url);
        options
            .max_connections(10)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Applies the embedded SQL migrations in `core/migrations`.
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        sqlx::migrate!("./migrations")
            .run(self.db.get_postgres_connection_pool())
            .await?;
        info!("database migrations applied");

        Ok(())
    }
}
