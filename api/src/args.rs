use clap::{Args as ClapArgs, Parser, ValueEnum};
use skifield_core::domain::common::{DatabaseConfig, SkiFieldTrackerConfig, StorageBackend};

#[derive(Debug, Clone, Parser)]
#[command(name = "skifield-api", version, about = "Ski Field Tracker HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/ski`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list. Empty allows any origin without credentials.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = ""
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "skifields")]
    pub name: String,

    #[arg(
        long = "database-run-migrations",
        env = "DATABASE_RUN_MIGRATIONS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub run_migrations: bool,

    #[arg(long = "storage", env = "STORAGE", value_enum, default_value_t = StorageArg::Postgres)]
    pub storage: StorageArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageArg {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl ServerArgs {
    /// Configured origins with blanks removed.
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
    }
}

impl From<StorageArg> for StorageBackend {
    fn from(storage: StorageArg) -> Self {
        match storage {
            StorageArg::Postgres => StorageBackend::Postgres,
            StorageArg::Memory => StorageBackend::Memory,
        }
    }
}

impl From<Args> for SkiFieldTrackerConfig {
    fn from(args: Args) -> Self {
        SkiFieldTrackerConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                run_migrations: args.db.run_migrations,
            },
            storage: args.db.storage.into(),
        }
    }
}
