use clap::{Args as ClapArgs, Parser};
use skifield_core::domain::common::DatabaseConfig;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "skifield-seeder",
    version,
    about = "Migrates, cleans and seeds the ski field database"
)]
pub struct Args {
    /// Apply pending migrations.
    #[arg(long)]
    pub migrate: bool,

    /// Delete every ski field.
    #[arg(long)]
    pub clean: bool,

    /// Insert the built-in ski fields that are missing.
    #[arg(long)]
    pub seed: bool,

    /// Shorthand for `--migrate --clean --seed`.
    #[arg(long)]
    pub reset: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,
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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub migrate: bool,
    pub clean: bool,
    pub seed: bool,
}

impl SeedPlan {
    pub fn has_actions(&self) -> bool {
        self.migrate || self.clean || self.seed
    }
}

impl Args {
    pub fn plan(&self) -> SeedPlan {
        if self.reset {
            return SeedPlan {
                migrate: true,
                clean: true,
                seed: true,
            };
        }

        SeedPlan {
            migrate: self.migrate,
            clean: self.clean,
            seed: self.seed,
        }
    }
}

impl From<DatabaseArgs> for DatabaseConfig {
    fn from(args: DatabaseArgs) -> Self {
        DatabaseConfig {
            host: args.host,
            port: args.port,
            username: args.user,
            password: args.password,
            name: args.name,
            run_migrations: false,
        }
    }
}
