use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use skifield_core::{
    domain::common::DatabaseConfig,
    infrastructure::{
        db::postgres::Postgres, ski_field::repositories::postgres::PostgresSkiFieldStore,
    },
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    args::{Args, SeedPlan},
    data_seeder::DataSeeder,
};

mod args;
mod data_seeder;
mod seed_data;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_filter.as_str())),
        )
        .init();

    let plan = args.plan();
    if !plan.has_actions() {
        eprintln!("Specify at least one action: --migrate, --seed, --clean or --reset.");
        return ExitCode::FAILURE;
    }

    match run(args, plan).await {
        Ok(()) => {
            info!("Seeder completed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeder failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, plan: SeedPlan) -> Result<(), anyhow::Error> {
    let config = DatabaseConfig::from(args.db);
    let postgres = Postgres::new(&config).await?;

    if plan.migrate {
        info!("Applying migrations...");
        postgres.migrate().await?;
    }

    let seeder = DataSeeder::new(PostgresSkiFieldStore::new(postgres.get_db()));

    if plan.clean {
        info!("Cleaning database...");
        seeder.clean().await?;
    }

    if plan.seed {
        info!("Seeding database...");
        seeder.seed(seed_data::ski_fields()).await?;
    }

    Ok(())
}
