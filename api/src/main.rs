use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use skifield_api::{
    application::{
        http::server::http_server::{router, state, with_metrics},
        logger::init_logger,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let app = with_metrics(router(app_state)?, &args.server.root_path);

    let address = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("shutting down");
}
