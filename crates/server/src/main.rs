mod app;
mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod utils;

use app::{AppState, router};
use config::{Config, ConfigError};
use database::db::create_connection;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::DbErr;
use thiserror::Error;
use utils::shutdown::shutdown_signal;

#[derive(Error, Debug)]
enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    info!("Migrations applied");

    let app = router(AppState {
        db,
        catalog_path: config.catalog_path,
    });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Running axum on http://localhost:{}", config.port);
    info!("API: http://localhost:{}/api", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}
