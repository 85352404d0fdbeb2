use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Creates a pooled database connection
pub async fn create_connection(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Connected to database");
    Ok(db)
}
