use crate::config::PersistenceConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::debug;

pub async fn connect_to_database(config: &PersistenceConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(false);

    // Every pooled connection to sqlite::memory: opens its own empty database
    if config.is_in_memory() {
        options.max_connections(1).min_connections(1);
    }

    debug!("Connecting to {}", config.database_url);
    Database::connect(options).await
}

pub async fn connect_to_memory_database() -> Result<DatabaseConnection, DbErr> {
    connect_to_database(&PersistenceConfig::in_memory()).await
}
