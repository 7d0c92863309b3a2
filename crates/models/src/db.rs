use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::time::Duration;
use tracing::info;

pub use configs::DatabaseConfig;

/// Connect using pool settings from the `[database]` config section.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    // Every recycled connection to an in-memory database starts out empty.
    if cfg.is_sqlite_memory() {
        anyhow::bail!("in-memory sqlite cannot back a connection pool; use connect_ephemeral");
    }
    let mut opts = ConnectOptions::new(cfg.url.clone());
    let max_connections = cfg.max_connections;
    opts.max_connections(max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections, "database connected");
    Ok(db)
}

const EPHEMERAL_KEEPALIVE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Single-connection in-memory SQLite database, for tests and local experiments.
pub async fn connect_ephemeral() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // The database lives exactly as long as its only connection.
    opts.max_connections(1)
        .min_connections(1)
        .idle_timeout(EPHEMERAL_KEEPALIVE)
        .max_lifetime(EPHEMERAL_KEEPALIVE)
        .sqlx_logging(false);
    Ok(Database::connect(opts).await?)
}

/// Round-trip a trivial statement to prove the connection is usable.
pub async fn test_connection(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    db.execute(Statement::from_string(backend, "SELECT 1".to_string())).await?;
    Ok(())
}
