use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::example::{ExampleRepository, SeaOrmExampleRepository};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the store, apply migrations if enabled, and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(format!("{e:#}")))?;
    models::db::test_connection(&db)
        .await
        .map_err(|e| StartupError::Database(format!("{e:#}")))?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("migrations applied");
    } else {
        warn!("auto_migrate disabled; expecting schema to be in place");
    }

    let repo: Arc<dyn ExampleRepository> = Arc::new(SeaOrmExampleRepository::new(db));
    let state = ServerState::new(repo, &cfg.auth.jwt_secret);
    Ok(routes::build_router(state, build_cors()))
}

/// Serve the app on `server.host:server.port` until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;

    let addr = cfg.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl_c handler unavailable; shutting down");
        return;
    }
    info!("received Ctrl+C, draining connections");
}
