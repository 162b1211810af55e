use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the pool, create the schema if absent, and assemble the router.
pub async fn build_app(database: &configs::DatabaseConfig) -> anyhow::Result<Router> {
    common::env::ensure_sqlite_dir(&database.url).await?;

    let db_cfg: models::db::DatabaseConfig = database.into();
    let db = models::db::connect_with_config(&db_cfg).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;

    let state = ServerState::new(db);
    Ok(routes::build_router(state, build_cors()))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {}: {e}", cfg.server.bind_addr())))
}

/// Serve the app described by `cfg` until `shutdown` resolves.
///
/// Requests already in flight are allowed to finish before this returns.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg.database).await?;

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "auto service listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("auto service drained");
    Ok(())
}
