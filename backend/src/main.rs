//! Backend entry-point: loads settings, prepares the database and serves the
//! REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use chauffeur_backend::inbound::http::health::HealthState;
use chauffeur_backend::inbound::http::session_config::{BuildMode, load_session_key};
use chauffeur_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use chauffeur_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let database_url = settings.database_url().map_err(std::io::Error::other)?;
    let cookie_secure = settings.cookie_secure().map_err(std::io::Error::other)?;
    let allow_ephemeral = settings
        .allow_ephemeral_session_key()
        .map_err(std::io::Error::other)?;

    let key = load_session_key(
        settings.session_key_file(),
        BuildMode::from_debug_assertions(),
        allow_ephemeral,
    )
    .map_err(std::io::Error::other)?;

    run_pending_migrations(database_url)
        .await
        .map_err(std::io::Error::other)?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(key, cookie_secure, bind_addr, pool);
    let server = create_server(health_state.clone(), config)?;
    info!(%bind_addr, "listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
