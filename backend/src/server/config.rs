//! HTTP server configuration object.

use actix_web::cookie::Key;
use chauffeur_backend::outbound::persistence::DbPool;
use std::net::SocketAddr;

/// Everything `create_server` needs besides the health state.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration over an initialised pool.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            key,
            cookie_secure,
            bind_addr,
            db_pool,
        }
    }
}
