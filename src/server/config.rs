//! HTTP server configuration object.

use std::net::SocketAddr;

use reviewboard::outbound::persistence::DbPool;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self {
            bind_addr,
            db_pool,
        }
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Database pool backing the persistence adapters.
    #[must_use]
    pub fn db_pool(&self) -> &DbPool {
        &self.db_pool
    }
}
