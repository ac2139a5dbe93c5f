//! Resolved server configuration handed to [`super::create_server`].

use std::net::SocketAddr;
use std::path::PathBuf;

use travel_backend::outbound::persistence::DbPool;
use travel_backend::settings::ServerSettings;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;

/// Everything the server needs once settings are loaded and the pool is up.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) upload_dir: PathBuf,
    pub(crate) upload_max_bytes: usize,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Take addresses and upload limits from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self {
            bind_addr: settings.bind_addr(),
            db_pool: None,
            upload_dir: settings.upload_dir().to_path_buf(),
            upload_max_bytes: settings.upload_max_bytes(),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Attach a database pool; the PostgreSQL adapters replace the
    /// in-memory stores.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
