//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `TRAVEL_*` environment variables and config
//! files, in that order of precedence. Every field is optional; accessors
//! apply the defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::DEFAULT_UPLOAD_MAX_BYTES;
use crate::outbound::persistence::DEFAULT_MAX_CONNECTIONS;

const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Runtime settings for the HTTP server and its adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRAVEL")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection URL. In-memory stores are used when absent.
    pub database_url: Option<String>,
    /// Directory where uploaded pictures are written and served from.
    pub upload_dir: Option<PathBuf>,
    /// Largest accepted picture upload, in bytes.
    pub upload_max_bytes: Option<usize>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations at startup.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Address to bind, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Configured database URL, if any. Blank values count as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Upload directory, falling back to `./uploads`.
    pub fn upload_dir(&self) -> &Path {
        self.upload_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_UPLOAD_DIR))
    }

    /// Upload size limit, falling back to 5 MiB.
    pub fn upload_max_bytes(&self) -> usize {
        self.upload_max_bytes.unwrap_or(DEFAULT_UPLOAD_MAX_BYTES)
    }

    /// Pool size, falling back to the pool default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Whether to apply migrations, on unless explicitly disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }
}
