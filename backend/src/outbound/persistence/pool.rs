//! Async connection pool for Diesel PostgreSQL connections.
//!
//! Wraps `diesel-async`'s `bb8` integration. Checkout honours the configured
//! timeout and every failure is reported as a [`PoolError`].

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// Default maximum number of pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
/// Default checkout timeout.
pub const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available within the timeout.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool could not be built.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// The underlying failure description.
    pub fn message(&self) -> &str {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Pool settings.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use travel_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://travel@localhost/travel")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Configuration with [`DEFAULT_MAX_CONNECTIONS`] and
    /// [`DEFAULT_CHECKOUT_TIMEOUT`].
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: DEFAULT_MAX_CONNECTIONS,
            connection_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }

    /// Set the maximum number of connections; zero is raised to one.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    /// Set the checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Shared handle to the PostgreSQL pool. Cloning is cheap.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build a pool from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the pool cannot be constructed.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Check out a connection.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when none is available in time.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
