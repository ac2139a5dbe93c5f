//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between Diesel rows (`models.rs`, `schema.rs`, both
//! internal) and domain types. Connections come from a `bb8` pool through
//! `diesel-async`; every database failure is mapped to the port's error type.
//!
//! # Example
//!
//! ```no_run
//! use travel_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/travel")).await?;
//! let users = DieselUserRepository::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_travel_package_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_travel_package_repository::DieselTravelPackageRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_CHECKOUT_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
