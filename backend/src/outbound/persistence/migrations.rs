//! Embedded schema migrations.
//!
//! `diesel_migrations` needs a synchronous connection, so the run happens on
//! a blocking thread.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// Could not connect to the database.
    #[error("migration connection failed: {message}")]
    Connection { message: String },
    /// A migration failed to apply.
    #[error("migration failed: {message}")]
    Apply { message: String },
}

fn run_blocking(database_url: &str) -> Result<usize, MigrationError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| {
        MigrationError::Connection {
            message: err.to_string(),
        }
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.len())
}

/// Apply every pending migration against `database_url`.
///
/// Returns the number of migrations applied.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_blocking(&url))
        .await
        .map_err(|err| MigrationError::Apply {
            message: format!("migration task aborted: {err}"),
        })??;
    info!(applied, "database migrations complete");
    Ok(applied)
}
