//! Driven port for user persistence.
use async_trait::async_trait;

use crate::domain::{EmailAddress, ProfileChanges, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The store's unique email constraint rejected a write.
        EmailConflict { email: String } => "email already in use: {email}",
    }
}

/// Access to stored user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Whether any user other than `excluding` already owns `email`.
    async fn is_email_taken(
        &self,
        email: &EmailAddress,
        excluding: &UserId,
    ) -> Result<bool, UserPersistenceError>;

    /// Apply a merge set to one user in a single write.
    ///
    /// Returns the merged record, or `None` when no user has this id. Fields
    /// absent from `changes` keep their stored values.
    async fn apply_profile_changes(
        &self,
        id: &UserId,
        changes: &ProfileChanges,
    ) -> Result<Option<User>, UserPersistenceError>;
}
