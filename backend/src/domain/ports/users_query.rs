//! Driving port for reading a single user.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Use-case port for loading a user record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return the user or a `not_found` error.
    async fn fetch_user(&self, id: &UserId) -> Result<User, Error>;
}
