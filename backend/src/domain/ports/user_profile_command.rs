//! Driving port for profile updates.
//!
//! Inbound adapters hand a [`ProfileUpdateRequest`] to this port and receive
//! the merged user or a domain [`Error`] ready for transport mapping.

use async_trait::async_trait;

use crate::domain::{Error, ProfileUpdateRequest, User};

/// Use-case port for updating a user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileCommand: Send + Sync {
    /// Validate and apply a profile update.
    ///
    /// # Errors
    ///
    /// - `invalid_request` when the name is missing or a field is malformed.
    /// - `conflict` when another user owns the submitted email.
    /// - `not_found` when no user has the requested id.
    /// - `internal_error` when the store or picture storage fails.
    async fn update_profile(&self, request: ProfileUpdateRequest) -> Result<User, Error>;
}
