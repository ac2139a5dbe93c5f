//! Profile update and user read services.
//!
//! [`ProfileService`] implements the [`UserProfileCommand`] and [`UsersQuery`]
//! driving ports on top of a [`UserRepository`] and a [`PictureStore`].
//!
//! Update order: validate the submission, check email uniqueness, store the
//! uploaded picture, then apply the merge set in one write. Nothing is written
//! when validation or the uniqueness check fails. A rejected request whose
//! target user does not exist is answered with `not_found` instead.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{
    PictureStore, PictureStoreError, UserPersistenceError, UserProfileCommand, UserRepository,
    UsersQuery,
};
use crate::domain::{
    Error, ProfileChanges, ProfileUpdateRequest, StoredPicture, User, UserId,
};

/// Client message for a missing user.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
/// Client message for an email owned by another user.
pub const EMAIL_IN_USE_MESSAGE: &str = "Email already in use";

/// Service implementing the profile driving ports.
#[derive(Clone)]
pub struct ProfileService<R, P> {
    users: Arc<R>,
    pictures: Arc<P>,
}

impl<R, P> ProfileService<R, P> {
    /// Create a service over the given user store and picture store.
    pub fn new(users: Arc<R>, pictures: Arc<P>) -> Self {
        Self { users, pictures }
    }
}

fn email_conflict() -> Error {
    Error::conflict(EMAIL_IN_USE_MESSAGE).with_details(json!({
        "field": "email",
        "code": "email_taken",
    }))
}

fn user_not_found() -> Error {
    Error::not_found(USER_NOT_FOUND_MESSAGE)
}

fn map_user_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::EmailConflict { .. } => email_conflict(),
        other => Error::internal("user store failure").with_cause(other.to_string()),
    }
}

fn map_picture_error(err: PictureStoreError) -> Error {
    Error::internal("picture storage failure").with_cause(err.to_string())
}

impl<R, P> ProfileService<R, P>
where
    R: UserRepository,
    P: PictureStore,
{
    /// Replace a pre-write rejection with `not_found` when the user is absent.
    async fn reject(&self, user_id: &UserId, rejection: Error) -> Error {
        match self.users.find_by_id(user_id).await {
            Ok(Some(_)) => rejection,
            Ok(None) => user_not_found(),
            Err(err) => {
                error!(user_id = %user_id, error = %err, "user lookup failed");
                map_user_error(err)
            }
        }
    }

    async fn discard_picture(&self, stored: &StoredPicture) {
        if let Err(err) = self.pictures.discard(stored).await {
            warn!(file = stored.file_name(), error = %err, "failed to discard stored picture");
        }
    }

    async fn store_picture(
        &self,
        request: &ProfileUpdateRequest,
        changes: ProfileChanges,
    ) -> Result<(ProfileChanges, Option<StoredPicture>), Error> {
        let Some(upload) = &request.upload else {
            return Ok((changes, None));
        };
        let stored = self.pictures.save(upload).await.map_err(|err| {
            error!(user_id = %request.user_id, error = %err, "picture upload failed");
            map_picture_error(err)
        })?;
        match stored.picture_ref() {
            Ok(picture) => Ok((changes.with_picture(picture), Some(stored))),
            Err(err) => {
                self.discard_picture(&stored).await;
                Err(Error::internal("picture storage failure").with_cause(err.to_string()))
            }
        }
    }
}

#[async_trait]
impl<R, P> UserProfileCommand for ProfileService<R, P>
where
    R: UserRepository,
    P: PictureStore,
{
    async fn update_profile(&self, request: ProfileUpdateRequest) -> Result<User, Error> {
        let user_id = request.user_id;
        let changes = match ProfileChanges::from_submission(
            request.name.clone(),
            request.email.clone(),
            request.picture.clone(),
            request.upload.is_some(),
        ) {
            Ok(changes) => changes,
            Err(err) => return Err(self.reject(&user_id, err.into()).await),
        };

        if let Some(email) = changes.email() {
            let taken = self
                .users
                .is_email_taken(email, &user_id)
                .await
                .map_err(|err| {
                    error!(user_id = %user_id, error = %err, "email uniqueness check failed");
                    map_user_error(err)
                })?;
            if taken {
                return Err(self.reject(&user_id, email_conflict()).await);
            }
        }

        let (changes, stored) = self.store_picture(&request, changes).await?;

        let outcome = self.users.apply_profile_changes(&user_id, &changes).await;
        let result = match outcome {
            Ok(Some(user)) => {
                info!(user_id = %user_id, "profile updated");
                return Ok(user);
            }
            Ok(None) => user_not_found(),
            Err(err) => {
                error!(user_id = %user_id, error = %err, "profile write failed");
                map_user_error(err)
            }
        };
        if let Some(stored) = &stored {
            self.discard_picture(stored).await;
        }
        Err(result)
    }
}

#[async_trait]
impl<R, P> UsersQuery for ProfileService<R, P>
where
    R: UserRepository,
    P: PictureStore,
{
    async fn fetch_user(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|err| {
                error!(user_id = %id, error = %err, "user lookup failed");
                map_user_error(err)
            })?
            .ok_or_else(user_not_found)
    }
}

#[cfg(test)]
#[path = "profile_service_tests.rs"]
mod tests;
