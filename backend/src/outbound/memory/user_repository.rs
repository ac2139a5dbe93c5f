//! In-memory `UserRepository`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, ProfileChanges, User, UserId};

/// User store backed by a locked map.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

fn poisoned() -> UserPersistenceError {
    UserPersistenceError::connection("in-memory user store lock poisoned")
}

impl InMemoryUserRepository {
    /// Seed the store with `users`.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::{User, UserId};
    /// use travel_backend::outbound::memory::InMemoryUserRepository;
    ///
    /// let ada = User::try_from_parts(UserId::random(), "Ada", None, None).expect("user");
    /// let repo = InMemoryUserRepository::with_users([ada.clone()]);
    /// assert_eq!(repo.get(ada.id()), Some(ada));
    /// ```
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (*user.id(), user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }

    /// Snapshot of one stored user.
    pub fn get(&self, id: &UserId) -> Option<User> {
        self.users.read().ok()?.get(id).cloned()
    }

    /// Insert or replace a user.
    pub fn insert(&self, user: User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        users.insert(*user.id(), user);
        Ok(())
    }
}

fn email_owned_by_other(
    users: &HashMap<UserId, User>,
    email: &EmailAddress,
    excluding: &UserId,
) -> bool {
    users
        .values()
        .any(|user| user.id() != excluding && user.email() == Some(email))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(id).cloned())
    }

    async fn is_email_taken(
        &self,
        email: &EmailAddress,
        excluding: &UserId,
    ) -> Result<bool, UserPersistenceError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(email_owned_by_other(&users, email, excluding))
    }

    async fn apply_profile_changes(
        &self,
        id: &UserId,
        changes: &ProfileChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        if let Some(email) = changes.email()
            && email_owned_by_other(&users, email, id)
        {
            return Err(UserPersistenceError::email_conflict(email.as_ref()));
        }
        let Some(stored) = users.get_mut(id) else {
            return Ok(None);
        };
        *stored = changes.apply_to(stored);
        Ok(Some(stored.clone()))
    }
}
