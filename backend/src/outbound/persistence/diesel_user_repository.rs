//! PostgreSQL-backed `UserRepository`.
//!
//! The profile write is a single `UPDATE ... RETURNING`; columns outside the
//! merge set are omitted from the changeset and keep their stored values.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, ProfileChanges, User, UserId};

use super::diesel_basic_error_mapping::{DieselFailure, classify_diesel_error, map_basic_pool_error};
use super::models::{ProfileChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository on top of `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error, email: Option<&str>) -> UserPersistenceError {
    match classify_diesel_error(error) {
        DieselFailure::Connection(message) => UserPersistenceError::connection(message),
        DieselFailure::UniqueViolation(_) => match email {
            Some(email) => UserPersistenceError::email_conflict(email),
            None => UserPersistenceError::query("unique constraint violated"),
        },
        DieselFailure::Query(message) => UserPersistenceError::query(message),
    }
}

fn row_to_user(row: UserRow) -> User {
    User::from_stored(UserId::from_uuid(row.id), row.name, row.email, row.picture)
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        Ok(users::table
            .find(id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?
            .map(row_to_user))
    }

    async fn is_email_taken(
        &self,
        email: &EmailAddress,
        excluding: &UserId,
    ) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            users::table
                .filter(users::email.eq(email.as_ref()))
                .filter(users::id.ne(excluding.as_uuid())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, None))
    }

    async fn apply_profile_changes(
        &self,
        id: &UserId,
        changes: &ProfileChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let email = changes.email().map(AsRef::as_ref);
        let changeset = ProfileChangeset {
            name: changes.name().as_ref(),
            email,
            picture: changes.picture().map(AsRef::as_ref),
            updated_at: Utc::now(),
        };
        Ok(diesel::update(users::table.find(id.as_uuid()))
            .set(&changeset)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, email))?
            .map(row_to_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    struct UniqueInfo;

    impl DatabaseErrorInformation for UniqueInfo {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"users_email_key\""
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("users")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            Some("users_email_key")
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation() -> DieselError {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, Box::new(UniqueInfo))
    }

    #[rstest]
    fn unique_violation_on_email_write_is_conflict() {
        let err = map_diesel_error(unique_violation(), Some("taken@example.com"));
        assert_eq!(err, UserPersistenceError::email_conflict("taken@example.com"));
    }

    #[rstest]
    fn unique_violation_without_email_is_query_error() {
        let err = map_diesel_error(unique_violation(), None);
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }

    #[rstest]
    fn rows_outside_current_rules_still_decode() {
        let row = UserRow {
            id: uuid::Uuid::nil(),
            name: "Ops".into(),
            email: Some("ops@localhost".into()),
            picture: Some("/uploads/ops.png".into()),
        };

        let user = row_to_user(row);

        assert_eq!(user.id(), &UserId::from_uuid(uuid::Uuid::nil()));
        assert_eq!(user.email().map(AsRef::as_ref), Some("ops@localhost"));
        assert_eq!(user.picture().map(AsRef::as_ref), Some("/uploads/ops.png"));
    }
}
