//! User data model.
//!
//! Users are created by registration, which lives outside this service; here
//! they are read and mutated through profile updates only. Each field is a
//! validated newtype so a [`User`] value can never hold a blank name or a
//! malformed email.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of characters in a user name.
pub const USER_NAME_MAX: usize = 100;
/// Maximum number of characters in an email address.
pub const EMAIL_MAX: usize = 254;
/// Maximum number of characters in a picture reference.
pub const PICTURE_REF_MAX: usize = 2048;

/// Validation errors returned by the user field constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier is empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier is not a UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The name is empty once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// The name exceeds [`USER_NAME_MAX`].
    #[error("name must be at most {max} characters")]
    NameTooLong {
        /// Allowed maximum.
        max: usize,
    },
    /// The email is empty once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// The email does not look like `local@domain.tld`.
    #[error("email must be a valid address")]
    InvalidEmail,
    /// The email exceeds [`EMAIL_MAX`].
    #[error("email must be at most {max} characters")]
    EmailTooLong {
        /// Allowed maximum.
        max: usize,
    },
    /// The picture reference is empty once trimmed.
    #[error("picture must not be empty")]
    EmptyPicture,
    /// The picture reference exceeds [`PICTURE_REF_MAX`].
    #[error("picture must be at most {max} characters")]
    PictureTooLong {
        /// Allowed maximum.
        max: usize,
    },
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from its string form.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new("u1").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap a UUID read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! string_newtype_conversions {
    ($name:ident) => {
        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = UserValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

/// Human readable user name. Required on every profile update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`]. Surrounding whitespace is
    /// trimmed.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if trimmed.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

string_newtype_conversions!(UserName);

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only; deliverability is not our concern.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address. Unique across users.
///
/// Stored as submitted apart from trimming; uniqueness is an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("alex@example.com").is_ok());
    /// assert!(EmailAddress::new("alex at example").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if trimmed.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(trimmed) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

string_newtype_conversions!(EmailAddress);

/// Profile picture reference: an upload path or an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PictureRef(String);

impl PictureRef {
    /// Validate and construct a [`PictureRef`]. The value is kept verbatim.
    pub fn new(reference: impl Into<String>) -> Result<Self, UserValidationError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(UserValidationError::EmptyPicture);
        }
        if reference.chars().count() > PICTURE_REF_MAX {
            return Err(UserValidationError::PictureTooLong {
                max: PICTURE_REF_MAX,
            });
        }
        Ok(Self(reference))
    }
}

string_newtype_conversions!(PictureRef);

/// Application user.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `email`, when present, is unique among all users (enforced by the
///   profile service and the store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: UserName,
    email: Option<EmailAddress>,
    picture: Option<PictureRef>,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(
        id: UserId,
        name: UserName,
        email: Option<EmailAddress>,
        picture: Option<PictureRef>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            picture,
        }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_parts(
        id: UserId,
        name: impl Into<String>,
        email: Option<String>,
        picture: Option<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            id,
            UserName::new(name)?,
            email.map(EmailAddress::new).transpose()?,
            picture.map(PictureRef::new).transpose()?,
        ))
    }

    /// Wrap values read back from storage without re-checking their shape.
    /// Stored rows are trusted as written, including ones older than the
    /// current validation rules.
    pub(crate) fn from_stored(
        id: UserId,
        name: String,
        email: Option<String>,
        picture: Option<String>,
    ) -> Self {
        Self::new(
            id,
            UserName(name),
            email.map(EmailAddress),
            picture.map(PictureRef),
        )
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email address, if one has been set.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Picture reference, if one has been set.
    pub fn picture(&self) -> Option<&PictureRef> {
        self.picture.as_ref()
    }

    pub(crate) fn set_name(&mut self, name: UserName) {
        self.name = name;
    }

    pub(crate) fn set_email(&mut self, email: EmailAddress) {
        self.email = Some(email);
    }

    pub(crate) fn set_picture(&mut self, picture: PictureRef) {
        self.picture = Some(picture);
    }
}

#[cfg(test)]
mod tests;
