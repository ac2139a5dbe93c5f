//! Profile update inputs and the merge set applied to a stored user.
//!
//! A submission arrives with loosely typed optional strings plus an optional
//! uploaded picture. [`ProfileChanges::from_submission`] turns it into the
//! merge set: the required name, and the email and picture only when they
//! were supplied. Fields left out of the merge set keep their stored values.

use std::fmt;

use serde_json::json;

use super::{EmailAddress, Error, PictureRef, User, UserId, UserName, UserValidationError};

/// Public path prefix under which stored picture files are served.
pub const UPLOADS_PATH_PREFIX: &str = "/uploads";

/// Image formats accepted for profile picture uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureContentType {
    /// `image/png`
    Png,
    /// `image/jpeg`
    Jpeg,
    /// `image/gif`
    Gif,
    /// `image/webp`
    Webp,
}

impl PictureContentType {
    /// Resolve a MIME essence such as `image/png`. Parameters are ignored.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::PictureContentType;
    ///
    /// assert_eq!(
    ///     PictureContentType::from_mime("image/jpeg"),
    ///     Some(PictureContentType::Jpeg)
    /// );
    /// assert_eq!(PictureContentType::from_mime("text/plain"), None);
    /// ```
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/gif" => Some(Self::Gif),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// File extension used for stored files of this type.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

impl fmt::Display for PictureContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mime = match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        };
        f.write_str(mime)
    }
}

/// Picture file received with a profile update, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureUpload {
    content_type: PictureContentType,
    bytes: Vec<u8>,
}

impl PictureUpload {
    /// Wrap uploaded bytes of a known image type.
    pub fn new(content_type: PictureContentType, bytes: Vec<u8>) -> Self {
        Self {
            content_type,
            bytes,
        }
    }

    /// Image format of the upload.
    pub fn content_type(&self) -> PictureContentType {
        self.content_type
    }

    /// Raw file contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A picture file written by a picture store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPicture {
    file_name: String,
}

impl StoredPicture {
    /// Record the name under which the store saved the file.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// File name inside the upload directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Public path of the file: the fixed upload prefix plus the file name.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::StoredPicture;
    ///
    /// let stored = StoredPicture::new("a1b2.png");
    /// assert_eq!(stored.public_path(), "/uploads/a1b2.png");
    /// ```
    pub fn public_path(&self) -> String {
        format!("{UPLOADS_PATH_PREFIX}/{}", self.file_name)
    }

    /// Picture reference stored on the user record.
    pub fn picture_ref(&self) -> Result<PictureRef, UserValidationError> {
        PictureRef::new(self.public_path())
    }
}

/// Profile update request as received by the driving port.
///
/// Optional strings follow the submission verbatim; blank strings count as
/// absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdateRequest {
    /// User whose profile is updated.
    pub user_id: UserId,
    /// Required display name.
    pub name: Option<String>,
    /// Optional new email address.
    pub email: Option<String>,
    /// Optional picture URL, used when no file is uploaded.
    pub picture: Option<String>,
    /// Optional uploaded picture file; wins over `picture`.
    pub upload: Option<PictureUpload>,
}

impl ProfileUpdateRequest {
    /// Start a request for `user_id` with every field absent.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            name: None,
            email: None,
            picture: None,
            upload: None,
        }
    }
}

/// Reasons a profile submission is rejected before touching the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    /// No usable name was supplied.
    #[error("Name is required")]
    MissingName,
    /// The name was supplied but is invalid.
    #[error("{0}")]
    Name(UserValidationError),
    /// The email was supplied but is invalid.
    #[error("{0}")]
    Email(UserValidationError),
    /// The picture URL was supplied but is invalid.
    #[error("{0}")]
    Picture(UserValidationError),
}

impl ProfileValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::MissingName | Self::Name(_) => "name",
            Self::Email(_) => "email",
            Self::Picture(_) => "picture",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_field",
            Self::Name(_) | Self::Email(_) | Self::Picture(_) => "invalid_field",
        }
    }
}

impl From<ProfileValidationError> for Error {
    fn from(value: ProfileValidationError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "field": value.field(),
            "code": value.code(),
        }))
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// Merge set for one profile update.
///
/// `name` is always written; `email` and `picture` only when `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    name: UserName,
    email: Option<EmailAddress>,
    picture: Option<PictureRef>,
}

impl ProfileChanges {
    /// Build a merge set from validated parts.
    pub fn new(name: UserName, email: Option<EmailAddress>, picture: Option<PictureRef>) -> Self {
        Self {
            name,
            email,
            picture,
        }
    }

    /// Validate the text fields of a submission.
    ///
    /// The picture URL is validated only when `has_upload` is false, because
    /// an uploaded file always replaces it.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::{ProfileChanges, ProfileValidationError};
    ///
    /// let changes = ProfileChanges::from_submission(
    ///     Some("Alex".into()),
    ///     Some("alex@example.com".into()),
    ///     None,
    ///     false,
    /// )
    /// .expect("valid submission");
    /// assert_eq!(changes.name().as_ref(), "Alex");
    /// assert!(changes.picture().is_none());
    ///
    /// let missing = ProfileChanges::from_submission(Some("  ".into()), None, None, false);
    /// assert_eq!(missing, Err(ProfileValidationError::MissingName));
    /// ```
    pub fn from_submission(
        name: Option<String>,
        email: Option<String>,
        picture: Option<String>,
        has_upload: bool,
    ) -> Result<Self, ProfileValidationError> {
        let name = present(name).ok_or(ProfileValidationError::MissingName)?;
        let name = UserName::new(name).map_err(ProfileValidationError::Name)?;
        let email = present(email)
            .map(EmailAddress::new)
            .transpose()
            .map_err(ProfileValidationError::Email)?;
        let picture = if has_upload {
            None
        } else {
            present(picture)
                .map(PictureRef::new)
                .transpose()
                .map_err(ProfileValidationError::Picture)?
        };
        Ok(Self::new(name, email, picture))
    }

    /// Replace the picture in the merge set.
    pub fn with_picture(mut self, picture: PictureRef) -> Self {
        self.picture = Some(picture);
        self
    }

    /// Name to write.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email to write, if any.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Picture to write, if any.
    pub fn picture(&self) -> Option<&PictureRef> {
        self.picture.as_ref()
    }

    /// Merge onto `user`, leaving fields outside the merge set untouched.
    pub fn apply_to(&self, user: &User) -> User {
        let mut merged = user.clone();
        merged.set_name(self.name.clone());
        if let Some(email) = &self.email {
            merged.set_email(email.clone());
        }
        if let Some(picture) = &self.picture {
            merged.set_picture(picture.clone());
        }
        merged
    }
}
