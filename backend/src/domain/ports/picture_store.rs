//! Driven port for storing uploaded profile pictures.
//!
//! Adapters persist the bytes under a fresh file name and report it back;
//! the public `/uploads/<file name>` reference is derived by the domain.
use async_trait::async_trait;

use crate::domain::{PictureUpload, StoredPicture};

use super::define_port_error;

define_port_error! {
    /// Errors raised by picture store adapters.
    pub enum PictureStoreError {
        /// Writing the file failed.
        Write { message: String } => "picture write failed: {message}",
        /// Removing a stored file failed.
        Remove { message: String } => "picture removal failed: {message}",
    }
}

/// Storage for uploaded picture files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PictureStore: Send + Sync {
    /// Persist `upload` and return where it was stored.
    async fn save(&self, upload: &PictureUpload) -> Result<StoredPicture, PictureStoreError>;

    /// Remove a previously stored file. Removing a missing file succeeds.
    async fn discard(&self, stored: &StoredPicture) -> Result<(), PictureStoreError>;
}
