//! In-memory `PictureStore`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{PictureStore, PictureStoreError};
use crate::domain::{PictureUpload, StoredPicture};

/// Picture store keeping uploads in a map keyed by file name.
#[derive(Debug, Default)]
pub struct InMemoryPictureStore {
    files: RwLock<HashMap<String, PictureUpload>>,
}

impl InMemoryPictureStore {
    /// Names of the files currently stored.
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .read()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PictureStore for InMemoryPictureStore {
    async fn save(&self, upload: &PictureUpload) -> Result<StoredPicture, PictureStoreError> {
        let file_name = format!("{}.{}", Uuid::new_v4(), upload.content_type().extension());
        let mut files = self
            .files
            .write()
            .map_err(|_| PictureStoreError::write("in-memory picture store lock poisoned"))?;
        files.insert(file_name.clone(), upload.clone());
        Ok(StoredPicture::new(file_name))
    }

    async fn discard(&self, stored: &StoredPicture) -> Result<(), PictureStoreError> {
        let mut files = self
            .files
            .write()
            .map_err(|_| PictureStoreError::remove("in-memory picture store lock poisoned"))?;
        files.remove(stored.file_name());
        Ok(())
    }
}
