//! `PictureStore` writing into a capability-scoped upload directory.
//!
//! All file access goes through a `cap_std::fs::Dir` opened once at startup,
//! so stored names can never escape the upload directory. Writes run on the
//! blocking pool.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{PictureStore, PictureStoreError};
use crate::domain::{PictureUpload, StoredPicture};

/// Picture store rooted at the configured upload directory.
#[derive(Clone)]
pub struct CapStdPictureStore {
    dir: Arc<Dir>,
    root: PathBuf,
}

impl CapStdPictureStore {
    /// Open `root`, creating it first when missing.
    ///
    /// # Errors
    ///
    /// Returns the I/O error when the directory cannot be created or opened.
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = root.as_ref();
        Dir::create_ambient_dir_all(root, ambient_authority())?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        Ok(Self {
            dir: Arc::new(dir),
            root: root.to_path_buf(),
        })
    }

    /// Directory the store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn task_failed(err: tokio::task::JoinError) -> String {
    format!("blocking task failed: {err}")
}

#[async_trait]
impl PictureStore for CapStdPictureStore {
    async fn save(&self, upload: &PictureUpload) -> Result<StoredPicture, PictureStoreError> {
        let file_name = format!("{}.{}", Uuid::new_v4(), upload.content_type().extension());
        let dir = Arc::clone(&self.dir);
        let bytes = upload.bytes().to_vec();
        let name = file_name.clone();
        tokio::task::spawn_blocking(move || dir.write(&name, bytes))
            .await
            .map_err(|err| PictureStoreError::write(task_failed(err)))?
            .map_err(|err| PictureStoreError::write(err.to_string()))?;
        debug!(file = %file_name, "stored picture upload");
        Ok(StoredPicture::new(file_name))
    }

    async fn discard(&self, stored: &StoredPicture) -> Result<(), PictureStoreError> {
        let dir = Arc::clone(&self.dir);
        let name = stored.file_name().to_owned();
        let outcome = tokio::task::spawn_blocking(move || dir.remove_file(&name))
            .await
            .map_err(|err| PictureStoreError::remove(task_failed(err)))?;
        match outcome {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PictureStoreError::remove(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PictureContentType;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn saves_under_generated_name_and_discards() {
        let temp = tempfile::tempdir().expect("tempdir");
        let store = CapStdPictureStore::open(temp.path().join("uploads")).expect("open store");
        let upload = PictureUpload::new(PictureContentType::Jpeg, vec![0xFF, 0xD8, 0xFF]);

        let stored = store.save(&upload).await.expect("save");

        assert!(stored.file_name().ends_with(".jpg"));
        let written = store.dir.read(stored.file_name()).expect("read back");
        assert_eq!(written, vec![0xFF, 0xD8, 0xFF]);

        store.discard(&stored).await.expect("discard");
        assert!(!store.dir.exists(stored.file_name()));
        store.discard(&stored).await.expect("missing file is fine");
    }
}
