//! Filesystem image store confined to one upload directory.
//!
//! All access goes through a `cap_std::fs::Dir` handle, so stored names can
//! never reach outside the directory. Blocking I/O runs on Tokio's blocking
//! pool.

use std::io;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{ImageStore, ImageStoreError, StoredImage};
use crate::domain::{ImageFormat, stored_image_format};

/// Image store writing into a local directory.
#[derive(Clone)]
pub struct LocalImageStore {
    dir: Arc<Dir>,
}

impl LocalImageStore {
    /// Open `path`, creating it and any parents first.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or opened.
    pub fn open(path: &Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { dir: Arc::new(dir) })
    }
}

fn io_failure(action: &str, error: impl std::fmt::Display) -> ImageStoreError {
    ImageStoreError::io(format!("{action}: {error}"))
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, format: ImageFormat, bytes: Vec<u8>) -> Result<String, ImageStoreError> {
        let name = format!("{}.{}", Uuid::new_v4(), format.extension());
        let dir = Arc::clone(&self.dir);
        let file_name = name.clone();
        tokio::task::spawn_blocking(move || dir.write(&file_name, &bytes))
            .await
            .map_err(|error| io_failure("write task failed", error))?
            .map_err(|error| io_failure("write failed", error))?;
        debug!(file = %name, "stored uploaded image");
        Ok(name)
    }

    async fn load(&self, name: &str) -> Result<Option<StoredImage>, ImageStoreError> {
        let Some(format) = stored_image_format(name) else {
            return Ok(None);
        };
        let dir = Arc::clone(&self.dir);
        let file_name = name.to_owned();
        let read = tokio::task::spawn_blocking(move || dir.read(&file_name))
            .await
            .map_err(|error| io_failure("read task failed", error))?;
        match read {
            Ok(bytes) => Ok(Some(StoredImage { format, bytes })),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(io_failure("read failed", error)),
        }
    }
}
