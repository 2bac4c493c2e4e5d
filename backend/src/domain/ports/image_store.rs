//! Port abstraction for uploaded image storage.
use async_trait::async_trait;

use crate::domain::ImageFormat;

use super::define_port_error;

define_port_error! {
    /// Failures raised by image storage adapters.
    pub enum ImageStoreError {
        /// Reading or writing the backing store failed.
        Io { message: String } => "image store I/O failed: {message}",
    }
}

/// Stored image bytes with their format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `bytes` under a freshly generated name and return that name.
    async fn save(&self, format: ImageFormat, bytes: Vec<u8>) -> Result<String, ImageStoreError>;

    /// Load a stored image; `None` when the name is unknown or not a valid
    /// stored image name.
    async fn load(&self, name: &str) -> Result<Option<StoredImage>, ImageStoreError>;
}
