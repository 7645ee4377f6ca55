use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::media::{MediaFile, UploadProgress, UploadedMedia};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("upload to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("upload endpoint {url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unreadable upload response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("upload response from {url} has no fileUrl")]
    MissingMediaUrl { url: String },
}

#[async_trait(?Send)]
pub trait MediaUploader {
    /// Sends `file` and reports progress while the body goes out.
    async fn upload(
        &self,
        file: MediaFile,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<UploadedMedia, UploadError>;
}
