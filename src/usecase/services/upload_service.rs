use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::media::{MediaFile, UploadProgress, UploadedMedia};
use crate::usecase::ports::media::{MediaUploader, UploadError};

pub struct UploadService {
    uploader: Arc<dyn MediaUploader>,
}

impl UploadService {
    pub fn new(uploader: Arc<dyn MediaUploader>) -> Self {
        Self { uploader }
    }

    pub async fn upload(
        &self,
        file: MediaFile,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<UploadedMedia, UploadError> {
        let name = file.name.clone();
        info!(file = %name, bytes = file.size(), "uploading media");
        on_progress(UploadProgress::default());

        match self.uploader.upload(file, on_progress).await {
            Ok(media) => {
                on_progress(UploadProgress::DONE);
                info!(file = %name, url = %media.file_url, "media uploaded");
                Ok(media)
            }
            Err(err) => {
                error!(file = %name, error = %err, "media upload failed");
                Err(err)
            }
        }
    }
}
