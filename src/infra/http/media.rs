use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::media::{MediaFile, UploadProgress, UploadedMedia};
use crate::infra::http::read_json;
use crate::usecase::ports::gateway::GatewayError;
use crate::usecase::ports::media::{MediaUploader, UploadError};

/// Multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "video";

#[cfg(not(target_arch = "wasm32"))]
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "fileUrl", default)]
    file_url: Option<String>,
}

/// Posts media as `multipart/form-data` to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpMediaUploader {
    client: reqwest::Client,
    upload_url: String,
}

impl HttpMediaUploader {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: upload_url.into(),
        }
    }

    /// Streams the file in fixed-size chunks and reports each chunk as it
    /// is pulled into the request body.
    #[cfg(not(target_arch = "wasm32"))]
    async fn send(
        &self,
        file: MediaFile,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<reqwest::Response, reqwest::Error> {
        use bytes::Bytes;
        use futures::channel::mpsc;
        use futures::future::{self, Either};
        use futures_util::StreamExt;

        let total = file.size();
        let (sent_tx, mut sent_rx) = mpsc::unbounded::<u64>();
        let chunks: Vec<Bytes> = file
            .bytes
            .chunks(UPLOAD_CHUNK_SIZE)
            .map(Bytes::copy_from_slice)
            .collect();
        let body = futures_util::stream::iter(chunks).map(move |chunk| {
            let _ = sent_tx.unbounded_send(chunk.len() as u64);
            Ok::<Bytes, std::io::Error>(chunk)
        });
        let part = Part::stream_with_length(reqwest::Body::wrap_stream(body), total)
            .file_name(file.name);
        let form = Form::new().part(UPLOAD_FIELD, part);

        let request = self.client.post(&self.upload_url).multipart(form).send();
        let report = async {
            let mut sent = 0_u64;
            while let Some(len) = sent_rx.next().await {
                sent += len;
                on_progress(UploadProgress::from_bytes(sent, total));
            }
        };

        match future::select(Box::pin(request), Box::pin(report)).await {
            Either::Left((response, _)) => response,
            Either::Right(((), request)) => request.await,
        }
    }

    /// Browsers do not expose request body progress through fetch.
    #[cfg(target_arch = "wasm32")]
    async fn send(
        &self,
        file: MediaFile,
        _on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<reqwest::Response, reqwest::Error> {
        let part = Part::bytes(file.bytes).file_name(file.name);
        let form = Form::new().part(UPLOAD_FIELD, part);
        self.client.post(&self.upload_url).multipart(form).send().await
    }
}

#[async_trait(?Send)]
impl MediaUploader for HttpMediaUploader {
    async fn upload(
        &self,
        file: MediaFile,
        on_progress: &mut dyn FnMut(UploadProgress),
    ) -> Result<UploadedMedia, UploadError> {
        let url = self.upload_url.clone();
        debug!(%url, file = %file.name, "POST multipart");
        let response = self
            .send(file, on_progress)
            .await
            .map_err(|err| UploadError::Transport {
                url: url.clone(),
                message: err.to_string(),
            })?;
        let body: UploadResponse = read_json(&url, response).await.map_err(upload_error)?;
        media_from_response(&url, body)
    }
}

fn media_from_response(url: &str, body: UploadResponse) -> Result<UploadedMedia, UploadError> {
    match body.file_url {
        Some(file_url) if !file_url.trim().is_empty() => Ok(UploadedMedia { file_url }),
        _ => Err(UploadError::MissingMediaUrl {
            url: url.to_string(),
        }),
    }
}

fn upload_error(err: GatewayError) -> UploadError {
    match err {
        GatewayError::Transport { url, message } => UploadError::Transport { url, message },
        GatewayError::Status { url, status } => UploadError::Status { url, status },
        GatewayError::Decode { url, message } => UploadError::Decode { url, message },
    }
}
