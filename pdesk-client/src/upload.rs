//! Recording upload client
//!
//! Uploads are a two-step handshake: ask the backend for a presigned
//! target, then `PUT` the raw file body straight to that URL. The
//! second request goes outside the API base URL and carries no auth
//! header.

use std::path::Path;
use std::sync::Arc;

use pdesk_common::api::types::{UploadRequest, UploadTicket};

use crate::{Backend, ClientError};

/// Client for `/audio/upload/`
pub struct UploadClient {
    backend: Arc<Backend>,
}

impl UploadClient {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    /// Ask for a presigned upload target
    pub async fn request_upload(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<String, ClientError> {
        let ticket: UploadTicket = self
            .backend
            .execute(
                self.backend.post("/audio/upload/").json(&UploadRequest {
                    filename: filename.to_string(),
                    content_type: content_type.to_string(),
                }),
                "upload ticket",
            )
            .await?;
        Ok(ticket.upload_url)
    }

    /// `PUT` the raw file body to a presigned target
    pub async fn put_file(
        &self,
        upload_url: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .backend
            .http()
            .put(upload_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Upload PUT failed");
                ClientError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Upload target rejected the file");
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail: String::new(),
            });
        }

        Ok(())
    }

    /// Upload a recording file from disk; returns the file name the
    /// backend will know it by
    pub async fn upload_file(&self, path: &Path) -> Result<String, ClientError> {
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ClientError::Invalid(format!("unusable file name: {}", path.display())))?
            .to_string();
        let content_type = content_type_for(&filename);

        let body = tokio::fs::read(path).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Could not read upload file");
            ClientError::Invalid(format!("cannot read {}: {e}", path.display()))
        })?;

        let upload_url = self.request_upload(&filename, content_type).await?;
        self.put_file(&upload_url, body, content_type).await?;

        Ok(filename)
    }
}

/// MIME type by recording file extension
fn content_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "m4a" => "audio/m4a",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_known_extensions() {
        assert_eq!(content_type_for("상담녹음.m4a"), "audio/m4a");
        assert_eq!(content_type_for("call.MP3"), "audio/mpeg");
        assert_eq!(content_type_for("take.wav"), "audio/wav");
    }

    #[test]
    fn test_content_type_unknown_extension_falls_back() {
        assert_eq!(content_type_for("notes.txt"), "application/octet-stream");
        assert_eq!(content_type_for("noextension"), "application/octet-stream");
    }
}
