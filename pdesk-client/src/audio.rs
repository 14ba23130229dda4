//! Call-audio resource client

use std::sync::Arc;

use pdesk_common::api::types::StreamUrlResponse;

use crate::{Backend, ClientError};

/// Client for `/audio/stream/`
pub struct AudioClient {
    backend: Arc<Backend>,
}

impl AudioClient {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    /// Short-lived playback URL for a recording
    pub async fn stream_url(&self, file_name: &str) -> Result<String, ClientError> {
        let response: StreamUrlResponse = self
            .backend
            .execute(
                self.backend.get(&format!("/audio/stream/{file_name}")),
                "audio stream url",
            )
            .await?;
        Ok(response.url)
    }
}
