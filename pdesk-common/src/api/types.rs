//! Shared API request/response types
//!
//! Wire shapes of the back-office REST interface consumed by
//! pdesk-client. Record bodies stay dynamic (`serde_json::Value`)
//! because they pass through the flatten/unflatten layer, which
//! preserves fields outside the known schema; the envelopes around them
//! are fixed and typed here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ========================================
// List Envelopes
// ========================================

/// Paged listing response for `GET /properties/` and `GET /calls/`
///
/// Records arrive in the backend's nested shape; the client flattens
/// them before handing them on.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListResponse {
    /// One page of records, nested shape
    #[serde(default)]
    pub results: Vec<Value>,
    /// Total records matching the query across all pages
    #[serde(rename = "totalCount", default)]
    pub total_count: i64,
}

// ========================================
// Audio / Upload Types
// ========================================

/// Response of `GET /audio/stream/{file_name}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StreamUrlResponse {
    /// Short-lived playback URL
    pub url: String,
}

/// Request body of `POST /audio/upload/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadRequest {
    /// Original file name of the recording
    pub filename: String,
    /// MIME type of the recording (e.g. `audio/m4a`)
    pub content_type: String,
}

/// Response of `POST /audio/upload/`: where to `PUT` the raw file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadTicket {
    /// Presigned URL accepting a direct `PUT` of the file body
    pub upload_url: String,
}

// ========================================
// Auth Types
// ========================================

/// Credentials for `POST /auth/token` (form-encoded)
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token issued on successful login
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Token scheme, always `bearer`
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Request body of `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ========================================
// Error Body
// ========================================

/// Error payload shapes the backend returns on failure
///
/// Parsed loosely: whichever of `detail` / `message` is present feeds
/// the log line; the operator-facing text comes from the client's own
/// error mapping, not from this body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best-effort human-readable detail for logging
    pub fn detail_text(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match &self.detail {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_deserializes() {
        let page: ListResponse = serde_json::from_value(json!({
            "results": [{"property_id": "p-1", "property_info": {}}],
            "totalCount": 37
        }))
        .expect("valid list payload");

        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_count, 37);
    }

    #[test]
    fn test_list_response_defaults_when_empty() {
        let page: ListResponse = serde_json::from_value(json!({})).expect("empty payload");
        assert!(page.results.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_token_response_defaults_bearer() {
        let token: TokenResponse =
            serde_json::from_value(json!({"access_token": "abc"})).expect("token payload");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_error_body_detail_shapes() {
        let body: ErrorBody =
            serde_json::from_value(json!({"detail": "Incorrect username or password"}))
                .expect("string detail");
        assert_eq!(body.detail_text(), "Incorrect username or password");

        let body: ErrorBody =
            serde_json::from_value(json!({"detail": [{"loc": ["body"], "msg": "invalid"}]}))
                .expect("structured detail");
        assert!(body.detail_text().contains("invalid"));

        let body: ErrorBody = serde_json::from_value(json!({})).expect("empty body");
        assert_eq!(body.detail_text(), "");
    }
}
