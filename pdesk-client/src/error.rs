//! Client error normalization
//!
//! Everything a request can fail with collapses into [`ClientError`].
//! The operator sees only [`ClientError::user_message`]; the underlying
//! cause is logged at the point of failure.

use thiserror::Error;

/// API client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection-level failure (DNS, refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request requires a signed-in session
    #[error("Not authenticated")]
    Auth,

    /// Request could not be built from the given input
    #[error("Invalid request: {0}")]
    Invalid(String),
}

impl ClientError {
    /// Operator-facing message, in the console's display language.
    ///
    /// Deliberately generic: backend details never leak to the screen,
    /// they only go to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::Network(_) => "서버에 연결할 수 없습니다.",
            ClientError::Api { .. } => "요청을 처리하지 못했습니다.",
            ClientError::Parse(_) => "데이터를 불러오는데 실패했습니다.",
            ClientError::Auth => "로그인이 필요합니다.",
            ClientError::Invalid(_) => "요청이 올바르지 않습니다.",
        }
    }
}
