//! # PDesk API Client
//!
//! Thin per-resource wrappers over the back-office REST API:
//! properties, recorded calls, call audio, uploads, and auth. The
//! wrappers apply the flat/nested record transforms at the boundary
//! (callers only ever see flat records) and normalize failures to
//! operator-facing messages, logging the original cause via `tracing`.
//!
//! Every call is an independent request/response; the only shared
//! mutable state is the session token cell. No retries, no
//! cancellation; a failed request surfaces its error exactly once.

pub mod audio;
pub mod auth;
pub mod call;
pub mod error;
pub mod property;
pub mod query;
pub mod token;
pub mod upload;

pub use audio::AudioClient;
pub use auth::AuthClient;
pub use call::CallClient;
pub use error::ClientError;
pub use property::PropertyClient;
pub use upload::UploadClient;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use pdesk_common::api::types::ErrorBody;
use serde::de::DeserializeOwned;
use serde_json::Value;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One page of flattened records plus the total match count
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Flat records for this page
    pub results: Vec<Value>,
    /// Total records matching the query across all pages
    pub total_count: i64,
}

/// Outcome of a guarded save
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Edited fields all matched the original; no request was issued
    NoChanges,
    /// The record was written; holds the backend's flattened response
    Saved(Value),
}

/// Shared connection to the back-office REST API
///
/// Holds the `reqwest` client, the resolved base URL and the session
/// token. Resource clients ([`PropertyClient`], [`CallClient`], …) share
/// one `Backend` via `Arc`.
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl Backend {
    /// Connect to the backend at the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Arc<Self>, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Arc::new(Self {
            http,
            base_url,
            token: RwLock::new(None),
        }))
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Replace the session token (`None` signs the session out)
    pub fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    /// The current session token, if any
    pub fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Raw HTTP client, for requests outside the API base URL
    /// (presigned upload targets)
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, path)
    }

    pub(crate) fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::DELETE, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.request(method, self.url(path));
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request and decode its JSON response.
    ///
    /// Failures are normalized to [`ClientError`]; the original cause
    /// (connection error, status, backend detail) is logged here and
    /// not carried to the operator.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<T, ClientError> {
        let response = self.send(request, context).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| {
                tracing::error!(context = context, error = %e, "Failed to decode response");
                ClientError::Parse(e.to_string())
            })
    }

    /// Send a request, discarding any response body
    pub(crate) async fn execute_empty(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<(), ClientError> {
        self.send(request, context).await?;
        Ok(())
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(context = context, error = %e, "Request failed");
            ClientError::Network(e.to_string())
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::error!(context = context, "Request rejected: not authenticated");
            return Err(ClientError::Auth);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .unwrap_or_default()
                .detail_text();
            tracing::error!(
                context = context,
                status = status.as_u16(),
                detail = %detail,
                "Request failed"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }
}
