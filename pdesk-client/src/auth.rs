//! Auth resource client
//!
//! Sign-in state flows one way: backend token → token cell + token
//! file → [`AuthBus`] notification. Observers subscribe to the bus;
//! nothing else reads the token file.

use std::sync::Arc;

use pdesk_common::api::types::{LoginRequest, RegisterRequest, TokenResponse};
use pdesk_common::events::{AuthBus, AuthState};
use serde_json::Value;
use tracing::{info, warn};

use crate::token::{StoredToken, TokenStore};
use crate::{Backend, ClientError};

/// Client for `/auth/`
pub struct AuthClient {
    backend: Arc<Backend>,
    store: TokenStore,
    bus: Arc<AuthBus>,
}

impl AuthClient {
    pub fn new(backend: Arc<Backend>, store: TokenStore, bus: Arc<AuthBus>) -> Self {
        Self {
            backend,
            store,
            bus,
        }
    }

    /// Restore a persisted session, if any.
    ///
    /// Loads the token file, arms the backend's token cell and
    /// broadcasts the resulting state. Returns the state so callers can
    /// branch without subscribing.
    pub fn restore(&self) -> AuthState {
        match self.store.load() {
            Some(stored) => {
                self.backend.set_token(Some(stored.token));
                let state = AuthState::SignedIn {
                    username: stored.username,
                };
                self.bus.emit(state.clone());
                state
            }
            None => {
                self.bus.emit(AuthState::SignedOut);
                AuthState::SignedOut
            }
        }
    }

    /// Sign in and persist the issued token
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        // The token endpoint takes form-encoded credentials.
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let token: TokenResponse = self
            .backend
            .execute(
                self.backend.post("/auth/token").form(&credentials),
                "login",
            )
            .await?;

        self.backend.set_token(Some(token.access_token.clone()));

        let stored = StoredToken {
            token: token.access_token,
            username: username.to_string(),
        };
        if let Err(e) = self.store.save(&stored) {
            // The in-memory session is still valid; only persistence
            // across restarts is lost.
            warn!("Could not persist session token: {e}");
        }

        self.bus.emit(AuthState::SignedIn {
            username: username.to_string(),
        });
        info!(username = username, "Signed in");
        Ok(())
    }

    /// Create an account
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ClientError> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let _: Value = self
            .backend
            .execute(
                self.backend.post("/auth/register").json(&request),
                "register",
            )
            .await?;
        Ok(())
    }

    /// Sign out locally: drop the token, clear the file, notify.
    ///
    /// Purely client-side; the backend holds no session to end.
    pub fn logout(&self) {
        self.backend.set_token(None);
        if let Err(e) = self.store.clear() {
            warn!("Could not remove token file: {e}");
        }
        self.bus.emit(AuthState::SignedOut);
        info!("Signed out");
    }
}
