//! Auth state distribution
//!
//! Sign-in state is application-level mutable state that several parts
//! of a console session observe (prompt, guarded commands, token
//! refresh). [`AuthBus`] is the single subscription point: the current
//! state is always readable, and transitions broadcast to every
//! subscriber. Persistence (the token file) lives with the client's
//! token store; this bus never touches disk.

use std::sync::RwLock;

use tokio::sync::broadcast;

/// Sign-in state of the console session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No valid token held
    SignedOut,
    /// Token held for the named account
    SignedIn {
        /// Account name the token was issued to
        username: String,
    },
}

impl AuthState {
    /// Whether a token is currently held
    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn { .. })
    }
}

/// Broadcast bus for auth state transitions
///
/// Uses `tokio::broadcast` internally: non-blocking publish, multiple
/// concurrent subscribers, automatic cleanup when subscribers drop.
/// Slow subscribers may observe lag and should fall back to
/// [`AuthBus::current`].
///
/// # Examples
///
/// ```
/// use pdesk_common::events::{AuthBus, AuthState};
///
/// let bus = AuthBus::new(16);
/// let mut rx = bus.subscribe();
///
/// bus.emit(AuthState::SignedIn { username: "admin".into() });
/// assert!(bus.current().is_signed_in());
/// ```
pub struct AuthBus {
    tx: broadcast::Sender<AuthState>,
    current: RwLock<AuthState>,
}

impl AuthBus {
    /// Create a bus with the given transition buffer capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            current: RwLock::new(AuthState::SignedOut),
        }
    }

    /// Subscribe to all future state transitions
    pub fn subscribe(&self) -> broadcast::Receiver<AuthState> {
        self.tx.subscribe()
    }

    /// The most recently emitted state
    pub fn current(&self) -> AuthState {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Record and broadcast a state transition.
    ///
    /// Returns the number of subscribers notified; zero subscribers is
    /// not an error; the state is still recorded.
    pub fn emit(&self, state: AuthState) -> usize {
        match self.current.write() {
            Ok(mut guard) => *guard = state.clone(),
            Err(poisoned) => *poisoned.into_inner() = state.clone(),
        }
        self.tx.send(state).unwrap_or(0)
    }
}

impl Default for AuthBus {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_signed_out() {
        let bus = AuthBus::default();
        assert_eq!(bus.current(), AuthState::SignedOut);
        assert!(!bus.current().is_signed_in());
    }

    #[test]
    fn test_emit_updates_current_without_subscribers() {
        let bus = AuthBus::default();
        let notified = bus.emit(AuthState::SignedIn {
            username: "admin".into(),
        });
        assert_eq!(notified, 0);
        assert!(bus.current().is_signed_in());
    }

    #[tokio::test]
    async fn test_subscribers_observe_transitions() {
        let bus = AuthBus::default();
        let mut rx = bus.subscribe();

        bus.emit(AuthState::SignedIn {
            username: "admin".into(),
        });
        bus.emit(AuthState::SignedOut);

        assert_eq!(
            rx.recv().await.expect("first transition"),
            AuthState::SignedIn {
                username: "admin".into()
            }
        );
        assert_eq!(rx.recv().await.expect("second transition"), AuthState::SignedOut);
    }
}
