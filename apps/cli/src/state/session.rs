//! # Session State
//!
//! The signed-in user, if any.
//!
//! Persisted as JSON under [`AUTH_KEY`] by the auth commands; this type only
//! holds the in-memory copy.

use shopsync_core::User;
use tokio::sync::RwLock;

/// Settings key holding the signed-in user as JSON.
pub const AUTH_KEY: &str = "@shopsync_auth";

#[derive(Debug, Default)]
pub struct SessionState {
    user: RwLock<Option<User>>,
}

impl SessionState {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        SessionState::default()
    }

    pub async fn current(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.user.read().await.is_some()
    }

    pub(crate) async fn replace(&self, user: Option<User>) {
        *self.user.write().await = user;
    }
}
