use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;
use verify_core::model::{Destination, UserIdentity};

use crate::error::SessionStoreError;
use crate::session_store::SessionStore;

/// What a protected view should do on render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectToLogin { from: Destination },
}

/// Guards protected destinations and remembers where a signed-out visitor
/// was heading.
pub struct AccessGate {
    sessions: Arc<SessionStore>,
    captured: Mutex<Option<Destination>>,
}

impl AccessGate {
    #[must_use]
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self {
            sessions,
            captured: Mutex::new(None),
        }
    }

    fn captured(&self) -> MutexGuard<'_, Option<Destination>> {
        self.captured.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Decide whether `destination` may render. Public destinations and
    /// signed-in visitors pass through untouched.
    pub fn guard(&self, destination: Destination) -> GateDecision {
        if !destination.requires_auth() || self.sessions.is_authenticated() {
            return GateDecision::Allow;
        }
        debug!(%destination, "capturing destination for post-login redirect");
        *self.captured() = Some(destination);
        GateDecision::RedirectToLogin { from: destination }
    }

    /// The destination waiting for a successful login, if any.
    #[must_use]
    pub fn pending_destination(&self) -> Option<Destination> {
        *self.captured()
    }

    /// Where the login page sends a visitor who is already signed in.
    #[must_use]
    pub fn login_destination(&self) -> Option<Destination> {
        self.sessions
            .is_authenticated()
            .then_some(Destination::Dashboard)
    }

    /// Sign in and return where to go next: the captured destination, or the
    /// dashboard. The capture is consumed.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the identity cannot be persisted. The
    /// capture is kept so a retry still lands in the right place.
    pub async fn complete_login(
        &self,
        identity: UserIdentity,
    ) -> Result<Destination, SessionStoreError> {
        self.sessions.login(identity).await?;
        let destination = self
            .captured()
            .take()
            .filter(|d| d.requires_auth())
            .unwrap_or(Destination::Dashboard);
        Ok(destination)
    }

    /// Sign out and forget any captured destination.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the persisted session cannot be removed.
    pub async fn logout(&self) -> Result<(), SessionStoreError> {
        *self.captured() = None;
        self.sessions.logout().await
    }
}
