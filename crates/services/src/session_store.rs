use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storage::repository::{AUTH_USER_KEY, LocalStateRepository};
use tracing::{debug, info, warn};
use verify_core::model::{Session, UserIdentity};

use crate::Clock;
use crate::error::SessionStoreError;

/// Owns the signed-in identity and keeps it in step with local storage.
pub struct SessionStore {
    clock: Clock,
    repo: Arc<dyn LocalStateRepository>,
    session: Mutex<Session>,
}

impl SessionStore {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn LocalStateRepository>) -> Self {
        Self {
            clock,
            repo,
            session: Mutex::new(Session::anonymous()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the persisted identity, if any, into memory.
    ///
    /// Missing, unreadable, malformed or invalid state leaves the session signed out.
    pub async fn restore(&self) -> Option<UserIdentity> {
        let record = match self.repo.load(AUTH_USER_KEY).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("no persisted session");
                *self.lock() = Session::anonymous();
                return None;
            }
            Err(err) => {
                warn!(error = %err, "could not read persisted session");
                *self.lock() = Session::anonymous();
                return None;
            }
        };

        match serde_json::from_str::<UserIdentity>(&record.value) {
            Ok(identity) => {
                info!(email = identity.email(), "session restored");
                *self.lock() = Session::signed_in(identity.clone());
                Some(identity)
            }
            Err(err) => {
                warn!(error = %err, "discarding malformed persisted session");
                *self.lock() = Session::anonymous();
                None
            }
        }
    }

    /// Persist `identity`, then make it the current session.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the identity cannot be encoded or stored;
    /// the in-memory session is unchanged in that case.
    pub async fn login(&self, identity: UserIdentity) -> Result<(), SessionStoreError> {
        let blob = serde_json::to_string(&identity)?;
        self.repo
            .store(AUTH_USER_KEY, &blob, self.clock.now())
            .await?;
        info!(email = identity.email(), "signed in");
        self.lock().sign_in(identity);
        Ok(())
    }

    /// Clear the in-memory identity, then the persisted one.
    ///
    /// # Errors
    ///
    /// Returns `SessionStoreError` if the persisted blob cannot be removed.
    /// The in-memory session is already cleared when this happens.
    pub async fn logout(&self) -> Result<(), SessionStoreError> {
        let previous = self.lock().sign_out();
        if let Some(identity) = previous {
            info!(email = identity.email(), "signed out");
        }
        self.repo.remove(AUTH_USER_KEY).await?;
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.lock().clone()
    }

    #[must_use]
    pub fn identity(&self) -> Option<UserIdentity> {
        self.lock().identity().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated()
    }
}
