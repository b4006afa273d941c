use crate::model::identity::UserIdentity;

/// In-memory authentication state.
///
/// Authentication is derived from the identity, so "authenticated without an
/// identity" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<UserIdentity>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    #[must_use]
    pub fn signed_in(identity: UserIdentity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn sign_in(&mut self, identity: UserIdentity) {
        self.identity = Some(identity);
    }

    /// Clears the identity and returns whatever was there.
    pub fn sign_out(&mut self) -> Option<UserIdentity> {
        self.identity.take()
    }
}
