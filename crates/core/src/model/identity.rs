use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("email cannot be empty")]
    EmptyEmail,
    #[error("email must look like name@host")]
    InvalidEmail,
}

/// Identity supplied by the login form. Nothing validates it against a server.
///
/// Deserializing runs the same checks as [`UserIdentityDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredIdentity")]
pub struct UserIdentity {
    name: String,
    email: String,
    signed_in_at: DateTime<Utc>,
}

impl UserIdentity {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }
}

#[derive(Deserialize)]
struct StoredIdentity {
    name: String,
    email: String,
    signed_in_at: DateTime<Utc>,
}

impl TryFrom<StoredIdentity> for UserIdentity {
    type Error = IdentityError;

    fn try_from(stored: StoredIdentity) -> Result<Self, Self::Error> {
        UserIdentityDraft::new(stored.name, stored.email).validate(stored.signed_in_at)
    }
}

/// Raw login form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentityDraft {
    pub name: String,
    pub email: String,
}

impl UserIdentityDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// True when both fields have something other than whitespace.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Trim and check the form input.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError` if a field is blank or the email has no `@`
    /// separating two non-empty parts.
    pub fn validate(self, now: DateTime<Utc>) -> Result<UserIdentity, IdentityError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(IdentityError::EmptyEmail);
        }
        match email.split_once('@') {
            Some((local, host)) if !local.is_empty() && !host.is_empty() => {}
            _ => return Err(IdentityError::InvalidEmail),
        }

        Ok(UserIdentity {
            name: name.to_owned(),
            email: email.to_owned(),
            signed_in_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn validate_trims_fields() {
        let identity = UserIdentityDraft::new("  Ada ", " ada@example.com ")
            .validate(fixed_now())
            .unwrap();
        assert_eq!(identity.name(), "Ada");
        assert_eq!(identity.email(), "ada@example.com");
        assert_eq!(identity.signed_in_at(), fixed_now());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let err = UserIdentityDraft::new("   ", "ada@example.com")
            .validate(fixed_now())
            .unwrap_err();
        assert_eq!(err, IdentityError::EmptyName);
    }

    #[test]
    fn validate_rejects_malformed_email() {
        for email in ["ada", "@example.com", "ada@"] {
            let err = UserIdentityDraft::new("Ada", email)
                .validate(fixed_now())
                .unwrap_err();
            assert_eq!(err, IdentityError::InvalidEmail, "{email}");
        }
    }

    #[test]
    fn json_round_trip_keeps_identity() {
        let identity = UserIdentityDraft::new("Ada", "ada@example.com")
            .validate(fixed_now())
            .unwrap();
        let json = serde_json::to_string(&identity).unwrap();
        let back: UserIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, identity);
    }

    #[test]
    fn deserialize_rejects_invalid_fields() {
        let blank_name = r#"{"name":"   ","email":"ada@example.com","signed_in_at":"2023-11-14T22:13:20Z"}"#;
        assert!(serde_json::from_str::<UserIdentity>(blank_name).is_err());
        let bad_email = r#"{"name":"Ada","email":"not-an-email","signed_in_at":"2023-11-14T22:13:20Z"}"#;
        assert!(serde_json::from_str::<UserIdentity>(bad_email).is_err());
    }

    #[test]
    fn blank_draft_is_not_submittable() {
        assert!(!UserIdentityDraft::new("Ada", " ").is_submittable());
        assert!(UserIdentityDraft::new("Ada", "a@b").is_submittable());
    }
}
