use serde::Serialize;

/// Outcome of checking one employment entry against outside records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verification {
    Verified,
    Mismatch { detail: String },
}

impl Verification {
    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkExperience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub verification: Verification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundCheck {
    pub matched: usize,
    pub total: usize,
}

impl BackgroundCheck {
    #[must_use]
    pub fn from_timeline(timeline: &[WorkExperience]) -> Self {
        Self {
            matched: timeline
                .iter()
                .filter(|entry| entry.verification.is_verified())
                .count(),
            total: timeline.len(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Your employment history has been verified with {} of {} positions matching perfectly.",
            self.matched, self.total
        )
    }
}
