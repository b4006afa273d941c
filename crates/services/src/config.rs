use std::time::Duration;

/// Every simulated delay in the journey, in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    /// Assistant "typing" before each interview prompt appears.
    pub question: Duration,
    /// Pause while an interview answer is "evaluated".
    pub evaluation: Duration,
    /// Pause between the interview completion message and the coding phase.
    pub handoff: Duration,
    pub code_run: Duration,
    pub code_submit: Duration,
    pub quiz_advance: Duration,
    pub upload_tick: Duration,
    pub analysis: Duration,
    pub background_verify: Duration,
}

impl Delays {
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            question: Duration::from_millis(1000),
            evaluation: Duration::from_millis(1500),
            handoff: Duration::from_millis(2000),
            code_run: Duration::from_millis(1500),
            code_submit: Duration::from_millis(2000),
            quiz_advance: Duration::from_millis(500),
            upload_tick: Duration::from_millis(100),
            analysis: Duration::from_millis(500),
            background_verify: Duration::from_millis(1500),
        }
    }

    #[must_use]
    pub const fn instant() -> Self {
        Self {
            question: Duration::ZERO,
            evaluation: Duration::ZERO,
            handoff: Duration::ZERO,
            code_run: Duration::ZERO,
            code_submit: Duration::ZERO,
            quiz_advance: Duration::ZERO,
            upload_tick: Duration::ZERO,
            analysis: Duration::ZERO,
            background_verify: Duration::ZERO,
        }
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProctorConfig {
    /// How long a camera or microphone request may stay unanswered.
    pub permission_timeout: Duration,
    /// Length of each of the three face-scan phases.
    pub face_scan_step: Duration,
}

impl ProctorConfig {
    pub const DEFAULT_PERMISSION_TIMEOUT: Duration = Duration::from_secs(30);

    #[must_use]
    pub const fn standard() -> Self {
        Self {
            permission_timeout: Self::DEFAULT_PERMISSION_TIMEOUT,
            face_scan_step: Duration::from_millis(1000),
        }
    }

    #[must_use]
    pub const fn instant() -> Self {
        Self {
            permission_timeout: Self::DEFAULT_PERMISSION_TIMEOUT,
            face_scan_step: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_permission_timeout(mut self, timeout: Duration) -> Self {
        self.permission_timeout = timeout;
        self
    }
}

impl Default for ProctorConfig {
    fn default() -> Self {
        Self::standard()
    }
}
