use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use verify_core::fixtures;
use verify_core::model::{
    BackgroundCheck, Recommendation, ReportSummary, SkillScore, StageProgress, UserIdentity,
};
use verify_core::scoring::ScoreResult;

use crate::Clock;
use crate::error::ReportServiceError;

/// Everything the report page shows, and what "Download Report" writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub candidate: Option<UserIdentity>,
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub skills: Vec<SkillScore>,
    pub recommendations: Vec<Recommendation>,
    pub background: BackgroundCheck,
    pub quiz: Option<ScoreResult>,
    pub stages_completed: usize,
    pub stages_total: usize,
}

pub struct ReportService {
    clock: Clock,
    quiz: Mutex<Option<ScoreResult>>,
}

impl ReportService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            quiz: Mutex::new(None),
        }
    }

    fn quiz(&self) -> MutexGuard<'_, Option<ScoreResult>> {
        self.quiz.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Keep the latest skill-quiz score for the report.
    pub fn record_quiz(&self, score: ScoreResult) {
        info!(
            correct = score.correct,
            total = score.total,
            percent = score.rounded(),
            "skill quiz scored"
        );
        *self.quiz() = Some(score);
    }

    #[must_use]
    pub fn quiz_score(&self) -> Option<ScoreResult> {
        *self.quiz()
    }

    pub fn clear(&self) {
        *self.quiz() = None;
    }

    #[must_use]
    pub fn build(
        &self,
        candidate: Option<UserIdentity>,
        progress: &StageProgress,
    ) -> VerificationReport {
        VerificationReport {
            candidate,
            generated_at: self.clock.now(),
            summary: fixtures::report_summary(),
            skills: fixtures::skill_scores(),
            recommendations: fixtures::recommendations(),
            background: BackgroundCheck::from_timeline(&fixtures::work_history()),
            quiz: self.quiz_score(),
            stages_completed: progress.completed_count(),
            stages_total: progress.len(),
        }
    }

    /// Write `report` to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError` if encoding or writing fails.
    pub async fn export_json(
        &self,
        report: &VerificationReport,
        path: &Path,
    ) -> Result<(), ReportServiceError> {
        let body = serde_json::to_string_pretty(report)?;
        tokio::fs::write(path, body).await?;
        info!(path = %path.display(), "report exported");
        Ok(())
    }
}
