use std::fmt;

use thiserror::Error;

use crate::model::destination::Destination;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StageError {
    #[error("stage {0} is not part of this workflow")]
    UnknownStage(StageId),
}

//
// ─── STAGES ────────────────────────────────────────────────────────────────────
//

/// Verification workflow steps, in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StageId {
    Upload,
    Verify,
    Background,
    Report,
}

impl StageId {
    pub const ORDER: [StageId; 4] = [
        StageId::Upload,
        StageId::Verify,
        StageId::Background,
        StageId::Report,
    ];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            StageId::Upload => "Resume Upload",
            StageId::Verify => "Skill Verification",
            StageId::Background => "Background Check",
            StageId::Report => "Final Report",
        }
    }

    #[must_use]
    pub fn destination(self) -> Destination {
        match self {
            StageId::Upload => Destination::Upload,
            StageId::Verify => Destination::Verify,
            StageId::Background => Destination::Background,
            StageId::Report => Destination::Report,
        }
    }

    /// One-line call to action shown for the current stage.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            StageId::Upload => "Upload your resume for AI analysis",
            StageId::Verify => "Verify your skills through interactive questions",
            StageId::Background => "Complete your background information",
            StageId::Report => "View your final verification report",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            StageId::Upload => "upload",
            StageId::Verify => "verify",
            StageId::Background => "background",
            StageId::Report => "report",
        };
        f.write_str(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub id: StageId,
    pub display_name: &'static str,
    pub destination: Destination,
    pub completed: bool,
}

impl Stage {
    #[must_use]
    pub fn new(id: StageId) -> Self {
        Self {
            id,
            display_name: id.display_name(),
            destination: id.destination(),
            completed: false,
        }
    }
}

/// How a stage card should be presented relative to the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Current,
    NotStarted,
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Ordered completion flags for the workflow.
///
/// Completion is permissive: any stage can be completed regardless of the
/// ones before it, since pages are reachable by direct navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageProgress {
    stages: Vec<Stage>,
}

impl Default for StageProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl StageProgress {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stages: StageId::ORDER.into_iter().map(Stage::new).collect(),
        }
    }

    /// Builds progress from an explicit list, keeping the caller's order.
    ///
    /// # Panics
    ///
    /// Panics if `stages` is empty; a workflow always has a last stage.
    #[must_use]
    pub fn from_stages(stages: Vec<Stage>) -> Self {
        assert!(!stages.is_empty(), "stage list cannot be empty");
        Self { stages }
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Index of the first incomplete stage, or the last index when all are done.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.stages
            .iter()
            .position(|stage| !stage.completed)
            .unwrap_or(self.stages.len().saturating_sub(1))
    }

    #[must_use]
    pub fn current(&self) -> &Stage {
        &self.stages[self.current_index()]
    }

    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.stages.iter().all(|stage| stage.completed)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.stages.iter().filter(|stage| stage.completed).count()
    }

    #[must_use]
    pub fn status_of(&self, index: usize) -> StageStatus {
        match self.stages.get(index) {
            Some(stage) if stage.completed => StageStatus::Completed,
            Some(_) if index == self.current_index() => StageStatus::Current,
            _ => StageStatus::NotStarted,
        }
    }

    #[must_use]
    pub fn is_completed(&self, id: StageId) -> bool {
        self.stages
            .iter()
            .any(|stage| stage.id == id && stage.completed)
    }

    /// True when every stage ordered before `id` is completed.
    ///
    /// # Errors
    ///
    /// Returns `StageError::UnknownStage` if `id` is not in this workflow.
    pub fn prerequisites_met(&self, id: StageId) -> Result<bool, StageError> {
        let index = self.index_of(id)?;
        Ok(self.stages[..index].iter().all(|stage| stage.completed))
    }

    /// Marks one stage completed and leaves the others alone.
    ///
    /// Returns whether the prerequisites were met at the time, so callers can
    /// flag out-of-order completion without refusing it.
    ///
    /// # Errors
    ///
    /// Returns `StageError::UnknownStage` if `id` is not in this workflow.
    pub fn mark_completed(&mut self, id: StageId) -> Result<bool, StageError> {
        let in_order = self.prerequisites_met(id)?;
        let index = self.index_of(id)?;
        self.stages[index].completed = true;
        Ok(in_order)
    }

    fn index_of(&self, id: StageId) -> Result<usize, StageError> {
        self.stages
            .iter()
            .position(|stage| stage.id == id)
            .ok_or(StageError::UnknownStage(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_with(completed: &[StageId]) -> StageProgress {
        let mut progress = StageProgress::new();
        for id in completed {
            progress.mark_completed(*id).unwrap();
        }
        progress
    }

    #[test]
    fn fresh_progress_starts_at_upload() {
        let progress = StageProgress::new();
        assert_eq!(progress.current().id, StageId::Upload);
        assert_eq!(progress.status_of(0), StageStatus::Current);
        assert_eq!(progress.status_of(1), StageStatus::NotStarted);
    }

    #[test]
    fn current_is_first_incomplete() {
        let progress = progress_with(&[StageId::Upload]);
        assert_eq!(progress.current().id, StageId::Verify);
        assert_eq!(progress.current_index(), 1);
        assert_eq!(progress.status_of(0), StageStatus::Completed);
        assert_eq!(progress.status_of(1), StageStatus::Current);
    }

    #[test]
    fn current_is_last_when_all_complete() {
        let progress = progress_with(&StageId::ORDER);
        assert!(progress.all_completed());
        assert_eq!(progress.current().id, StageId::Report);
        assert_eq!(progress.status_of(3), StageStatus::Completed);
    }

    #[test]
    fn gap_in_completion_points_at_the_gap() {
        let progress = progress_with(&[StageId::Upload, StageId::Background]);
        assert_eq!(progress.current().id, StageId::Verify);
        assert_eq!(progress.status_of(2), StageStatus::Completed);
    }

    #[test]
    fn out_of_order_completion_is_allowed_but_reported() {
        let mut progress = StageProgress::new();
        let in_order = progress.mark_completed(StageId::Report).unwrap();
        assert!(!in_order);
        assert!(progress.is_completed(StageId::Report));
        assert!(!progress.is_completed(StageId::Upload));

        let in_order = progress.mark_completed(StageId::Upload).unwrap();
        assert!(in_order);
    }

    #[test]
    fn marking_twice_keeps_other_stages() {
        let mut progress = progress_with(&[StageId::Upload, StageId::Verify]);
        progress.mark_completed(StageId::Upload).unwrap();
        assert_eq!(progress.completed_count(), 2);
    }

    #[test]
    fn unknown_stage_is_an_error() {
        let mut progress = StageProgress::from_stages(vec![Stage::new(StageId::Upload)]);
        assert_eq!(
            progress.mark_completed(StageId::Report),
            Err(StageError::UnknownStage(StageId::Report))
        );
    }
}
