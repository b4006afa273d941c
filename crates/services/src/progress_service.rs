use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};
use verify_core::model::{StageError, StageId, StageProgress};

/// Process-local stage progress. Nothing here is persisted.
#[derive(Default)]
pub struct ProgressService {
    progress: Mutex<StageProgress>,
}

impl ProgressService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StageProgress> {
        self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> StageProgress {
        self.lock().clone()
    }

    /// Mark `id` completed. Earlier stages are not required; skipping them is
    /// logged and allowed.
    ///
    /// # Errors
    ///
    /// Returns `StageError::UnknownStage` if `id` is not tracked.
    pub fn mark_completed(&self, id: StageId) -> Result<StageProgress, StageError> {
        let mut progress = self.lock();
        let was_completed = progress.is_completed(id);
        let in_order = progress.mark_completed(id)?;
        if was_completed {
            return Ok(progress.clone());
        }
        if !in_order {
            warn!(stage = %id, "stage completed before its prerequisites");
        }
        info!(
            stage = %id,
            completed = progress.completed_count(),
            total = progress.len(),
            "stage completed"
        );
        Ok(progress.clone())
    }

    pub fn reset(&self) {
        *self.lock() = StageProgress::new();
    }
}
