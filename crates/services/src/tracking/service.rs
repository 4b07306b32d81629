use std::sync::Arc;

use roadmap_core::{ItemChange, ProgressMap};
use roadmap_core::model::{ItemId, Roadmap};
use storage::repository::ProgressRepository;
use tracing::{debug, info, warn};

use super::outcome::{CheckOutcome, ResetOutcome};
use super::tracker::Tracker;
use crate::error::TrackerError;

/// Starts trackers from saved progress and persists every mutation.
#[derive(Clone)]
pub struct ProgressService {
    roadmap: Arc<Roadmap>,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(roadmap: Arc<Roadmap>, progress: Arc<dyn ProgressRepository>) -> Self {
        Self { roadmap, progress }
    }

    #[must_use]
    pub fn roadmap(&self) -> Arc<Roadmap> {
        Arc::clone(&self.roadmap)
    }

    /// Start a tracker with whatever the repository has saved.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Storage` if loading fails.
    pub async fn start(&self) -> Result<Tracker, TrackerError> {
        let saved = self.progress.load().await?;
        let (tracker, applied) = Tracker::restored(Arc::clone(&self.roadmap), &saved);
        let skipped = saved.len() - applied;
        if skipped > 0 {
            debug!(skipped, "ignored saved progress for undeclared items");
        }
        debug!(
            completed = tracker.display().completed,
            total = tracker.display().total,
            "tracker started"
        );
        Ok(tracker)
    }

    /// Set the completion flag of `id` on the tracker without persisting.
    pub fn apply_item(&self, tracker: &mut Tracker, id: &ItemId, completed: bool) -> CheckOutcome {
        let outcome = tracker.set_item(id, completed);
        match outcome.change {
            ItemChange::Unknown => debug!(item = %id, "ignored change for undeclared item"),
            ItemChange::Unchanged { .. } => {}
            ItemChange::Changed { completed: count, .. } => {
                debug!(item = %id, completed, count, "item updated");
            }
        }
        if outcome.celebrate {
            info!(completed = outcome.display.completed, "milestone reached");
        }
        outcome
    }

    /// Clear every completion flag on the tracker without persisting.
    pub fn apply_reset(&self, tracker: &mut Tracker) -> ResetOutcome {
        let outcome = tracker.reset();
        info!(cleared = outcome.cleared, "progress reset");
        outcome
    }

    /// Set the completion flag of `id` and persist the result.
    ///
    /// The in-memory tracker is updated even if saving fails.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Storage` if saving fails.
    pub async fn set_item(
        &self,
        tracker: &mut Tracker,
        id: &ItemId,
        completed: bool,
    ) -> Result<CheckOutcome, TrackerError> {
        let outcome = self.apply_item(tracker, id, completed);
        if outcome.is_changed() {
            self.persist(tracker.progress()).await?;
        }
        Ok(outcome)
    }

    /// Clear every completion flag and persist the empty state.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Storage` if saving fails.
    pub async fn reset(&self, tracker: &mut Tracker) -> Result<ResetOutcome, TrackerError> {
        let outcome = self.apply_reset(tracker);
        self.persist(tracker.progress()).await?;
        Ok(outcome)
    }

    /// Hand the current flags to the repository.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Storage` if saving fails.
    pub async fn persist(&self, progress: &ProgressMap) -> Result<(), TrackerError> {
        if let Err(err) = self.progress.save(progress).await {
            warn!(error = %err, "failed to save progress");
            return Err(err.into());
        }
        debug!(entries = progress.len(), "progress saved");
        Ok(())
    }
}
