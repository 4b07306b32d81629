use std::sync::Arc;

use roadmap_core::filter::FilterView;
use roadmap_core::milestone::is_milestone;
use roadmap_core::model::{FilterSelection, ItemId, PhaseId, Roadmap};
use roadmap_core::phases::PhaseState;
use roadmap_core::progress::{FrameworkProgress, ProgressDisplay, ProgressStats};
use roadmap_core::{ItemChange, ProgressMap, TrackerState};

use super::outcome::{CheckOutcome, ResetOutcome};

/// One in-memory tracking session over a roadmap.
///
/// All mutations are synchronous; persistence is handled by
/// [`ProgressService`](super::ProgressService).
#[derive(Clone, Debug)]
pub struct Tracker {
    roadmap: Arc<Roadmap>,
    state: TrackerState,
}

impl Tracker {
    #[must_use]
    pub fn new(roadmap: Arc<Roadmap>) -> Self {
        let state = TrackerState::new(&roadmap);
        Self { roadmap, state }
    }

    /// Tracker with saved flags applied. Returns the tracker and the number
    /// of saved entries that matched the roadmap.
    #[must_use]
    pub fn restored(roadmap: Arc<Roadmap>, saved: &ProgressMap) -> (Self, usize) {
        let mut tracker = Self::new(roadmap);
        let applied = tracker.state.restore(saved);
        (tracker, applied)
    }

    #[must_use]
    pub fn roadmap(&self) -> &Roadmap {
        &self.roadmap
    }

    #[must_use]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn set_item(&mut self, id: &ItemId, completed: bool) -> CheckOutcome {
        let change = self.state.set_item(id, completed);
        let celebrate = match change {
            ItemChange::Changed { previous, completed } => is_milestone(previous, completed),
            ItemChange::Unknown | ItemChange::Unchanged { .. } => false,
        };
        CheckOutcome {
            change,
            display: self.state.display(),
            frameworks: self.state.framework_progress(),
            celebrate,
        }
    }

    pub fn reset(&mut self) -> ResetOutcome {
        let cleared = self.state.completed_items();
        self.state.reset();
        ResetOutcome {
            cleared,
            display: self.state.display(),
            frameworks: self.state.framework_progress(),
        }
    }

    /// Activates a filter and returns the resulting per-phase visibility.
    pub fn select_filter(&mut self, filter: FilterSelection) -> FilterView {
        self.state.set_filter(filter);
        self.filter_view()
    }

    #[must_use]
    pub fn filter_view(&self) -> FilterView {
        FilterView::compute(&self.roadmap, self.state.current_filter())
    }

    pub fn toggle_phase(&mut self, phase: PhaseId) -> Option<PhaseState> {
        self.state.toggle_phase(phase)
    }

    #[must_use]
    pub fn phase_state(&self, phase: PhaseId) -> PhaseState {
        self.state.phase_state(phase)
    }

    #[must_use]
    pub fn is_completed(&self, id: &ItemId) -> bool {
        self.state.is_completed(id)
    }

    #[must_use]
    pub fn current_filter(&self) -> FilterSelection {
        self.state.current_filter()
    }

    #[must_use]
    pub fn display(&self) -> ProgressDisplay {
        self.state.display()
    }

    #[must_use]
    pub fn stats(&self) -> ProgressStats {
        self.state.stats()
    }

    #[must_use]
    pub fn framework_progress(&self) -> FrameworkProgress {
        self.state.framework_progress()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        self.state.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> Tracker {
        Tracker::new(Arc::new(Roadmap::builtin().unwrap()))
    }

    fn item(id: &str) -> ItemId {
        ItemId::new(id).unwrap()
    }

    #[test]
    fn unknown_item_does_not_celebrate() {
        let mut tracker = tracker();
        let outcome = tracker.set_item(&item("nope"), true);
        assert_eq!(outcome.change, ItemChange::Unknown);
        assert!(!outcome.celebrate);
        assert!(!outcome.is_changed());
    }

    #[test]
    fn tenth_check_celebrates() {
        let mut tracker = tracker();
        let ids: Vec<ItemId> = tracker
            .roadmap()
            .items()
            .take(11)
            .map(|item| item.id().clone())
            .collect();
        let celebrations: Vec<bool> = ids
            .iter()
            .map(|id| tracker.set_item(id, true).celebrate)
            .collect();
        assert_eq!(celebrations.iter().filter(|c| **c).count(), 1);
        assert!(celebrations[9]);

        // Re-checking an already completed item is not a transition.
        assert!(!tracker.set_item(&ids[9], true).celebrate);
    }

    #[test]
    fn reset_reports_cleared_count() {
        let mut tracker = tracker();
        tracker.set_item(&item("framework-axum"), true);
        tracker.set_item(&item("rust-traits"), true);
        let outcome = tracker.reset();
        assert_eq!(outcome.cleared, 2);
        assert_eq!(outcome.display.percentage, 0);
        assert_eq!(outcome.frameworks.completed, 0);
        assert_eq!(outcome.frameworks.total, 8);
    }

    #[test]
    fn select_filter_is_remembered() {
        let mut tracker = tracker();
        let view = tracker.select_filter(FilterSelection::Rust);
        assert_eq!(view.filter(), FilterSelection::Rust);
        assert_eq!(tracker.current_filter(), FilterSelection::Rust);
        assert_eq!(tracker.filter_view(), view);
    }

    #[test]
    fn restored_tracker_counts_saved_items() {
        let mut saved = ProgressMap::new();
        saved.insert(item("py-syntax"), true);
        saved.insert(item("removed-item"), true);
        let (tracker, applied) = Tracker::restored(Arc::new(Roadmap::builtin().unwrap()), &saved);
        assert_eq!(applied, 1);
        assert_eq!(tracker.display().completed, 1);
        assert_eq!(tracker.stats().remaining, 23);
    }
}
