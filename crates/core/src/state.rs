//! The in-memory state store of a tracking session.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{FilterSelection, ItemId, PhaseId, Roadmap};
use crate::phases::{ExpandedPhases, PhaseState};
use crate::progress::{FrameworkProgress, ProgressDisplay, ProgressStats};

/// Completion flags keyed by item id. Absent entries count as not completed.
pub type ProgressMap = BTreeMap<ItemId, bool>;

/// Effect of a single `set_item` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemChange {
    /// The id is not declared by the roadmap; nothing changed.
    Unknown,
    /// The item already had the requested flag.
    Unchanged { completed: usize },
    Changed { previous: usize, completed: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerState {
    known_items: BTreeSet<ItemId>,
    framework_items: BTreeSet<ItemId>,
    phases: BTreeSet<PhaseId>,
    progress: ProgressMap,
    current_filter: FilterSelection,
    expanded_phases: ExpandedPhases,
    total_items: usize,
    completed_items: usize,
}

impl TrackerState {
    /// Empty state for the given roadmap: nothing completed, filter `All`,
    /// every phase collapsed.
    #[must_use]
    pub fn new(roadmap: &Roadmap) -> Self {
        let known_items: BTreeSet<ItemId> = roadmap.items().map(|item| item.id().clone()).collect();
        let framework_items = roadmap
            .framework_items()
            .map(|item| item.id().clone())
            .collect();
        let phases = roadmap.phases().iter().map(|phase| phase.id()).collect();
        Self {
            total_items: known_items.len(),
            known_items,
            framework_items,
            phases,
            progress: ProgressMap::new(),
            current_filter: FilterSelection::default(),
            expanded_phases: ExpandedPhases::new(),
            completed_items: 0,
        }
    }

    /// Upserts the completion flag of an item.
    pub fn set_item(&mut self, id: &ItemId, completed: bool) -> ItemChange {
        if !self.known_items.contains(id) {
            return ItemChange::Unknown;
        }
        let previous = self.completed_items;
        let was = self.is_completed(id);
        self.progress.insert(id.clone(), completed);
        if was == completed {
            return ItemChange::Unchanged {
                completed: previous,
            };
        }
        self.completed_items = self.count_completed();
        ItemChange::Changed {
            previous,
            completed: self.completed_items,
        }
    }

    /// Applies previously saved flags. Ids the roadmap does not declare are
    /// skipped; returns how many entries were applied.
    pub fn restore(&mut self, saved: &ProgressMap) -> usize {
        let mut applied = 0;
        for (id, completed) in saved {
            if self.known_items.contains(id) {
                self.progress.insert(id.clone(), *completed);
                applied += 1;
            }
        }
        self.completed_items = self.count_completed();
        applied
    }

    /// Clears every completion flag. Filter and expansion state are kept.
    pub fn reset(&mut self) {
        self.progress.clear();
        self.completed_items = 0;
    }

    #[must_use]
    pub fn is_completed(&self, id: &ItemId) -> bool {
        self.progress.get(id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    #[must_use]
    pub fn completed_items(&self) -> usize {
        self.completed_items
    }

    /// Display variant: integer percentage.
    #[must_use]
    pub fn display(&self) -> ProgressDisplay {
        ProgressDisplay::new(self.completed_items, self.total_items)
    }

    /// Reporting variant: remaining count and one-decimal percentage.
    #[must_use]
    pub fn stats(&self) -> ProgressStats {
        ProgressStats::new(self.completed_items, self.total_items)
    }

    #[must_use]
    pub fn framework_progress(&self) -> FrameworkProgress {
        FrameworkProgress {
            completed: self
                .framework_items
                .iter()
                .filter(|id| self.is_completed(id))
                .count(),
            total: self.framework_items.len(),
        }
    }

    #[must_use]
    pub fn current_filter(&self) -> FilterSelection {
        self.current_filter
    }

    pub fn set_filter(&mut self, filter: FilterSelection) {
        self.current_filter = filter;
    }

    /// Flips a phase. Returns `None` for phases the roadmap does not declare.
    pub fn toggle_phase(&mut self, phase: PhaseId) -> Option<PhaseState> {
        if !self.phases.contains(&phase) {
            return None;
        }
        Some(self.expanded_phases.toggle(phase))
    }

    #[must_use]
    pub fn phase_state(&self, phase: PhaseId) -> PhaseState {
        self.expanded_phases.state(phase)
    }

    #[must_use]
    pub fn expanded_phases(&self) -> &ExpandedPhases {
        &self.expanded_phases
    }

    fn count_completed(&self) -> usize {
        self.progress.values().filter(|done| **done).count()
    }
}
