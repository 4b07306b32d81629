//! Filter engine: which phases pass the active filter.

use crate::model::{FilterSelection, Language, Phase, PhaseId, Roadmap};

/// Pure visibility predicate for a phase under a filter.
#[must_use]
pub fn classify(phase: &Phase, filter: FilterSelection) -> bool {
    match filter {
        FilterSelection::All => true,
        FilterSelection::Python => matches!(phase.language(), Language::Python | Language::Both),
        FilterSelection::Rust => matches!(phase.language(), Language::Rust | Language::Both),
        FilterSelection::Frameworks => phase.is_framework(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseVisibility {
    pub phase: PhaseId,
    pub visible: bool,
}

/// Result of activating a filter: per-phase visibility in declared order.
/// Navigation controls mirror `visible` (enabled when the phase passes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterView {
    filter: FilterSelection,
    phases: Vec<PhaseVisibility>,
}

impl FilterView {
    #[must_use]
    pub fn compute(roadmap: &Roadmap, filter: FilterSelection) -> Self {
        let phases = roadmap
            .phases()
            .iter()
            .map(|phase| PhaseVisibility {
                phase: phase.id(),
                visible: classify(phase, filter),
            })
            .collect();
        Self { filter, phases }
    }

    #[must_use]
    pub fn filter(&self) -> FilterSelection {
        self.filter
    }

    #[must_use]
    pub fn phases(&self) -> &[PhaseVisibility] {
        &self.phases
    }

    /// Unknown phases are never visible.
    #[must_use]
    pub fn is_visible(&self, phase: PhaseId) -> bool {
        self.phases
            .iter()
            .any(|entry| entry.phase == phase && entry.visible)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.phases.iter().filter(|entry| entry.visible).count()
    }
}
