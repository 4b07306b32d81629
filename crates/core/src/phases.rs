//! Phase expand/collapse state machine.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::effects::ITEM_REVEAL_STAGGER;
use crate::model::PhaseId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhaseState {
    #[default]
    Collapsed,
    Expanded,
}

impl PhaseState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PhaseState::Collapsed => PhaseState::Expanded,
            PhaseState::Expanded => PhaseState::Collapsed,
        }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(self, PhaseState::Expanded)
    }
}

/// Expansion state for all phases, tracked as set membership.
/// Phases start collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedPhases(BTreeSet<PhaseId>);

impl ExpandedPhases {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the phase and returns its new state.
    pub fn toggle(&mut self, phase: PhaseId) -> PhaseState {
        if self.0.remove(&phase) {
            PhaseState::Collapsed
        } else {
            self.0.insert(phase);
            PhaseState::Expanded
        }
    }

    #[must_use]
    pub fn state(&self, phase: PhaseId) -> PhaseState {
        if self.0.contains(&phase) {
            PhaseState::Expanded
        } else {
            PhaseState::Collapsed
        }
    }

    #[must_use]
    pub fn contains(&self, phase: PhaseId) -> bool {
        self.0.contains(&phase)
    }

    pub fn iter(&self) -> impl Iterator<Item = PhaseId> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Delay before the item at each index fades in or out after a toggle.
pub fn reveal_schedule(item_count: usize) -> impl Iterator<Item = (usize, Duration)> {
    (0..item_count).map(|index| {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        (index, ITEM_REVEAL_STAGGER.saturating_mul(steps))
    })
}
