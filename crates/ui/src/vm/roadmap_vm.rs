use std::collections::HashSet;

use roadmap_core::{Locale, ProgressMap};
use roadmap_core::filter::FilterView;
use roadmap_core::model::{FilterSelection, ItemId, PhaseId};
use roadmap_core::phases::PhaseState;
use services::{CheckOutcome, ProgressService, ResetOutcome, Tracker};

use crate::views::ViewError;
use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::phase_vm::{
    CardEffects, FilterButtonVm, NavButtonVm, PhaseCardVm, map_filter_buttons, map_nav_buttons,
    map_phase_cards,
};
use crate::vm::progress_vm::{BarTransition, ProgressVm, map_progress};
use crate::vm::strings::UiText;

/// Everything the user can do on the roadmap page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoadmapIntent {
    SetItem { item: ItemId, checked: bool },
    SelectFilter(FilterSelection),
    TogglePhase(PhaseId),
    ScrollToPhase(PhaseId),
    RequestReset,
    ConfirmReset,
    CancelReset,
    OpenComparison,
    CloseComparison,
}

#[derive(Clone, Debug)]
pub struct RoadmapVm {
    tracker: Tracker,
}

impl RoadmapVm {
    #[must_use]
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.tracker.roadmap().title()
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.tracker.roadmap().subtitle()
    }

    /// Sanitized HTML for the comparison modal; `None` when the roadmap has no table.
    #[must_use]
    pub fn comparison_html(&self) -> Option<String> {
        self.tracker
            .roadmap()
            .comparison()
            .map(markdown_to_html)
    }

    /// Updates the tracker only; the caller persists `progress_snapshot()` afterwards.
    pub fn set_item(
        &mut self,
        service: &ProgressService,
        item: &ItemId,
        checked: bool,
    ) -> CheckOutcome {
        service.apply_item(&mut self.tracker, item, checked)
    }

    pub fn reset(&mut self, service: &ProgressService) -> ResetOutcome {
        service.apply_reset(&mut self.tracker)
    }

    #[must_use]
    pub fn progress_snapshot(&self) -> ProgressMap {
        self.tracker.progress().clone()
    }

    pub fn select_filter(&mut self, filter: FilterSelection) -> FilterView {
        self.tracker.select_filter(filter)
    }

    pub fn toggle_phase(&mut self, phase: PhaseId) -> Option<PhaseState> {
        self.tracker.toggle_phase(phase)
    }

    #[must_use]
    pub fn is_expanded(&self, phase: PhaseId) -> bool {
        self.tracker.phase_state(phase).is_expanded()
    }

    /// Item ids of a phase in declared order; empty for unknown phases.
    #[must_use]
    pub fn phase_items(&self, phase: PhaseId) -> Vec<ItemId> {
        self.tracker
            .roadmap()
            .phase(phase)
            .map(|phase| phase.items().iter().map(|item| item.id().clone()).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn progress(&self, transition: BarTransition, locale: Locale) -> ProgressVm {
        map_progress(
            self.tracker.display(),
            self.tracker.framework_progress(),
            transition,
            locale,
        )
    }

    #[must_use]
    pub fn phase_cards(
        &self,
        revealed: &HashSet<ItemId>,
        pulsing: &HashSet<ItemId>,
        highlighted: Option<PhaseId>,
    ) -> Vec<PhaseCardVm> {
        let effects = CardEffects {
            revealed,
            pulsing,
            highlighted,
        };
        map_phase_cards(&self.tracker, &self.tracker.filter_view(), effects)
    }

    #[must_use]
    pub fn nav_buttons(&self, text: &UiText) -> Vec<NavButtonVm> {
        map_nav_buttons(&self.tracker, &self.tracker.filter_view(), text)
    }

    #[must_use]
    pub fn filter_buttons(&self, text: &UiText) -> Vec<FilterButtonVm> {
        map_filter_buttons(self.tracker.current_filter(), text)
    }
}

/// # Errors
///
/// Returns `ViewError::Unknown` if saved progress cannot be loaded.
pub async fn start_roadmap(service: &ProgressService) -> Result<RoadmapVm, ViewError> {
    let tracker = service.start().await.map_err(|_| ViewError::Unknown)?;
    Ok(RoadmapVm::new(tracker))
}
