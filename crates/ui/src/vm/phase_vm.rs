use std::collections::HashSet;

use roadmap_core::effects::card_entrance_delay_secs;
use roadmap_core::filter::FilterView;
use roadmap_core::model::{FilterSelection, ItemId, Phase, PhaseId};
use services::Tracker;

use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::strings::UiText;

/// Transient visual state layered over the tracker.
#[derive(Clone, Copy, Debug)]
pub struct CardEffects<'a> {
    pub revealed: &'a HashSet<ItemId>,
    pub pulsing: &'a HashSet<ItemId>,
    pub highlighted: Option<PhaseId>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemVm {
    pub id: ItemId,
    pub label: String,
    pub description_html: Option<String>,
    pub checked: bool,
    pub row_class: &'static str,
    pub row_style: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseCardVm {
    pub id: PhaseId,
    pub title: String,
    pub summary: Option<String>,
    pub language: &'static str,
    pub is_framework: bool,
    pub expanded: bool,
    pub card_class: String,
    pub card_style: String,
    pub content_class: &'static str,
    pub toggle_class: &'static str,
    pub completed: usize,
    pub items: Vec<ItemVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavButtonVm {
    pub phase: PhaseId,
    pub label: String,
    pub enabled: bool,
    pub style: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterButtonVm {
    pub filter: FilterSelection,
    pub label: &'static str,
    pub class: &'static str,
}

fn map_item(
    item: &roadmap_core::model::Item,
    tracker: &Tracker,
    effects: CardEffects<'_>,
) -> ItemVm {
    let checked = tracker.is_completed(item.id());
    let row_style = match (
        effects.revealed.contains(item.id()),
        effects.pulsing.contains(item.id()),
    ) {
        (true, true) => "opacity: 1; transform: scale(1.05);",
        (true, false) => "opacity: 1;",
        (false, true) => "opacity: 0; transform: scale(1.05);",
        (false, false) => "opacity: 0;",
    };
    ItemVm {
        id: item.id().clone(),
        label: item.label().to_string(),
        description_html: item.description().map(markdown_to_html),
        checked,
        row_class: if checked {
            "checkbox-item completed"
        } else {
            "checkbox-item"
        },
        row_style,
    }
}

fn map_card(
    index: usize,
    phase: &Phase,
    tracker: &Tracker,
    view: &FilterView,
    effects: CardEffects<'_>,
) -> PhaseCardVm {
    let expanded = tracker.phase_state(phase.id()).is_expanded();
    let mut card_class = String::from("phase-card");
    if phase.is_framework() {
        card_class.push_str(" framework-card");
    }
    if !view.is_visible(phase.id()) {
        card_class.push_str(" filtered-out");
    }
    let mut card_style = format!("animation-delay: {:.1}s;", card_entrance_delay_secs(index));
    if effects.highlighted == Some(phase.id()) {
        card_style.push_str(" box-shadow: 0 0 30px rgba(59, 130, 246, 0.5);");
    }
    let items: Vec<ItemVm> = phase
        .items()
        .iter()
        .map(|item| map_item(item, tracker, effects))
        .collect();

    PhaseCardVm {
        id: phase.id(),
        title: phase.title().to_string(),
        summary: phase.summary().map(str::to_string),
        language: phase.language().as_str(),
        is_framework: phase.is_framework(),
        expanded,
        card_class,
        card_style,
        content_class: if expanded {
            "phase-content expanded"
        } else {
            "phase-content"
        },
        toggle_class: if expanded {
            "phase-toggle rotated"
        } else {
            "phase-toggle"
        },
        completed: items.iter().filter(|item| item.checked).count(),
        items,
    }
}

#[must_use]
pub fn map_phase_cards(
    tracker: &Tracker,
    view: &FilterView,
    effects: CardEffects<'_>,
) -> Vec<PhaseCardVm> {
    tracker
        .roadmap()
        .phases()
        .iter()
        .enumerate()
        .map(|(index, phase)| map_card(index, phase, tracker, view, effects))
        .collect()
}

#[must_use]
pub fn map_nav_buttons(tracker: &Tracker, view: &FilterView, text: &UiText) -> Vec<NavButtonVm> {
    tracker
        .roadmap()
        .phases()
        .iter()
        .map(|phase| {
            let enabled = view.is_visible(phase.id());
            NavButtonVm {
                phase: phase.id(),
                label: format!("{} {}", text.phase_prefix, phase.id()),
                enabled,
                style: if enabled {
                    "opacity: 1; pointer-events: auto;"
                } else {
                    "opacity: 0.5; pointer-events: none;"
                },
            }
        })
        .collect()
}

/// Exactly one button is active.
#[must_use]
pub fn map_filter_buttons(current: FilterSelection, text: &UiText) -> Vec<FilterButtonVm> {
    FilterSelection::ALL
        .into_iter()
        .map(|filter| FilterButtonVm {
            filter,
            label: match filter {
                FilterSelection::All => text.filter_all,
                FilterSelection::Python => text.filter_python,
                FilterSelection::Rust => text.filter_rust,
                FilterSelection::Frameworks => text.filter_frameworks,
            },
            class: if filter == current {
                "filter-btn active"
            } else {
                "filter-btn"
            },
        })
        .collect()
}
