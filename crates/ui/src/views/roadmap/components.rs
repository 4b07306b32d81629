use dioxus::prelude::*;

use crate::vm::{
    FilterButtonVm, ItemVm, KeyCommand, NavButtonVm, PhaseCardVm, ProgressVm, RoadmapIntent,
    UiText, key_command,
};

#[component]
pub(super) fn ProgressHeader(progress: ProgressVm, text: &'static UiText) -> Element {
    rsx! {
        section { class: "progress-panel",
            h2 { class: "progress-heading", "{text.progress_heading}" }
            div { class: "progress-bar",
                div {
                    class: "progress-fill",
                    id: "progress-fill",
                    style: "{progress.fill_style}",
                }
            }
            div { class: "progress-stats",
                span { class: "progress-percentage", id: "progress-percentage", "{progress.percentage_label}" }
                span { class: "stat",
                    "{text.completed_label}: "
                    strong { id: "completed-count", "{progress.completed}" }
                }
                span { class: "stat",
                    "{text.total_label}: "
                    strong { id: "total-count", "{progress.total}" }
                }
            }
            p { class: "framework-progress",
                span { class: "framework-heading", "{text.frameworks_heading}: " }
                span { id: "framework-count", "{progress.framework_label}" }
            }
        }
    }
}

#[component]
pub(super) fn FilterBar(
    buttons: Vec<FilterButtonVm>,
    on_intent: EventHandler<RoadmapIntent>,
) -> Element {
    rsx! {
        div { class: "filter-bar",
            for button in buttons {
                button {
                    key: "{button.filter}",
                    class: "{button.class}",
                    "data-filter": "{button.filter}",
                    onclick: move |_| on_intent.call(RoadmapIntent::SelectFilter(button.filter)),
                    "{button.label}"
                }
            }
        }
    }
}

#[component]
pub(super) fn PhaseNav(buttons: Vec<NavButtonVm>, on_intent: EventHandler<RoadmapIntent>) -> Element {
    rsx! {
        div { class: "phase-nav",
            for button in buttons {
                button {
                    key: "{button.phase}",
                    class: "phase-nav-btn",
                    "data-phase": "{button.phase}",
                    style: "{button.style}",
                    disabled: !button.enabled,
                    onclick: move |_| on_intent.call(RoadmapIntent::ScrollToPhase(button.phase)),
                    "{button.label}"
                }
            }
        }
    }
}

#[component]
pub(super) fn PhaseCard(card: PhaseCardVm, on_intent: EventHandler<RoadmapIntent>) -> Element {
    let phase = card.id;
    let total = card.items.len();
    let aria_expanded = if card.expanded { "true" } else { "false" };
    let on_header_key = move |evt: KeyboardEvent| {
        if let Some(KeyCommand::TogglePhase(phase)) =
            key_command(&evt.data.key(), evt.data.modifiers(), Some(phase))
        {
            evt.prevent_default();
            evt.stop_propagation();
            on_intent.call(RoadmapIntent::TogglePhase(phase));
        }
    };

    rsx! {
        article {
            class: "{card.card_class}",
            id: "phase-{phase}",
            "data-phase": "{phase}",
            "data-language": "{card.language}",
            style: "{card.card_style}",
            div {
                class: "phase-header",
                tabindex: "0",
                role: "button",
                aria_expanded: "{aria_expanded}",
                onclick: move |_| on_intent.call(RoadmapIntent::TogglePhase(phase)),
                onkeydown: on_header_key,
                div { class: "phase-title",
                    span { class: "phase-number", "{phase}" }
                    h3 { "{card.title}" }
                    span { class: "phase-count", "{card.completed}/{total}" }
                }
                span { class: "{card.toggle_class}", "▼" }
            }
            div { class: "{card.content_class}",
                {card.summary.clone().map(|summary| rsx! {
                    p { class: "phase-summary", "{summary}" }
                })}
                for item in card.items.clone() {
                    ItemRow { key: "{item.id}", item, on_intent }
                }
            }
        }
    }
}

#[component]
fn ItemRow(item: ItemVm, on_intent: EventHandler<RoadmapIntent>) -> Element {
    let id = item.id.clone();
    rsx! {
        label { class: "{item.row_class}", style: "{item.row_style}",
            input {
                r#type: "checkbox",
                id: "{item.id}",
                "data-item": "{item.id}",
                checked: item.checked,
                onchange: move |evt: FormEvent| {
                    on_intent.call(RoadmapIntent::SetItem {
                        item: id.clone(),
                        checked: evt.checked(),
                    });
                },
            }
            span { class: "item-label", "{item.label}" }
            {item.description_html.clone().map(|html| rsx! {
                div { class: "item-description", dangerous_inner_html: "{html}" }
            })}
        }
    }
}

#[component]
pub(super) fn ComparisonModal(
    open: bool,
    html: Option<String>,
    text: &'static UiText,
    on_intent: EventHandler<RoadmapIntent>,
) -> Element {
    let modal_class = if open { "modal active" } else { "modal" };
    rsx! {
        div {
            class: "{modal_class}",
            id: "comparison-modal",
            onclick: move |_| on_intent.call(RoadmapIntent::CloseComparison),
            div {
                class: "modal-content",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    aria_label: "{text.close_button}",
                    onclick: move |_| on_intent.call(RoadmapIntent::CloseComparison),
                    "×"
                }
                h2 { "{text.compare_button}" }
                {html.clone().map(|html| rsx! {
                    div { class: "comparison", dangerous_inner_html: "{html}" }
                })}
            }
        }
    }
}

#[component]
pub(super) fn ResetDialog(text: &'static UiText, on_intent: EventHandler<RoadmapIntent>) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| on_intent.call(RoadmapIntent::CancelReset),
            div {
                class: "dialog",
                role: "alertdialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                p { class: "dialog-prompt", "{text.reset_prompt}" }
                div { class: "dialog-actions",
                    button {
                        class: "btn btn-secondary",
                        id: "reset-cancel",
                        onclick: move |_| on_intent.call(RoadmapIntent::CancelReset),
                        "{text.reset_cancel}"
                    }
                    button {
                        class: "btn btn-danger",
                        id: "reset-confirm",
                        onclick: move |_| on_intent.call(RoadmapIntent::ConfirmReset),
                        "{text.reset_confirm}"
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn CelebrationOverlay(bursts: Vec<u64>) -> Element {
    rsx! {
        for burst in bursts {
            div { key: "{burst}", class: "celebration", aria_hidden: "true", "🎉" }
        }
    }
}
