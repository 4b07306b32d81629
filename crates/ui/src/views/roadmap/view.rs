use std::collections::HashSet;
use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use roadmap_core::ProgressMap;
use roadmap_core::effects::{
    CELEBRATION_DURATION, CHECK_PULSE_DURATION, RESET_TRANSITION_DURATION,
    SCROLL_HIGHLIGHT_DURATION,
};
use roadmap_core::model::{ItemId, PhaseId};
use roadmap_core::phases::reveal_schedule;
use services::ProgressService;
use tracing::debug;

use super::components::{
    CelebrationOverlay, ComparisonModal, FilterBar, PhaseCard, PhaseNav, ProgressHeader,
    ResetDialog,
};
use super::scripts::{FOCUS_ROOT_SCRIPT, lock_body_scroll, measure_phase, scroll_window_to};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    BarTransition, KeyCommand, RoadmapIntent, RoadmapVm, UiText, key_command, start_roadmap,
};

#[component]
pub fn RoadmapView() -> Element {
    let ctx = use_context::<AppContext>();
    let locale = ctx.locale();
    let text = UiText::for_locale(locale);
    let service = ctx.progress_service();

    let vm = use_signal(|| None::<RoadmapVm>);
    let error = use_signal(|| None::<ViewError>);
    let mut show_comparison = use_signal(|| false);
    let mut confirm_reset = use_signal(|| false);
    let celebrations = use_signal(Vec::<u64>::new);
    let next_celebration = use_signal(|| 0_u64);
    let transition = use_signal(BarTransition::default);
    let revealed = use_signal(HashSet::<ItemId>::new);
    let pulsing = use_signal(HashSet::<ItemId>::new);
    let highlighted = use_signal(|| None::<PhaseId>);

    let resource = {
        let service = service.clone();
        use_resource(move || {
            let service = service.clone();
            let mut vm = vm;
            async move {
                let started = start_roadmap(&service).await?;
                vm.set(Some(started));
                Ok::<_, ViewError>(())
            }
        })
    };
    let state = view_state_from_resource(resource);

    use_effect(move || {
        let _ = eval(FOCUS_ROOT_SCRIPT);
    });

    let dispatch = {
        let service = service.clone();
        use_callback(move |intent: RoadmapIntent| {
            let mut vm = vm;
            match intent {
                RoadmapIntent::SetItem { item, checked } => {
                    let applied = vm.write().as_mut().map(|vm| {
                        let outcome = vm.set_item(&service, &item, checked);
                        (outcome, vm.progress_snapshot())
                    });
                    let Some((outcome, snapshot)) = applied else {
                        return;
                    };
                    if !outcome.is_changed() {
                        return;
                    }
                    if checked {
                        pulse_item(pulsing, item);
                    }
                    if outcome.celebrate {
                        celebrate(celebrations, next_celebration);
                    }
                    persist(Arc::clone(&service), snapshot, error);
                }
                RoadmapIntent::SelectFilter(filter) => {
                    if let Some(vm) = vm.write().as_mut() {
                        let view = vm.select_filter(filter);
                        debug!(%filter, visible = view.visible_count(), "filter applied");
                    }
                }
                RoadmapIntent::TogglePhase(phase) => {
                    let toggled = vm.write().as_mut().and_then(|vm| vm.toggle_phase(phase));
                    if toggled.is_some() {
                        reveal_items(vm, revealed, phase);
                    }
                }
                RoadmapIntent::ScrollToPhase(phase) => scroll_to_phase(phase, highlighted),
                RoadmapIntent::RequestReset => confirm_reset.set(true),
                RoadmapIntent::CancelReset => confirm_reset.set(false),
                RoadmapIntent::ConfirmReset => {
                    confirm_reset.set(false);
                    let snapshot = vm.write().as_mut().map(|vm| {
                        vm.reset(&service);
                        vm.progress_snapshot()
                    });
                    let Some(snapshot) = snapshot else {
                        return;
                    };
                    let mut pulsing = pulsing;
                    pulsing.write().clear();
                    slow_bar(transition);
                    persist(Arc::clone(&service), snapshot, error);
                }
                RoadmapIntent::OpenComparison => {
                    if !show_comparison() {
                        show_comparison.set(true);
                        lock_body_scroll(true);
                    }
                }
                RoadmapIntent::CloseComparison => {
                    if show_comparison() {
                        show_comparison.set(false);
                        lock_body_scroll(false);
                    }
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<RoadmapTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let on_key = move |evt: KeyboardEvent| {
        let Some(command) = key_command(&evt.data.key(), evt.data.modifiers(), None) else {
            return;
        };
        match command {
            KeyCommand::CloseComparison => dispatch.call(RoadmapIntent::CloseComparison),
            KeyCommand::ScrollToPhase(phase) => dispatch.call(RoadmapIntent::ScrollToPhase(phase)),
            KeyCommand::TogglePhase(phase) => {
                evt.prevent_default();
                dispatch.call(RoadmapIntent::TogglePhase(phase));
            }
        }
    };

    let body = match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "…" }
        },
        ViewState::Error(err) => rsx! {
            p { class: "error", "{err.message()}" }
        },
        ViewState::Ready(()) => {
            let guard = vm.read();
            let Some(current) = guard.as_ref() else {
                return rsx! {};
            };
            let title = current.title().to_string();
            let subtitle = current.subtitle().map(str::to_string);
            let progress = current.progress(transition(), locale);
            let filters = current.filter_buttons(text);
            let nav_buttons = current.nav_buttons(text);
            let cards = current.phase_cards(&revealed.read(), &pulsing.read(), highlighted());
            let comparison = current.comparison_html();
            let has_comparison = comparison.is_some();

            rsx! {
                header { class: "header",
                    h1 { "{title}" }
                    {subtitle.map(|subtitle| rsx! { p { class: "subtitle", "{subtitle}" } })}
                    ProgressHeader { progress, text }
                }
                nav { class: "nav-bar",
                    FilterBar { buttons: filters, on_intent: dispatch }
                    PhaseNav { buttons: nav_buttons, on_intent: dispatch }
                    div { class: "nav-actions",
                        if has_comparison {
                            button {
                                class: "btn btn-secondary",
                                id: "open-comparison",
                                onclick: move |_| dispatch.call(RoadmapIntent::OpenComparison),
                                "{text.compare_button}"
                            }
                        }
                        button {
                            class: "btn btn-danger",
                            id: "reset-progress",
                            onclick: move |_| dispatch.call(RoadmapIntent::RequestReset),
                            "{text.reset_button}"
                        }
                    }
                }
                if error() == Some(ViewError::SaveFailed) {
                    p { class: "save-error", role: "status", "{text.save_failed}" }
                }
                main { class: "phases",
                    for card in cards {
                        PhaseCard { key: "{card.id}", card, on_intent: dispatch }
                    }
                }
                ComparisonModal { open: show_comparison(), html: comparison, text, on_intent: dispatch }
                if confirm_reset() {
                    ResetDialog { text, on_intent: dispatch }
                }
            }
        }
    };

    rsx! {
        div {
            class: "page roadmap-page",
            id: "roadmap-root",
            tabindex: "0",
            onkeydown: on_key,
            {body}
            CelebrationOverlay { bursts: celebrations() }
        }
    }
}

fn persist(service: Arc<ProgressService>, snapshot: ProgressMap, mut error: Signal<Option<ViewError>>) {
    spawn(async move {
        match service.persist(&snapshot).await {
            Ok(()) => error.set(None),
            Err(_) => error.set(Some(ViewError::SaveFailed)),
        }
    });
}

fn pulse_item(mut pulsing: Signal<HashSet<ItemId>>, item: ItemId) {
    pulsing.write().insert(item.clone());
    spawn(async move {
        tokio::time::sleep(CHECK_PULSE_DURATION).await;
        pulsing.write().remove(&item);
    });
}

fn celebrate(mut celebrations: Signal<Vec<u64>>, mut next: Signal<u64>) {
    let burst = next();
    next.set(burst.wrapping_add(1));
    celebrations.write().push(burst);
    spawn(async move {
        tokio::time::sleep(CELEBRATION_DURATION).await;
        celebrations.write().retain(|id| *id != burst);
    });
}

fn slow_bar(mut transition: Signal<BarTransition>) {
    transition.set(BarTransition::Slow);
    spawn(async move {
        tokio::time::sleep(RESET_TRANSITION_DURATION).await;
        transition.set(BarTransition::Normal);
    });
}

/// Stagger item visibility after a toggle. Each timer applies whatever the
/// phase's expansion state is when it fires.
fn reveal_items(vm: Signal<Option<RoadmapVm>>, revealed: Signal<HashSet<ItemId>>, phase: PhaseId) {
    let items = vm
        .read()
        .as_ref()
        .map(|vm| vm.phase_items(phase))
        .unwrap_or_default();
    for ((_, delay), item) in reveal_schedule(items.len()).zip(items) {
        let mut revealed = revealed;
        spawn(async move {
            tokio::time::sleep(delay).await;
            let expanded = vm.read().as_ref().is_some_and(|vm| vm.is_expanded(phase));
            if expanded {
                revealed.write().insert(item);
            } else {
                revealed.write().remove(&item);
            }
        });
    }
}

fn scroll_to_phase(phase: PhaseId, mut highlighted: Signal<Option<PhaseId>>) {
    spawn(async move {
        let Some(metrics) = measure_phase(phase).await else {
            debug!(%phase, "phase card not measurable");
            return;
        };
        scroll_window_to(metrics.target());
        highlighted.set(Some(phase));
        tokio::time::sleep(SCROLL_HIGHLIGHT_DURATION).await;
        if highlighted() == Some(phase) {
            highlighted.set(None);
        }
    });
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RoadmapTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<RoadmapIntent>>>>,
    vm: std::rc::Rc<std::cell::RefCell<Option<Signal<Option<RoadmapVm>>>>>,
}

#[cfg(test)]
impl RoadmapTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<RoadmapIntent>, vm: Signal<Option<RoadmapVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<RoadmapIntent> {
        (*self.dispatch.borrow()).expect("roadmap dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<RoadmapVm>> {
        (*self.vm.borrow()).expect("roadmap vm registered")
    }
}
