use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::ReadableExt;
use roadmap_core::model::{FilterSelection, ItemId, PhaseId};
use roadmap_core::{Locale, ProgressMap};
use storage::repository::{ProgressRepository, StorageError};

use super::test_harness::{
    ViewHarness, setup_view_harness, setup_view_harness_with_progress,
    setup_view_harness_with_repo,
};
use crate::vm::RoadmapIntent;

const FIRST_TEN: [&str; 10] = [
    "py-syntax",
    "py-collections",
    "py-oop",
    "py-tooling",
    "rust-basics",
    "rust-ownership",
    "rust-traits",
    "rust-errors",
    "cs-algorithms",
    "cs-data-structures",
];

fn check(harness: &mut ViewHarness, id: &str, checked: bool) {
    harness.dispatch(RoadmapIntent::SetItem {
        item: ItemId::new(id).unwrap(),
        checked,
    });
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_empty_progress() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;
    let html = harness.render();
    assert!(html.contains("Learning Roadmap"), "missing title in {html}");
    assert!(html.contains(">0%</span>"), "missing percentage in {html}");
    assert!(html.contains("0 of 8 completed"), "missing framework label in {html}");
    assert_eq!(html.matches("class=\"phase-card").count(), 7);
    assert!(!html.contains("filtered-out"));
}

#[tokio::test(flavor = "current_thread")]
async fn checking_an_item_updates_percentage() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;

    check(&mut harness, "rust-ownership", true);
    let html = harness.render();
    assert!(html.contains(">4%</span>"), "missing 4% in {html}");
    assert!(html.contains("checkbox-item completed"));

    check(&mut harness, "framework-tokio", true);
    let html = harness.render();
    assert!(html.contains("1 of 8 completed"), "missing framework count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn frameworks_filter_hides_non_framework_phases() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;

    harness.dispatch(RoadmapIntent::SelectFilter(FilterSelection::Frameworks));
    let html = harness.render();
    assert_eq!(html.matches("filtered-out").count(), 4, "{html}");
    assert_eq!(html.matches("filter-btn active").count(), 1, "{html}");

    harness.dispatch(RoadmapIntent::SelectFilter(FilterSelection::All));
    assert!(!harness.render().contains("filtered-out"));
}

#[tokio::test(flavor = "current_thread")]
async fn toggling_a_phase_expands_its_content() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;

    harness.dispatch(RoadmapIntent::TogglePhase(PhaseId::new(2).unwrap()));
    let html = harness.render();
    assert_eq!(html.matches("phase-content expanded").count(), 1);
    assert!(html.contains("phase-toggle rotated"));

    harness.dispatch(RoadmapIntent::TogglePhase(PhaseId::new(2).unwrap()));
    assert!(!harness.render().contains("phase-content expanded"));
}

#[tokio::test(flavor = "current_thread")]
async fn reset_waits_for_confirmation() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;
    check(&mut harness, "py-syntax", true);
    check(&mut harness, "py-oop", true);

    harness.dispatch(RoadmapIntent::RequestReset);
    let html = harness.render();
    assert!(html.contains("Are you sure you want to reset all progress?"));

    harness.dispatch(RoadmapIntent::CancelReset);
    let html = harness.render();
    assert!(!html.contains("Are you sure"));
    assert!(html.contains(">8%</span>"), "progress lost after cancel: {html}");

    harness.dispatch(RoadmapIntent::RequestReset);
    harness.dispatch(RoadmapIntent::ConfirmReset);
    let html = harness.render();
    assert!(!html.contains("Are you sure"));
    assert!(html.contains(">0%</span>"), "progress kept after reset: {html}");
    assert!(html.contains("width 1s ease-out"), "missing slow transition in {html}");
    assert!(!html.contains("checkbox-item completed"));
}

#[tokio::test(flavor = "current_thread")]
async fn tenth_completion_shows_celebration() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;

    for id in &FIRST_TEN[..9] {
        check(&mut harness, id, true);
    }
    assert!(!harness.render().contains("class=\"celebration\""));

    check(&mut harness, FIRST_TEN[9], true);
    let html = harness.render();
    assert_eq!(html.matches("class=\"celebration\"").count(), 1, "{html}");
    assert!(html.contains(">42%</span>"), "{html}");
}

const REVEALED_ROW: &str = "\"opacity: 1;\"";

#[tokio::test(flavor = "current_thread")]
async fn timed_effects_settle_after_their_durations() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;

    for id in FIRST_TEN {
        check(&mut harness, id, true);
    }
    harness.dispatch(RoadmapIntent::TogglePhase(PhaseId::new(1).unwrap()));
    let html = harness.render();
    assert_eq!(html.matches("class=\"celebration\"").count(), 1, "{html}");
    assert!(html.contains("scale(1.05)"), "missing check pulse in {html}");

    harness.drive_for(Duration::from_millis(400)).await;
    let html = harness.render();
    assert!(!html.contains("scale(1.05)"), "pulse not cleared in {html}");
    assert_eq!(html.matches(REVEALED_ROW).count(), 4, "phase 1 rows not revealed: {html}");

    harness.dispatch(RoadmapIntent::RequestReset);
    harness.dispatch(RoadmapIntent::ConfirmReset);
    assert!(harness.render().contains("width 1s ease-out"));

    harness.drive_for(Duration::from_millis(1200)).await;
    let html = harness.render();
    assert_eq!(html.matches("class=\"celebration\"").count(), 0, "{html}");
    assert!(!html.contains("width 1s ease-out"), "slow transition kept in {html}");
    assert_eq!(html.matches(REVEALED_ROW).count(), 4, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn collapsing_hides_revealed_rows_again() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;
    let phase = PhaseId::new(2).unwrap();

    harness.dispatch(RoadmapIntent::TogglePhase(phase));
    harness.drive_for(Duration::from_millis(300)).await;
    assert_eq!(harness.render().matches(REVEALED_ROW).count(), 4);

    harness.dispatch(RoadmapIntent::TogglePhase(phase));
    harness.drive_for(Duration::from_millis(300)).await;
    assert_eq!(harness.render().matches(REVEALED_ROW).count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn comparison_modal_opens_and_closes() {
    let mut harness = setup_view_harness(Locale::En);
    harness.start().await;
    assert!(!harness.render().contains("modal active"));

    harness.dispatch(RoadmapIntent::OpenComparison);
    let html = harness.render();
    assert!(html.contains("modal active"));
    assert!(html.contains("<table>"), "missing comparison table in {html}");

    harness.dispatch(RoadmapIntent::CloseComparison);
    assert!(!harness.render().contains("modal active"));
}

#[tokio::test(flavor = "current_thread")]
async fn restored_progress_renders_on_start() {
    let mut saved = ProgressMap::new();
    saved.insert(ItemId::new("py-syntax").unwrap(), true);
    saved.insert(ItemId::new("framework-axum").unwrap(), true);
    saved.insert(ItemId::new("retired-item").unwrap(), true);

    let mut harness = setup_view_harness_with_progress(Locale::En, saved);
    harness.start().await;
    let html = harness.render();
    assert!(html.contains(">8%</span>"), "{html}");
    assert!(html.contains("1 of 8 completed"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn russian_locale_renders_localized_labels() {
    let mut harness = setup_view_harness(Locale::Ru);
    harness.start().await;
    let html = harness.render();
    assert!(html.contains("0 из 8 изучено"), "{html}");
    assert!(html.contains("Сбросить прогресс"), "{html}");
}

struct FailingSaveRepo;

#[async_trait::async_trait]
impl ProgressRepository for FailingSaveRepo {
    async fn save(&self, _progress: &ProgressMap) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn load(&self) -> Result<ProgressMap, StorageError> {
        Ok(ProgressMap::new())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_save_keeps_progress_and_shows_notice() {
    let mut harness = setup_view_harness_with_repo(Locale::En, Arc::new(FailingSaveRepo));
    harness.start().await;

    check(&mut harness, "rust-basics", true);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Progress could not be saved."), "{html}");
    assert!(html.contains(">4%</span>"), "{html}");
    let vm = harness.vm();
    let completed = harness
        .dom
        .in_runtime(|| vm.read().as_ref().map(|vm| vm.tracker().display().completed));
    assert_eq!(completed, Some(1));
}
