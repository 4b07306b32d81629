use std::sync::Arc;

use async_trait::async_trait;
use roadmap_core::model::{
    FilterSelection, Item, ItemId, Language, Phase, PhaseId, Roadmap, RoadmapDraft,
};
use roadmap_core::ProgressMap;
use services::{ProgressService, TrackerError};
use storage::repository::{InMemoryRepository, ProgressRepository, StorageError};

fn item(id: &str) -> ItemId {
    ItemId::new(id).unwrap()
}

/// Seven phases, twenty items; phases 4-6 are framework phases.
fn twenty_item_roadmap() -> Roadmap {
    let layout: [(u8, Language, bool, &[&str]); 7] = [
        (1, Language::Python, false, &["a1", "a2", "a3", "a4"]),
        (2, Language::Rust, false, &["b1", "b2", "b3"]),
        (3, Language::Both, false, &["c1", "c2", "c3"]),
        (4, Language::Python, true, &["framework-d1", "framework-d2", "framework-d3"]),
        (5, Language::Rust, true, &["framework-e1", "framework-e2", "framework-e3"]),
        (6, Language::Both, true, &["framework-f1"]),
        (7, Language::Other, false, &["g1", "g2", "g3"]),
    ];
    let phases = layout
        .iter()
        .map(|(id, language, framework, items)| {
            items.iter().fold(
                Phase::new(PhaseId::new(*id).unwrap(), format!("Phase {id}"), *language)
                    .framework(*framework),
                |phase, name| phase.with_item(Item::new(item(name), *name)),
            )
        })
        .collect();
    RoadmapDraft {
        title: "Scenario".into(),
        phases,
        ..RoadmapDraft::default()
    }
    .validate()
    .unwrap()
}

#[test]
fn scenario_roadmap_holds_twenty_items() {
    let roadmap = twenty_item_roadmap();
    assert_eq!(roadmap.phases().len(), 7);
    assert_eq!(roadmap.total_items(), 20);
    assert_eq!(roadmap.framework_items().count(), 7);
    let framework_phases = roadmap.phases().iter().filter(|p| p.is_framework()).count();
    assert_eq!(framework_phases, 3);
}

fn service(repo: InMemoryRepository) -> ProgressService {
    ProgressService::new(Arc::new(twenty_item_roadmap()), Arc::new(repo))
}

#[tokio::test]
async fn checking_ten_items_reports_percentages_and_one_celebration() {
    let repo = InMemoryRepository::new();
    let svc = service(repo.clone());
    let mut tracker = svc.start().await.unwrap();
    assert_eq!(tracker.display().total, 20);

    let ids: Vec<ItemId> = tracker
        .roadmap()
        .items()
        .take(10)
        .map(|item| item.id().clone())
        .collect();
    let mut percentages = Vec::new();
    let mut celebrations = Vec::new();
    for id in &ids {
        let outcome = svc.set_item(&mut tracker, id, true).await.unwrap();
        percentages.push(outcome.display.percentage);
        celebrations.push(outcome.celebrate);
    }

    assert_eq!(percentages, vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);
    assert_eq!(
        celebrations,
        vec![false, false, false, false, false, false, false, false, false, true]
    );
    assert_eq!(repo.load().await.unwrap().values().filter(|v| **v).count(), 10);
    assert_eq!(tracker.stats().percentage, 50.0);
}

#[tokio::test]
async fn frameworks_filter_shows_three_phases() {
    let svc = service(InMemoryRepository::new());
    let mut tracker = svc.start().await.unwrap();
    let view = tracker.select_filter(FilterSelection::Frameworks);

    assert_eq!(view.visible_count(), 3);
    let enabled: Vec<u8> = view
        .phases()
        .iter()
        .filter(|entry| entry.visible)
        .map(|entry| entry.phase.value())
        .collect();
    assert_eq!(enabled, vec![4, 5, 6]);
}

#[tokio::test]
async fn confirmed_reset_clears_everything() {
    let repo = InMemoryRepository::new();
    let svc = service(repo.clone());
    let mut tracker = svc.start().await.unwrap();
    for id in ["a1", "framework-d1", "framework-e2", "g2"] {
        svc.set_item(&mut tracker, &item(id), true).await.unwrap();
    }
    assert_eq!(tracker.framework_progress().completed, 2);

    let outcome = svc.reset(&mut tracker).await.unwrap();

    assert_eq!(outcome.cleared, 4);
    assert_eq!(outcome.display.completed, 0);
    assert_eq!(outcome.display.percentage, 0);
    assert_eq!(outcome.frameworks.completed, 0);
    assert_eq!(outcome.frameworks.total, 7);
    assert!(tracker.roadmap().items().all(|i| !tracker.is_completed(i.id())));
    assert!(repo.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn start_restores_saved_progress() {
    let mut saved = ProgressMap::new();
    saved.insert(item("b2"), true);
    saved.insert(item("framework-f1"), true);
    saved.insert(item("no-longer-declared"), true);
    let svc = service(InMemoryRepository::with_progress(saved));

    let tracker = svc.start().await.unwrap();

    assert_eq!(tracker.display().completed, 2);
    assert_eq!(tracker.display().percentage, 10);
    assert_eq!(tracker.framework_progress().completed, 1);
}

#[tokio::test]
async fn unchecking_back_to_a_multiple_of_ten_celebrates() {
    let svc = service(InMemoryRepository::new());
    let mut tracker = svc.start().await.unwrap();
    let ids: Vec<ItemId> = tracker.roadmap().items().take(11).map(|i| i.id().clone()).collect();
    for id in &ids {
        svc.set_item(&mut tracker, id, true).await.unwrap();
    }
    let outcome = svc.set_item(&mut tracker, &ids[0], false).await.unwrap();
    assert_eq!(outcome.display.completed, 10);
    assert!(outcome.celebrate);
}

struct FailingRepo;

#[async_trait]
impl ProgressRepository for FailingRepo {
    async fn save(&self, _progress: &ProgressMap) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn load(&self) -> Result<ProgressMap, StorageError> {
        Ok(ProgressMap::new())
    }
}

#[tokio::test]
async fn save_failure_still_updates_the_session() {
    let svc = ProgressService::new(Arc::new(twenty_item_roadmap()), Arc::new(FailingRepo));
    let mut tracker = svc.start().await.unwrap();

    let result = svc.set_item(&mut tracker, &item("c1"), true).await;

    assert!(matches!(result, Err(TrackerError::Storage(_))));
    assert!(tracker.is_completed(&item("c1")));

    // Unknown items never reach the repository.
    let ignored = svc.set_item(&mut tracker, &item("ghost"), true).await.unwrap();
    assert!(!ignored.is_changed());
}
