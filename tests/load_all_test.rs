//! Tests for the combined observation of every category.

mod common;

use common::*;
use game_discovery::error::{ErrorCategory, SourceError};
use game_discovery::models::{DiscoveryCategory, DiscoveryItem, Game};
use game_discovery::startup::DiscoveryConfig;

fn emit_all(harness: &TestHarness, per_category: u64) {
    for (index, category) in DiscoveryCategory::ALL.into_iter().enumerate() {
        let first_id = 100 * (index as u64 + 1);
        assert!(harness
            .observer(category)
            .emit(games_from(category.title(), first_id, per_category)));
    }
}

#[tokio::test]
async fn test_initial_snapshot_lists_every_category() {
    let harness = TestHarness::new();
    let snapshot = harness.controller.snapshot();

    assert!(has_registry_order(&snapshot));
    for (item, category) in snapshot.items().iter().zip(DiscoveryCategory::ALL) {
        assert_eq!(item, &DiscoveryItem::default_for(category));
    }
}

#[tokio::test]
async fn test_load_starts_one_observation_per_category() {
    let harness = TestHarness::with_config(DiscoveryConfig::default().with_page_size(7));

    harness.controller.load_all();

    assert!(harness.controller.is_loading_all());
    for (_, observer) in harness.observers.iter() {
        assert_eq!(observer.execute_count(), 1);
        assert_eq!(
            observer.last_params(),
            Some(DiscoveryConfig::default().with_page_size(7).observe_params)
        );
    }
}

#[tokio::test]
async fn test_nothing_published_until_every_category_emits() {
    let harness = TestHarness::new();
    let mut snapshots = harness.controller.subscribe();
    harness.controller.load_all();

    harness
        .observer(DiscoveryCategory::Popular)
        .emit(games("Popular", 2));
    harness
        .observer(DiscoveryCategory::ComingSoon)
        .emit(games("Coming", 1));
    settle().await;

    assert!(!snapshots.has_changed().unwrap());
    assert_eq!(harness.controller.snapshot().total_children(), 0);
}

#[tokio::test]
async fn test_children_follow_category_order() {
    let harness = TestHarness::new();
    harness.controller.load_all();

    emit_all(&harness, 2);
    wait_until(|| harness.controller.snapshot().total_children() == 8).await;

    let snapshot = harness.controller.snapshot();
    assert!(has_registry_order(&snapshot));
    for (index, category) in DiscoveryCategory::ALL.into_iter().enumerate() {
        let first_id = 100 * (index as u64 + 1);
        let item = snapshot.item(category).unwrap();
        assert_eq!(item.children, children(&games_from(category.title(), first_id, 2)));
        assert!(!item.is_progress_bar_visible);
    }
}

#[tokio::test]
async fn test_popular_and_upcoming_scenario() {
    let harness = TestHarness::new();
    harness.controller.load_all();

    let popular = vec![
        Game::new(1, "A"),
        Game::new(2, "B"),
    ];
    let upcoming = vec![Game::new(3, "C")];
    harness
        .observer(DiscoveryCategory::Popular)
        .emit(popular.clone());
    harness
        .observer(DiscoveryCategory::ComingSoon)
        .emit(upcoming.clone());
    harness
        .observer(DiscoveryCategory::RecentlyReleased)
        .emit(Vec::new());
    harness
        .observer(DiscoveryCategory::MostAnticipated)
        .emit(Vec::new());

    wait_until(|| harness.controller.snapshot().total_children() == 3).await;

    let snapshot = harness.controller.snapshot();
    let popular_item = snapshot.item(DiscoveryCategory::Popular).unwrap();
    let upcoming_item = snapshot.item(DiscoveryCategory::ComingSoon).unwrap();
    assert_eq!(popular_item.children, children(&popular));
    assert_eq!(upcoming_item.children, children(&upcoming));
    assert!(!popular_item.is_progress_bar_visible);
    assert!(!upcoming_item.is_progress_bar_visible);
}

#[tokio::test]
async fn test_later_emission_republishes_with_latest_of_others() {
    let harness = TestHarness::new();
    harness.controller.load_all();
    emit_all(&harness, 1);
    wait_until(|| harness.controller.snapshot().total_children() == 4).await;

    harness
        .observer(DiscoveryCategory::RecentlyReleased)
        .emit(games("Fresh", 3));
    wait_until(|| harness.controller.snapshot().total_children() == 6).await;

    let snapshot = harness.controller.snapshot();
    assert_eq!(
        snapshot
            .item(DiscoveryCategory::RecentlyReleased)
            .unwrap()
            .children,
        children(&games("Fresh", 3))
    );
    assert_eq!(
        snapshot.item(DiscoveryCategory::Popular).unwrap().children,
        children(&games_from("Popular", 100, 1))
    );
}

#[tokio::test]
async fn test_second_load_while_running_is_ignored() {
    let harness = TestHarness::new();

    harness.controller.load_all();
    harness.controller.load_all();

    assert_eq!(harness.observe_executions(), DiscoveryCategory::COUNT);
    assert!(harness.controller.is_loading_all());
}

#[tokio::test]
async fn test_failure_keeps_snapshot_and_releases_guard() {
    let mut harness = TestHarness::new();
    harness.controller.load_all();
    emit_all(&harness, 2);
    wait_until(|| harness.controller.snapshot().total_children() == 8).await;
    let before = harness.controller.snapshot();

    harness
        .observer(DiscoveryCategory::MostAnticipated)
        .fail(SourceError::network("connection reset"));
    wait_until(|| !harness.controller.is_loading_all()).await;

    assert_eq!(harness.controller.snapshot(), before);
    let entries = harness.logger.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].tag, "GamesDiscovery");
    assert_eq!(entries[0].message, "Failed to load games.");
    assert!(entries[0].error.contains("connection reset"));
    assert_eq!(entries[0].category, ErrorCategory::Network);
    assert!(entries[0].retryable);
    assert!(drain_events(&mut harness.events).is_empty());
}

#[tokio::test]
async fn test_failure_before_first_emission_publishes_nothing() {
    let harness = TestHarness::new();
    let mut snapshots = harness.controller.subscribe();
    harness.controller.load_all();

    harness
        .observer(DiscoveryCategory::Popular)
        .fail(SourceError::http(500, "boom"));
    wait_until(|| !harness.controller.is_loading_all()).await;

    assert!(!snapshots.has_changed().unwrap());
    assert_eq!(harness.logger.messages(), vec!["Failed to load games."]);
}

#[tokio::test]
async fn test_failure_stops_observing_other_categories() {
    let harness = TestHarness::new();
    harness.controller.load_all();

    harness
        .observer(DiscoveryCategory::ComingSoon)
        .fail(SourceError::storage("disk full"));
    wait_until(|| !harness.controller.is_loading_all()).await;

    for (_, observer) in harness.observers.iter() {
        assert!(observer.is_closed());
    }
}

#[tokio::test]
async fn test_load_can_restart_after_failure() {
    let harness = TestHarness::new();
    harness.controller.load_all();
    harness
        .observer(DiscoveryCategory::Popular)
        .fail(SourceError::network("offline"));
    wait_until(|| !harness.controller.is_loading_all()).await;

    harness.controller.load_all();
    emit_all(&harness, 1);

    wait_until(|| harness.controller.snapshot().total_children() == 4).await;
    assert_eq!(harness.observe_executions(), 2 * DiscoveryCategory::COUNT);
}

#[tokio::test]
async fn test_guard_released_when_every_category_completes() {
    let harness = TestHarness::new();
    harness.controller.load_all();
    emit_all(&harness, 1);

    for (_, observer) in harness.observers.iter() {
        observer.complete();
    }

    wait_until(|| !harness.controller.is_loading_all()).await;
    assert!(harness.logger.is_empty());
    assert_eq!(harness.controller.snapshot().total_children(), 4);
}
