//! Tests for navigation events.

mod common;

use common::*;
use game_discovery::discovery::{DiscoveryEvent, DiscoveryRoute};
use game_discovery::error::DiscoveryError;
use game_discovery::models::{DiscoveryCategory, DiscoveryItemChild, GamesCategory};

#[tokio::test]
async fn test_more_button_routes_to_category() {
    let mut harness = TestHarness::new();

    for category in DiscoveryCategory::ALL {
        harness
            .controller
            .on_category_more_button_clicked(category.as_str())
            .unwrap();
    }

    let routes = drain_events(&mut harness.events);
    assert_eq!(
        routes,
        vec![
            DiscoveryEvent::Route(DiscoveryRoute::Category(GamesCategory::Popular)),
            DiscoveryEvent::Route(DiscoveryRoute::Category(GamesCategory::RecentlyReleased)),
            DiscoveryEvent::Route(DiscoveryRoute::Category(GamesCategory::ComingSoon)),
            DiscoveryEvent::Route(DiscoveryRoute::Category(GamesCategory::MostAnticipated)),
        ]
    );
}

#[tokio::test]
async fn test_unknown_category_emits_nothing() {
    let mut harness = TestHarness::new();

    let err = harness
        .controller
        .on_category_more_button_clicked("TOP_RATED")
        .unwrap_err();

    assert!(matches!(err, DiscoveryError::UnknownCategory { ref name } if name == "TOP_RATED"));
    assert!(drain_events(&mut harness.events).is_empty());
}

#[tokio::test]
async fn test_game_click_routes_to_info() {
    let mut harness = TestHarness::new();
    let child = DiscoveryItemChild::new(2077, "Cyberpunk 2077");

    harness.controller.on_category_game_clicked(&child);

    assert_eq!(
        drain_events(&mut harness.events),
        vec![DiscoveryEvent::Route(DiscoveryRoute::Info { game_id: 2077 })]
    );
}

#[tokio::test]
async fn test_navigation_leaves_state_alone() {
    let harness = TestHarness::new();
    let before = harness.controller.snapshot();

    harness
        .controller
        .on_category_more_button_clicked("POPULAR")
        .unwrap();
    harness
        .controller
        .on_category_game_clicked(&DiscoveryItemChild::new(1, "Doom"));

    assert_eq!(harness.controller.snapshot(), before);
    assert!(!harness.controller.is_loading_all());
    assert!(!harness.controller.is_refreshing_all());
}

#[tokio::test]
async fn test_no_navigation_after_dispose() {
    let mut harness = TestHarness::new();
    harness.controller.dispose();

    harness
        .controller
        .on_category_game_clicked(&DiscoveryItemChild::new(1, "Doom"));

    assert!(drain_events(&mut harness.events).is_empty());
}
