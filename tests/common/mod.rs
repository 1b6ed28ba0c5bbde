//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let harness = TestHarness::new();
//! harness.controller.load_all();
//! harness.observer(DiscoveryCategory::Popular).emit(games("Popular", 2));
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::future::Future;
use std::time::Duration;

use game_discovery::discovery::DiscoveryEvent;
use game_discovery::models::{DiscoveryCategory, DiscoveryItemChild, Game};
use game_discovery::view_state::DiscoverySnapshot;
use tokio::sync::mpsc;

/// Upper bound for any single wait in a test.
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(2);

/// `count` games named `"{prefix} {n}"`, ids starting at `first_id`.
pub fn games_from(prefix: &str, first_id: u64, count: u64) -> Vec<Game> {
    (first_id..first_id + count)
        .map(|id| Game::new(id, format!("{prefix} {id}")))
        .collect()
}

/// `count` games named `"{prefix} {n}"`, ids starting at 1.
pub fn games(prefix: &str, count: u64) -> Vec<Game> {
    games_from(prefix, 1, count)
}

/// Children the default mapper produces for `games`.
pub fn children(games: &[Game]) -> Vec<DiscoveryItemChild> {
    games
        .iter()
        .map(|game| DiscoveryItemChild::new(game.id, game.name.clone()))
        .collect()
}

/// Poll `condition` until it holds or [`WAIT_TIMEOUT`] elapses.
pub async fn wait_until<F>(mut condition: F)
where
    F: FnMut() -> bool,
{
    let result = tokio::time::timeout(WAIT_TIMEOUT, async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    })
    .await;
    assert!(result.is_ok(), "condition not met within {:?}", WAIT_TIMEOUT);
}

/// Await `future`, failing the test after [`WAIT_TIMEOUT`].
pub async fn within<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(WAIT_TIMEOUT, future)
        .await
        .expect("timed out")
}

/// Let spawned tasks run for a moment.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(30)).await;
}

/// Whether `snapshot` lists every category in display order.
pub fn has_registry_order(snapshot: &DiscoverySnapshot) -> bool {
    snapshot.categories() == DiscoveryCategory::ALL.to_vec()
}

/// Drain every event received so far.
pub fn drain_events(events: &mut mpsc::UnboundedReceiver<DiscoveryEvent>) -> Vec<DiscoveryEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}
