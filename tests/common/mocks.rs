//! Mock wiring for test fixtures.
//!
//! Re-exports the mocks from `game_discovery::adapters::mock` and assembles
//! them into a ready-to-drive controller.

pub use game_discovery::adapters::mock::{
    LogEntry, MockGamesDataStore, MockObserveGames, MockRefreshAll, RecordingLogger,
};

use std::sync::Arc;

use game_discovery::discovery::{DiscoveryController, DiscoveryEvent, DiscoveryUseCases};
use game_discovery::models::{CategoryMap, DiscoveryCategory};
use game_discovery::startup::DiscoveryConfig;
use tokio::sync::mpsc;

/// A controller wired to one mock per collaborator.
pub struct TestHarness {
    pub controller: DiscoveryController,
    pub events: mpsc::UnboundedReceiver<DiscoveryEvent>,
    pub observers: CategoryMap<MockObserveGames>,
    pub refresh: MockRefreshAll,
    pub logger: RecordingLogger,
}

impl TestHarness {
    /// Harness with default configuration. Must run inside a tokio runtime.
    pub fn new() -> Self {
        Self::with_config(DiscoveryConfig::default())
    }

    pub fn with_config(config: DiscoveryConfig) -> Self {
        Self::with_mocks(config, MockRefreshAll::new())
    }

    pub fn with_mocks(config: DiscoveryConfig, refresh: MockRefreshAll) -> Self {
        let observers = CategoryMap::from_fn(|_| MockObserveGames::new());
        let logger = RecordingLogger::new();

        let use_cases = DiscoveryUseCases::builder()
            .observe_all(|category| Arc::new(observers.get(category).clone()))
            .refresh_all(Arc::new(refresh.clone()))
            .build()
            .unwrap();
        let (controller, events) = DiscoveryController::builder(use_cases)
            .logger(Arc::new(logger.clone()))
            .config(config)
            .build()
            .unwrap();

        Self {
            controller,
            events,
            observers,
            refresh,
            logger,
        }
    }

    pub fn observer(&self, category: DiscoveryCategory) -> &MockObserveGames {
        self.observers.get(category)
    }

    /// Total `execute` calls across every category.
    pub fn observe_executions(&self) -> usize {
        self.observers.iter().map(|(_, mock)| mock.execute_count()).sum()
    }
}
