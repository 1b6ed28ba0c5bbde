//! Mock implementations for testing.
//!
//! # Mocks
//!
//! - [`MockObserveGames`] - hand-driven per-category stream
//! - [`MockRefreshAll`] - refresh with configurable outcome and hold/release
//! - [`MockGamesDataStore`] - per-category upstream fixtures
//! - [`RecordingLogger`] - captures logged failures

mod data_store;
mod logger;
mod observe;
mod refresh;

pub use data_store::MockGamesDataStore;
pub use logger::{LogEntry, RecordingLogger};
pub use observe::MockObserveGames;
pub use refresh::MockRefreshAll;
