//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`CachedGamesRepository`] - offline-first cache serving observe and refresh
//! - [`DemoGamesDataStore`] - canned upstream used by the demo binary
//! - [`DefaultGameChildMapper`] / [`DefaultErrorMapper`] - default mappers
//! - [`TracingLogger`] - [`Logger`](crate::traits::Logger) over `tracing`
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for every collaborator.

pub mod demo;
pub mod mappers;
pub mod memory;
pub mod mock;
pub mod tracing_logger;

pub use demo::DemoGamesDataStore;
pub use mappers::{DefaultErrorMapper, DefaultGameChildMapper};
pub use memory::CachedGamesRepository;
pub use mock::{MockGamesDataStore, MockObserveGames, MockRefreshAll, RecordingLogger};
pub use tracing_logger::TracingLogger;
