//! Trait abstractions for dependency injection and testability.
//!
//! The controller only talks to its collaborators through these traits, so
//! production wiring, the demo binary and tests can each supply their own.
//!
//! # Traits
//!
//! - [`ObserveGamesUseCase`] - live per-category games stream
//! - [`RefreshAllGamesUseCase`] - single bulk refresh of every category
//! - [`GamesDataStore`] - upstream provider queried by the cache adapter
//! - [`GameChildMapper`] - domain game to display child
//! - [`ErrorMapper`] - failure to user-facing message
//! - [`Logger`] - error sink

pub mod data_store;
pub mod logger;
pub mod mappers;
pub mod use_cases;

pub use data_store::GamesDataStore;
pub use logger::Logger;
pub use mappers::{ErrorMapper, GameChildMapper};
pub use use_cases::{GamesStream, ObserveGamesUseCase, RefreshAllGamesUseCase};
