//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```ignore
//! use game_discovery::prelude::*;
//! ```
//!
//! This will import:
//! - The controller and its wiring (DiscoveryController, DiscoveryUseCases)
//! - Events (DiscoveryEvent, DiscoveryCommand, DiscoveryRoute)
//! - Model and snapshot types
//! - Collaborator traits
//! - Error types

// Controller
pub use crate::discovery::{
    DiscoveryCommand, DiscoveryController, DiscoveryEvent, DiscoveryRoute, DiscoveryUseCases,
};

// Model types
pub use crate::models::{
    DiscoveryCategory, DiscoveryItem, DiscoveryItemChild, Game, GamesCategory,
    ObserveGamesParams, Pagination, RefreshGamesParams,
};
pub use crate::view_state::DiscoverySnapshot;

// Traits
pub use crate::traits::{
    ErrorMapper, GameChildMapper, GamesDataStore, GamesStream, Logger, ObserveGamesUseCase,
    RefreshAllGamesUseCase,
};

// Configuration
pub use crate::startup::DiscoveryConfig;

// Errors
pub use crate::error::{DiscoveryError, DiscoveryResult, SourceError};
