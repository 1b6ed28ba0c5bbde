//! Domain and display models for the discovery screen.
//!
//! - [`DiscoveryCategory`] - the fixed, ordered set of discovery sections
//! - [`Game`] - a game as produced by the data sources
//! - [`DiscoveryItem`] / [`DiscoveryItemChild`] - render-ready section data
//! - [`ObserveGamesParams`] / [`RefreshGamesParams`] - operation parameters

mod category;
mod game;
mod item;
mod params;

pub use category::{CategoryMap, DiscoveryCategory, GamesCategory};
pub use game::Game;
pub use item::{DiscoveryItem, DiscoveryItemChild};
pub use params::{ObserveGamesParams, Pagination, RefreshGamesParams, DEFAULT_PAGE_SIZE};
