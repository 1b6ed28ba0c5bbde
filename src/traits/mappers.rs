//! Pure mapping collaborators.

use crate::error::SourceError;
use crate::models::{DiscoveryItemChild, Game};

/// Turns a domain game into the record shown inside a discovery section.
pub trait GameChildMapper: Send + Sync {
    fn map_to_child(&self, game: &Game) -> DiscoveryItemChild;

    /// Map a whole page, preserving order.
    fn map_to_children(&self, games: &[Game]) -> Vec<DiscoveryItemChild> {
        games.iter().map(|game| self.map_to_child(game)).collect()
    }
}

/// Turns a data-source failure into text suitable for a user notification.
pub trait ErrorMapper: Send + Sync {
    fn map_to_message(&self, error: &SourceError) -> String;
}
