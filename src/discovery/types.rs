//! Events emitted by the controller towards the presentation layer.

use serde::{Deserialize, Serialize};

use crate::models::GamesCategory;

/// Screen the user should be taken to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryRoute {
    /// Full list of a category's games
    Category(GamesCategory),
    /// Details of a single game
    Info { game_id: u64 },
}

/// One-shot UI command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryCommand {
    /// Show a transient message to the user
    ShowMessage(String),
}

/// Everything the controller sends over its event channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscoveryEvent {
    Command(DiscoveryCommand),
    Route(DiscoveryRoute),
}

impl From<DiscoveryCommand> for DiscoveryEvent {
    fn from(command: DiscoveryCommand) -> Self {
        DiscoveryEvent::Command(command)
    }
}

impl From<DiscoveryRoute> for DiscoveryEvent {
    fn from(route: DiscoveryRoute) -> Self {
        DiscoveryEvent::Route(route)
    }
}
