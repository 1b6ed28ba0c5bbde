//! Navigation out of the discovery screen.

use tracing::{debug, warn};

use super::{DiscoveryController, DiscoveryRoute};
use crate::error::DiscoveryResult;
use crate::models::{DiscoveryCategory, DiscoveryItemChild};

/// Route for a category's "more" button, from the category's canonical name.
pub fn route_for_category(name: &str) -> DiscoveryResult<DiscoveryRoute> {
    let category: DiscoveryCategory = name.parse()?;
    Ok(DiscoveryRoute::Category(category.to_games_category()))
}

/// Route for a game tapped inside a category.
pub fn route_for_game(child: &DiscoveryItemChild) -> DiscoveryRoute {
    DiscoveryRoute::Info { game_id: child.id }
}

impl DiscoveryController {
    /// Navigate to the full list of the named category.
    ///
    /// An unknown name emits nothing and is returned as an error.
    pub fn on_category_more_button_clicked(&self, category: &str) -> DiscoveryResult<()> {
        let route = route_for_category(category).inspect_err(|err| {
            warn!(category, error = %err, "Ignoring more-button click");
        })?;
        debug!(?route, "Navigating to category");
        self.core.emit(route);
        Ok(())
    }

    /// Navigate to the details of the tapped game.
    pub fn on_category_game_clicked(&self, child: &DiscoveryItemChild) {
        let route = route_for_game(child);
        debug!(?route, "Navigating to game");
        self.core.emit(route);
    }
}
