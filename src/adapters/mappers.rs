//! Default mapping collaborators.

use crate::error::SourceError;
use crate::models::{DiscoveryItemChild, Game};
use crate::traits::{ErrorMapper, GameChildMapper};

/// Maps a game to its id, name and cover.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGameChildMapper;

impl GameChildMapper for DefaultGameChildMapper {
    fn map_to_child(&self, game: &Game) -> DiscoveryItemChild {
        DiscoveryItemChild {
            id: game.id,
            title: game.name.clone(),
            cover_url: game.cover_url.clone(),
        }
    }
}

/// Maps failures through [`SourceError::user_message`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorMapper;

impl ErrorMapper for DefaultErrorMapper {
    fn map_to_message(&self, error: &SourceError) -> String {
        error.user_message()
    }
}
