//! Upstream games provider abstraction.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::{DiscoveryCategory, Game, Pagination};

/// Authoritative upstream source of games, one query per category.
///
/// Implementations own their transport and its bounding (timeouts, retries);
/// callers only see success or a [`SourceError`].
#[async_trait]
pub trait GamesDataStore: Send + Sync {
    async fn get_popular_games(&self, pagination: Pagination) -> Result<Vec<Game>, SourceError>;

    async fn get_recently_released_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError>;

    async fn get_coming_soon_games(&self, pagination: Pagination)
        -> Result<Vec<Game>, SourceError>;

    async fn get_most_anticipated_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError>;

    /// Dispatch to the query matching `category`.
    async fn get_games(
        &self,
        category: DiscoveryCategory,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError> {
        match category {
            DiscoveryCategory::Popular => self.get_popular_games(pagination).await,
            DiscoveryCategory::RecentlyReleased => {
                self.get_recently_released_games(pagination).await
            }
            DiscoveryCategory::ComingSoon => self.get_coming_soon_games(pagination).await,
            DiscoveryCategory::MostAnticipated => {
                self.get_most_anticipated_games(pagination).await
            }
        }
    }
}
