//! Mock upstream data store for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::SourceError;
use crate::models::{DiscoveryCategory, Game, Pagination};
use crate::traits::GamesDataStore;

/// Mock [`GamesDataStore`] answering from per-category fixtures.
///
/// Categories without a fixture return an empty page.
#[derive(Debug, Clone, Default)]
pub struct MockGamesDataStore {
    responses: Arc<Mutex<HashMap<DiscoveryCategory, Result<Vec<Game>, SourceError>>>>,
    requests: Arc<Mutex<Vec<(DiscoveryCategory, Pagination)>>>,
}

impl MockGamesDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_games(&self, category: DiscoveryCategory, games: Vec<Game>) {
        self.responses.lock().unwrap().insert(category, Ok(games));
    }

    pub fn fail(&self, category: DiscoveryCategory, error: SourceError) {
        self.responses.lock().unwrap().insert(category, Err(error));
    }

    /// Every query made so far, in call order.
    pub fn requests(&self) -> Vec<(DiscoveryCategory, Pagination)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn respond(
        &self,
        category: DiscoveryCategory,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError> {
        self.requests.lock().unwrap().push((category, pagination));
        self.responses
            .lock()
            .unwrap()
            .get(&category)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait]
impl GamesDataStore for MockGamesDataStore {
    async fn get_popular_games(&self, pagination: Pagination) -> Result<Vec<Game>, SourceError> {
        self.respond(DiscoveryCategory::Popular, pagination)
    }

    async fn get_recently_released_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError> {
        self.respond(DiscoveryCategory::RecentlyReleased, pagination)
    }

    async fn get_coming_soon_games(&self, pagination: Pagination) -> Result<Vec<Game>, SourceError> {
        self.respond(DiscoveryCategory::ComingSoon, pagination)
    }

    async fn get_most_anticipated_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError> {
        self.respond(DiscoveryCategory::MostAnticipated, pagination)
    }
}
