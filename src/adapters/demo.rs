//! Canned upstream used by the demo binary.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::SourceError;
use crate::models::{DiscoveryCategory, Game, Pagination};
use crate::traits::GamesDataStore;

const CATALOGUE: &[(DiscoveryCategory, u64, &str, (i32, u32, u32))] = &[
    (DiscoveryCategory::Popular, 1020, "The Witcher 3: Wild Hunt", (2015, 5, 19)),
    (DiscoveryCategory::Popular, 1942, "Half-Life 2", (2004, 11, 16)),
    (DiscoveryCategory::Popular, 7346, "Hades", (2020, 9, 17)),
    (DiscoveryCategory::Popular, 11133, "Stardew Valley", (2016, 2, 26)),
    (DiscoveryCategory::RecentlyReleased, 119133, "Elden Ring", (2022, 2, 25)),
    (DiscoveryCategory::RecentlyReleased, 136625, "Balatro", (2024, 2, 20)),
    (DiscoveryCategory::RecentlyReleased, 250616, "Helldivers 2", (2024, 2, 8)),
    (DiscoveryCategory::ComingSoon, 325591, "Hollow Knight: Silksong", (2026, 12, 1)),
    (DiscoveryCategory::ComingSoon, 338067, "The Blood of Dawnwalker", (2026, 11, 5)),
    (DiscoveryCategory::MostAnticipated, 222095, "The Elder Scrolls VI", (2028, 1, 1)),
    (DiscoveryCategory::MostAnticipated, 231577, "Grand Theft Auto VI", (2026, 11, 19)),
    (DiscoveryCategory::MostAnticipated, 313920, "Fable", (2027, 1, 1)),
];

/// Fixed catalogue served with an artificial delay.
#[derive(Debug)]
pub struct DemoGamesDataStore {
    latency: Duration,
    failing: bool,
}

impl DemoGamesDataStore {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failing: false,
        }
    }

    /// Make every subsequent query fail with a server error.
    pub fn with_failure(mut self, failing: bool) -> Self {
        self.failing = failing;
        self
    }

    /// Full catalogue of a category, before pagination.
    pub fn catalogue(category: DiscoveryCategory) -> Vec<Game> {
        CATALOGUE
            .iter()
            .filter(|(c, ..)| *c == category)
            .map(|&(_, id, name, (year, month, day))| {
                let game = Game::new(id, name)
                    .with_cover_url(format!("https://images.example.com/covers/{id}.jpg"));
                match release_timestamp(year, month, day) {
                    Some(timestamp) => game.with_release_date(timestamp),
                    None => game,
                }
            })
            .collect()
    }

    async fn query(
        &self,
        category: DiscoveryCategory,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError> {
        tokio::time::sleep(self.latency).await;
        if self.failing {
            return Err(SourceError::http(503, format!("{category} query rejected")));
        }
        Ok(pagination.apply(&Self::catalogue(category)))
    }
}

fn release_timestamp(year: i32, month: u32, day: u32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp())
}

#[async_trait]
impl GamesDataStore for DemoGamesDataStore {
    async fn get_popular_games(&self, pagination: Pagination) -> Result<Vec<Game>, SourceError> {
        self.query(DiscoveryCategory::Popular, pagination).await
    }

    async fn get_recently_released_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError> {
        self.query(DiscoveryCategory::RecentlyReleased, pagination).await
    }

    async fn get_coming_soon_games(&self, pagination: Pagination) -> Result<Vec<Game>, SourceError> {
        self.query(DiscoveryCategory::ComingSoon, pagination).await
    }

    async fn get_most_anticipated_games(
        &self,
        pagination: Pagination,
    ) -> Result<Vec<Game>, SourceError> {
        self.query(DiscoveryCategory::MostAnticipated, pagination).await
    }
}
