use serde::{Deserialize, Serialize};

/// A game as delivered by the data sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u64,
    pub name: String,
    /// Cover art URL, if the upstream has one
    #[serde(default)]
    pub cover_url: Option<String>,
    /// First release date as unix seconds
    #[serde(default)]
    pub release_date: Option<i64>,
}

impl Game {
    /// Create a game with only an id and a name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cover_url: None,
            release_date: None,
        }
    }

    pub fn with_cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }

    pub fn with_release_date(mut self, timestamp: i64) -> Self {
        self.release_date = Some(timestamp);
        self
    }
}
