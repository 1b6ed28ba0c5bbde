use serde::{Deserialize, Serialize};

use super::DiscoveryCategory;

/// A game as shown inside a discovery section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryItemChild {
    /// Game id, used to open the game's info screen
    pub id: u64,
    pub title: String,
    pub cover_url: Option<String>,
}

impl DiscoveryItemChild {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cover_url: None,
        }
    }

    pub fn with_cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = Some(cover_url.into());
        self
    }
}

/// One discovery section: a category, its games, and its progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryItem {
    pub category: DiscoveryCategory,
    pub title: String,
    pub children: Vec<DiscoveryItemChild>,
    pub is_progress_bar_visible: bool,
}

impl DiscoveryItem {
    /// Empty placeholder shown before a category has produced any games.
    pub fn default_for(category: DiscoveryCategory) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            children: Vec::new(),
            is_progress_bar_visible: false,
        }
    }

    /// Copy of this item with its games replaced.
    pub fn with_children(&self, children: Vec<DiscoveryItemChild>) -> Self {
        Self {
            children,
            ..self.clone()
        }
    }

    /// Copy of this item with the progress bar set to `visible`.
    pub fn with_progress_bar(&self, visible: bool) -> Self {
        Self {
            is_progress_bar_visible: visible,
            ..self.clone()
        }
    }
}
