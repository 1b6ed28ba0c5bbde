//! Render-ready discovery state and the pure transitions between states.
//!
//! A [`DiscoverySnapshot`] always holds exactly one [`DiscoveryItem`] per
//! [`DiscoveryCategory`], in category order. Every transition returns a new
//! snapshot with the same length and order, touching a single dimension
//! (games or progress bar) and leaving everything else as it was.

use std::sync::Arc;

use crate::models::{DiscoveryCategory, DiscoveryItem, DiscoveryItemChild};

/// Immutable, cheaply clonable view of every discovery section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverySnapshot {
    items: Arc<[DiscoveryItem]>,
}

impl DiscoverySnapshot {
    /// One empty, idle section per category.
    pub fn initial() -> Self {
        Self::from_items(
            DiscoveryCategory::all()
                .iter()
                .copied()
                .map(DiscoveryItem::default_for)
                .collect(),
        )
    }

    fn from_items(items: Vec<DiscoveryItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn items(&self) -> &[DiscoveryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Section for `category`.
    pub fn item(&self, category: DiscoveryCategory) -> Option<&DiscoveryItem> {
        self.items.iter().find(|item| item.category == category)
    }

    /// Categories in the order they are displayed.
    pub fn categories(&self) -> Vec<DiscoveryCategory> {
        self.items.iter().map(|item| item.category).collect()
    }

    /// Replace each section's games with the entry at the same position.
    ///
    /// Sections without a matching entry keep their games; surplus entries
    /// are ignored so the section count never changes.
    pub fn with_children(&self, children: Vec<Vec<DiscoveryItemChild>>) -> Self {
        let mut children = children.into_iter();
        Self::from_items(
            self.items
                .iter()
                .map(|item| match children.next() {
                    Some(games) => item.with_children(games),
                    None => item.clone(),
                })
                .collect(),
        )
    }

    /// Show the progress bar on every section.
    pub fn with_progress_visible(&self) -> Self {
        self.with_progress_bar(true)
    }

    /// Hide the progress bar on every section.
    pub fn with_progress_hidden(&self) -> Self {
        self.with_progress_bar(false)
    }

    fn with_progress_bar(&self, visible: bool) -> Self {
        Self::from_items(
            self.items
                .iter()
                .map(|item| item.with_progress_bar(visible))
                .collect(),
        )
    }

    /// True if any section currently shows its progress bar.
    pub fn is_any_progress_visible(&self) -> bool {
        self.items.iter().any(|item| item.is_progress_bar_visible)
    }

    /// Total number of games across every section.
    pub fn total_children(&self) -> usize {
        self.items.iter().map(|item| item.children.len()).sum()
    }
}

impl Default for DiscoverySnapshot {
    fn default() -> Self {
        Self::initial()
    }
}
