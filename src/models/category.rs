use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DiscoveryError;

/// A discovery grouping shown on the discovery screen.
///
/// The declaration order is the display order: [`DiscoveryCategory::ALL`]
/// drives both the fan-out in the controller and the item order of every
/// published snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscoveryCategory {
    Popular,
    RecentlyReleased,
    ComingSoon,
    MostAnticipated,
}

impl DiscoveryCategory {
    /// Every category, in display order.
    pub const ALL: [DiscoveryCategory; 4] = [
        DiscoveryCategory::Popular,
        DiscoveryCategory::RecentlyReleased,
        DiscoveryCategory::ComingSoon,
        DiscoveryCategory::MostAnticipated,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Every category, in display order.
    pub fn all() -> &'static [DiscoveryCategory] {
        &Self::ALL
    }

    /// Position of this category in display order.
    pub fn index(self) -> usize {
        match self {
            DiscoveryCategory::Popular => 0,
            DiscoveryCategory::RecentlyReleased => 1,
            DiscoveryCategory::ComingSoon => 2,
            DiscoveryCategory::MostAnticipated => 3,
        }
    }

    /// Canonical name, as carried by click events from the view layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryCategory::Popular => "POPULAR",
            DiscoveryCategory::RecentlyReleased => "RECENTLY_RELEASED",
            DiscoveryCategory::ComingSoon => "COMING_SOON",
            DiscoveryCategory::MostAnticipated => "MOST_ANTICIPATED",
        }
    }

    /// Section title displayed above the category's games.
    pub fn title(&self) -> &'static str {
        match self {
            DiscoveryCategory::Popular => "Popular",
            DiscoveryCategory::RecentlyReleased => "Recently Released",
            DiscoveryCategory::ComingSoon => "Coming Soon",
            DiscoveryCategory::MostAnticipated => "Most Anticipated",
        }
    }

    /// Navigation target for the category's "more" button.
    pub fn to_games_category(self) -> GamesCategory {
        match self {
            DiscoveryCategory::Popular => GamesCategory::Popular,
            DiscoveryCategory::RecentlyReleased => GamesCategory::RecentlyReleased,
            DiscoveryCategory::ComingSoon => GamesCategory::ComingSoon,
            DiscoveryCategory::MostAnticipated => GamesCategory::MostAnticipated,
        }
    }
}

impl fmt::Display for DiscoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscoveryCategory {
    type Err = DiscoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiscoveryCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DiscoveryError::UnknownCategory { name: s.to_string() })
    }
}

/// Category of the full games list screen reached from discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamesCategory {
    Popular,
    RecentlyReleased,
    ComingSoon,
    MostAnticipated,
}

/// Fixed-size map with one slot per [`DiscoveryCategory`].
///
/// Lookups cannot miss, so per-category wiring is checked once when the map
/// is built rather than on every access.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMap<T> {
    slots: [T; DiscoveryCategory::COUNT],
}

impl<T> CategoryMap<T> {
    /// Build a map by calling `f` for every category in display order.
    pub fn from_fn(mut f: impl FnMut(DiscoveryCategory) -> T) -> Self {
        Self {
            slots: DiscoveryCategory::ALL.map(&mut f),
        }
    }

    /// Build a map from per-category options, failing on the first gap.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(DiscoveryCategory) -> Result<T, E>,
    ) -> Result<Self, E> {
        let [popular, recently_released, coming_soon, most_anticipated] = DiscoveryCategory::ALL;
        Ok(Self {
            slots: [
                f(popular)?,
                f(recently_released)?,
                f(coming_soon)?,
                f(most_anticipated)?,
            ],
        })
    }

    pub fn get(&self, category: DiscoveryCategory) -> &T {
        &self.slots[category.index()]
    }

    /// Iterate `(category, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (DiscoveryCategory, &T)> {
        DiscoveryCategory::ALL.into_iter().zip(self.slots.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_display_order() {
        assert_eq!(
            DiscoveryCategory::all(),
            &[
                DiscoveryCategory::Popular,
                DiscoveryCategory::RecentlyReleased,
                DiscoveryCategory::ComingSoon,
                DiscoveryCategory::MostAnticipated,
            ]
        );
    }

    #[test]
    fn test_index_matches_position() {
        for (position, category) in DiscoveryCategory::all().iter().enumerate() {
            assert_eq!(category.index(), position);
        }
    }

    #[test]
    fn test_parse_round_trips_canonical_names() {
        for category in DiscoveryCategory::ALL {
            let parsed: DiscoveryCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_unknown_name_fails() {
        let err = "TRENDING".parse::<DiscoveryCategory>().unwrap_err();
        assert!(matches!(err, DiscoveryError::UnknownCategory { ref name } if name == "TRENDING"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("popular".parse::<DiscoveryCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&DiscoveryCategory::ComingSoon).unwrap();
        assert_eq!(json, "\"COMING_SOON\"");
    }

    #[test]
    fn test_to_games_category() {
        assert_eq!(
            DiscoveryCategory::MostAnticipated.to_games_category(),
            GamesCategory::MostAnticipated
        );
        assert_eq!(
            DiscoveryCategory::Popular.to_games_category(),
            GamesCategory::Popular
        );
    }

    #[test]
    fn test_category_map_lookup() {
        let map = CategoryMap::from_fn(|category| category.title().len());
        assert_eq!(*map.get(DiscoveryCategory::Popular), "Popular".len());
        assert_eq!(map.iter().count(), DiscoveryCategory::COUNT);
    }

    #[test]
    fn test_category_map_try_from_fn_stops_at_gap() {
        let result: Result<CategoryMap<u8>, DiscoveryCategory> = CategoryMap::try_from_fn(|c| {
            if c == DiscoveryCategory::ComingSoon {
                Err(c)
            } else {
                Ok(1)
            }
        });
        assert_eq!(result.unwrap_err(), DiscoveryCategory::ComingSoon);
    }

    #[test]
    fn test_category_map_try_from_fn_keeps_display_order() {
        let mut calls = Vec::new();
        let map: CategoryMap<usize> = CategoryMap::try_from_fn(|category| {
            calls.push(category);
            Ok::<_, ()>(category.index())
        })
        .unwrap();

        assert_eq!(calls, DiscoveryCategory::ALL.to_vec());
        for category in DiscoveryCategory::ALL {
            assert_eq!(*map.get(category), category.index());
        }
    }
}
