//! Summaries of a user's favorites for the profile and favorites screens.

use crate::catalog::Catalog;
use crate::model::FavoriteSet;
use std::collections::HashSet;

/// Counts over the favorite recipes that exist in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FavoriteStats {
    pub favorites: usize,
    /// Distinct categories among the favorites
    pub categories: usize,
    /// Distinct regions among the favorites
    pub regions: usize,
}

impl FavoriteStats {
    pub fn compute(catalog: &Catalog, favorites: &FavoriteSet) -> Self {
        let recipes = catalog.favorites(favorites);
        let categories: HashSet<&str> = recipes.iter().map(|r| r.category.as_str()).collect();
        let regions: HashSet<&str> = recipes.iter().map(|r| r.region.as_str()).collect();

        FavoriteStats {
            favorites: recipes.len(),
            categories: categories.len(),
            regions: regions.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// All achievements in display order, each marked locked or unlocked.
pub fn achievements(stats: &FavoriteStats) -> Vec<Achievement> {
    vec![
        Achievement {
            icon: "🏆",
            title: "Recipe Explorer",
            description: "Saved your first recipe",
            unlocked: stats.favorites > 0,
        },
        Achievement {
            icon: "❤️",
            title: "Recipe Lover",
            description: "Saved 5 recipes",
            unlocked: stats.favorites >= 5,
        },
        Achievement {
            icon: "👑",
            title: "Spice Master",
            description: "Saved 10 recipes",
            unlocked: stats.favorites >= 10,
        },
        Achievement {
            icon: "🌟",
            title: "Regional Expert",
            description: "Saved recipes from 3 regions",
            unlocked: stats.regions >= 3,
        },
    ]
}
