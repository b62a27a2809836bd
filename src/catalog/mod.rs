//! The compiled-in recipe catalog.
//!
//! The catalog is fixed when the library is built and never changes at
//! runtime. Screens read it through [`Catalog::builtin`]; tests and
//! alternative data sets can build their own with [`Catalog::new`].

use crate::model::{Difficulty, FavoriteSet, Recipe};
use crate::search::ALL;
use std::collections::HashSet;
use std::sync::OnceLock;
use thiserror::Error;

mod data;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(u32),
}

/// Read-only, ordered list of recipes with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two recipes share an id.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(CatalogError::DuplicateId(recipe.id));
            }
        }
        Ok(Catalog { recipes })
    }

    /// Returns the catalog that ships with the application.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| Catalog {
            recipes: data::RECIPES.iter().map(|r| r.to_recipe()).collect(),
        })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// The first `count` recipes, shown on the home screen.
    pub fn featured(&self, count: usize) -> &[Recipe] {
        &self.recipes[..count.min(self.recipes.len())]
    }

    /// Category filter options: `"All"` then each category in catalog order.
    pub fn categories(&self) -> Vec<String> {
        with_all(self.recipes.iter().map(|r| r.category.as_str()))
    }

    /// Region filter options: `"All"` then each region in catalog order.
    pub fn regions(&self) -> Vec<String> {
        with_all(self.recipes.iter().map(|r| r.region.as_str()))
    }

    /// Difficulty filter options, easiest first.
    pub fn difficulties(&self) -> Vec<String> {
        with_all(Difficulty::ALL.iter().map(|d| d.as_str()))
    }

    /// Catalog recipes whose ids are in `favorites`, in catalog order.
    ///
    /// Ids that do not name a catalog recipe are skipped.
    pub fn favorites<'a>(&'a self, favorites: &FavoriteSet) -> Vec<&'a Recipe> {
        self.recipes
            .iter()
            .filter(|r| favorites.contains(r.id))
            .collect()
    }
}

fn with_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for value in values {
        if !options.iter().any(|o| o == value) {
            options.push(value.to_string());
        }
    }
    options
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn recipe(
        id: u32,
        name: &str,
        region: &str,
        category: &str,
        difficulty: Difficulty,
        ingredients: &[&str],
    ) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            region: region.to_string(),
            category: category.to_string(),
            difficulty,
            cooking_time: "30 mins".to_string(),
            servings: 4,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: vec!["Cook".to_string()],
            image: "🍲".to_string(),
            tips: None,
        }
    }

    /// The two-recipe catalog used throughout the query engine tests.
    pub(crate) fn scenario_catalog() -> Catalog {
        Catalog::new(vec![
            recipe(
                1,
                "Butter Chicken",
                "Punjab",
                "Main Course",
                Difficulty::Easy,
                &["chicken", "butter", "tomato"],
            ),
            recipe(
                2,
                "Gulab Jamun",
                "North India",
                "Dessert",
                Difficulty::Medium,
                &["milk", "sugar"],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let builtin = Catalog::builtin();
        assert!(!builtin.is_empty());
        assert!(Catalog::new(builtin.recipes().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_recipes_are_complete() {
        for recipe in Catalog::builtin().recipes() {
            assert!(!recipe.name.is_empty(), "recipe {} has no name", recipe.id);
            assert!(!recipe.ingredients.is_empty(), "{} has no ingredients", recipe.name);
            assert!(!recipe.instructions.is_empty(), "{} has no steps", recipe.name);
            assert!(recipe.servings > 0);
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            recipe(4, "A", "Goa", "Dessert", Difficulty::Easy, &[]),
            recipe(4, "B", "Goa", "Dessert", Difficulty::Easy, &[]),
        ]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId(4));
    }

    #[test]
    fn test_get() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.get(2).unwrap().name, "Gulab Jamun");
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_featured() {
        let builtin = Catalog::builtin();
        let featured = builtin.featured(3);
        assert_eq!(featured.len(), 3);
        assert_eq!(featured, &builtin.recipes()[..3]);

        // Asking for more than exists returns everything
        assert_eq!(scenario_catalog().featured(10).len(), 2);
        assert!(Catalog::default().featured(3).is_empty());
    }

    #[test]
    fn test_filter_options() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.categories(), vec!["All", "Main Course", "Dessert"]);
        assert_eq!(catalog.regions(), vec!["All", "Punjab", "North India"]);
        assert_eq!(catalog.difficulties(), vec!["All", "Easy", "Medium", "Hard"]);
    }

    #[test]
    fn test_filter_options_are_distinct() {
        let regions = Catalog::builtin().regions();
        let unique: HashSet<_> = regions.iter().collect();
        assert_eq!(unique.len(), regions.len());
        assert_eq!(regions[0], "All");
    }

    #[test]
    fn test_favorites_in_catalog_order() {
        let catalog = scenario_catalog();
        let favorites: FavoriteSet = [2, 99, 1].into_iter().collect();
        let ids: Vec<u32> = catalog.favorites(&favorites).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
