//! UniFFI bindings for the mobile front-ends (iOS, Android).
//!
//! Screens talk to a single [`RecipeBook`] object that owns the favorites
//! store and the current filter selection. Values cross the boundary as
//! plain records.

use crate::catalog::Catalog;
use crate::config::{Config, ConfigError};
use crate::favorites::{FavoritesStore, FileStore, StorageError};
use crate::logging;
use crate::model::Recipe;
use crate::search::{filter, filter_with, FilterState};
use crate::stats::{achievements, Achievement, FavoriteStats};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeBookError {
    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

impl From<ConfigError> for RecipeBookError {
    fn from(e: ConfigError) -> Self {
        RecipeBookError::ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<StorageError> for RecipeBookError {
    fn from(e: StorageError) -> Self {
        RecipeBookError::StorageError {
            message: e.to_string(),
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub category: String,
    /// "Easy", "Medium" or "Hard"
    pub difficulty: String,
    pub cooking_time: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Glyph shown in place of a photo
    pub image: String,
    pub tips: Option<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            id: r.id,
            name: r.name.clone(),
            region: r.region.clone(),
            category: r.category.clone(),
            difficulty: r.difficulty.to_string(),
            cooking_time: r.cooking_time.clone(),
            servings: r.servings,
            ingredients: r.ingredients.clone(),
            instructions: r.instructions.clone(),
            image: r.image.clone(),
            tips: r.tips.clone(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiFavoriteStats {
    pub favorites: u32,
    pub categories: u32,
    pub regions: u32,
}

impl From<FavoriteStats> for FfiFavoriteStats {
    fn from(s: FavoriteStats) -> Self {
        FfiFavoriteStats {
            favorites: s.favorites as u32,
            categories: s.categories as u32,
            regions: s.regions as u32,
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAchievement {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub unlocked: bool,
}

impl From<Achievement> for FfiAchievement {
    fn from(a: Achievement) -> Self {
        FfiAchievement {
            icon: a.icon.to_string(),
            title: a.title.to_string(),
            description: a.description.to_string(),
            unlocked: a.unlocked,
        }
    }
}

fn to_ffi<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<FfiRecipe> {
    recipes.into_iter().map(FfiRecipe::from).collect()
}

/// A poisoned lock still holds consistent data: every mutation is a single
/// call on the guarded value
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Application state shared by every screen.
///
/// UniFFI hands objects out as `Arc<Self>`, so state sits behind mutexes even
/// though the UI calls in from one thread at a time.
#[derive(uniffi::Object)]
pub struct RecipeBook {
    catalog: &'static Catalog,
    featured_count: usize,
    favorites: Mutex<FavoritesStore<FileStore>>,
    filters: Mutex<FilterState>,
}

#[uniffi::export]
impl RecipeBook {
    /// Opens the recipe book and loads saved favorites.
    ///
    /// # Arguments
    /// * `config_yaml` - Optional YAML configuration document
    /// * `data_dir` - Optional storage directory, overriding the configuration
    ///
    /// # Returns
    /// The recipe book, or an error if the configuration is invalid or no
    /// storage directory can be determined.
    #[uniffi::constructor]
    pub fn new(
        config_yaml: Option<String>,
        data_dir: Option<String>,
    ) -> Result<Arc<Self>, RecipeBookError> {
        let mut config = match config_yaml {
            Some(yaml) => Config::from_yaml_str(&yaml)?,
            None => Config::default(),
        };
        if let Some(dir) = data_dir {
            config.storage.data_dir = Some(dir.into());
        }
        logging::init(&config.logging);

        // A key the file store would refuse must fail here, not on every write
        let key = config.storage.favorites_key.clone();
        FileStore::validate_key(&key).map_err(|e| RecipeBookError::ConfigError {
            message: e.to_string(),
        })?;

        let data_dir = config.data_dir()?;
        info!(%data_dir, "Opening recipe book");

        let mut favorites = FavoritesStore::with_key(FileStore::new(data_dir), key);
        if config.storage.background_writes {
            favorites = favorites.in_background()?;
        }
        favorites.load();

        Ok(Arc::new(RecipeBook {
            catalog: Catalog::builtin(),
            featured_count: config.home.featured_count,
            favorites: Mutex::new(favorites),
            filters: Mutex::new(FilterState::default()),
        }))
    }

    // Catalog

    /// Returns the recipe with the given id.
    pub fn recipe(&self, id: u32) -> Option<FfiRecipe> {
        self.catalog.get(id).map(FfiRecipe::from)
    }

    /// Returns the recipes featured on the home screen.
    pub fn featured_recipes(&self) -> Vec<FfiRecipe> {
        to_ffi(self.catalog.featured(self.featured_count))
    }

    /// Returns the category filter options, starting with "All".
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }

    /// Returns the region filter options, starting with "All".
    pub fn regions(&self) -> Vec<String> {
        self.catalog.regions()
    }

    /// Returns the difficulty filter options, starting with "All".
    pub fn difficulties(&self) -> Vec<String> {
        self.catalog.difficulties()
    }

    /// Returns the text to hand to the platform share sheet.
    pub fn share_message(&self, id: u32) -> Option<String> {
        self.catalog.get(id).map(Recipe::share_message)
    }

    // Filters

    pub fn set_search_query(&self, query: String) {
        lock(&self.filters).set_query(query);
    }

    pub fn set_selected_category(&self, category: String) {
        lock(&self.filters).set_category(category);
    }

    pub fn set_selected_region(&self, region: String) {
        lock(&self.filters).set_region(region);
    }

    pub fn set_selected_difficulty(&self, difficulty: String) {
        lock(&self.filters).set_difficulty(difficulty);
    }

    /// Clears the search text and sets every selection back to "All".
    pub fn reset_filters(&self) {
        lock(&self.filters).reset();
    }

    /// Returns true if any filter narrows the catalog.
    pub fn filters_active(&self) -> bool {
        lock(&self.filters).is_active()
    }

    /// Returns the recipes matching the current filters, in catalog order.
    pub fn visible_recipes(&self) -> Vec<FfiRecipe> {
        let filters = lock(&self.filters);
        to_ffi(filter_with(self.catalog.recipes(), &filters))
    }

    // Favorites

    pub fn add_favorite(&self, id: u32) {
        lock(&self.favorites).add(id);
    }

    pub fn remove_favorite(&self, id: u32) {
        lock(&self.favorites).remove(id);
    }

    /// Flips the favorite state of a recipe and returns the new state.
    pub fn toggle_favorite(&self, id: u32) -> bool {
        lock(&self.favorites).toggle(id)
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        lock(&self.favorites).contains(id)
    }

    /// Returns the favorite ids in the order they were added.
    pub fn favorite_ids(&self) -> Vec<u32> {
        lock(&self.favorites).ids().to_vec()
    }

    /// Returns the favorite recipes, in catalog order.
    pub fn favorite_recipes(&self) -> Vec<FfiRecipe> {
        let favorites = lock(&self.favorites);
        to_ffi(self.catalog.favorites(favorites.favorites()))
    }

    pub fn favorite_stats(&self) -> FfiFavoriteStats {
        self.stats().into()
    }

    /// Returns every achievement with its unlocked state.
    pub fn achievements(&self) -> Vec<FfiAchievement> {
        achievements(&self.stats())
            .into_iter()
            .map(FfiAchievement::from)
            .collect()
    }

    /// Blocks until pending favorite writes reach storage.
    pub fn flush(&self) {
        lock(&self.favorites).save();
    }
}

impl RecipeBook {
    fn stats(&self) -> FavoriteStats {
        let favorites = lock(&self.favorites);
        FavoriteStats::compute(self.catalog, favorites.favorites())
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Filters the built-in catalog.
///
/// # Arguments
/// * `query` - Free text matched against names, ingredients and regions
/// * `category`, `region`, `difficulty` - Exact values, or "All"
///
/// # Returns
/// Matching recipes in catalog order.
#[uniffi::export]
pub fn filter_recipes(
    query: String,
    category: String,
    region: String,
    difficulty: String,
) -> Vec<FfiRecipe> {
    let catalog = Catalog::builtin();
    to_ffi(filter(
        catalog.recipes(),
        &query,
        &category,
        &region,
        &difficulty,
    ))
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
