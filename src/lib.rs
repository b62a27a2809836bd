pub mod catalog;
pub mod config;
pub mod favorites;
pub mod ffi;
pub mod logging;
pub mod model;
pub mod search;
pub mod stats;

pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError};
pub use favorites::{FavoritesStore, FileStore, KeyValueStore, MemoryStore, StorageError};
pub use model::*;
pub use search::{filter, filter_with, FilterState};
pub use stats::{achievements, Achievement, FavoriteStats};

uniffi::setup_scaffolding!();
