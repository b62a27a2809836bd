//! Favorite recipes, mirrored to durable storage.
//!
//! [`FavoritesStore`] owns the in-memory [`FavoriteSet`], which is the source
//! of truth for the session. Every mutation hands a snapshot to the store's
//! [`PersistHook`]; storage failures are logged and never undo a change.

use crate::model::FavoriteSet;
use std::sync::Arc;
use tracing::{error, info};

mod hook;
mod storage;

pub use hook::{BackgroundWriter, PersistHook, WriteThrough};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Storage key the favorites blob lives under.
pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesStore<S> {
    storage: Arc<S>,
    key: String,
    favorites: FavoriteSet,
    hook: Box<dyn PersistHook>,
}

impl<S: KeyValueStore + 'static> FavoritesStore<S> {
    /// Creates an empty store that writes through to `storage` after each change.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, FAVORITES_KEY)
    }

    /// Like [`FavoritesStore::new`] with a custom storage key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let storage = Arc::new(storage);
        let key = key.into();
        let hook = Box::new(WriteThrough::new(Arc::clone(&storage), key.clone()));
        Self {
            storage,
            key,
            favorites: FavoriteSet::new(),
            hook,
        }
    }

    /// Moves writes onto a background thread.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::IoError` if the writer thread cannot be started.
    pub fn in_background(self) -> Result<Self, StorageError> {
        let writer = BackgroundWriter::spawn(Arc::clone(&self.storage), self.key.clone())?;
        Ok(self.with_hook(writer))
    }

    /// Replaces the change hook.
    pub fn with_hook(mut self, hook: impl PersistHook + 'static) -> Self {
        // Let the old hook finish before it is dropped
        self.hook.flush();
        self.hook = Box::new(hook);
        self
    }
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Replaces the in-memory set with the persisted one.
    ///
    /// A missing blob leaves the set empty. Unreadable or malformed data is
    /// logged and also leaves the set empty.
    pub fn load(&mut self) {
        self.hook.flush();
        self.favorites = match self.storage.get(&self.key) {
            Ok(Some(json)) => match serde_json::from_str::<FavoriteSet>(&json) {
                Ok(favorites) => {
                    info!(count = favorites.len(), "Loaded favorites");
                    favorites
                }
                Err(e) => {
                    error!("Error loading favorites: {}", e);
                    FavoriteSet::new()
                }
            },
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                error!("Error loading favorites: {}", e);
                FavoriteSet::new()
            }
        };
    }

    /// Writes the full set to storage, waiting for the write to finish.
    pub fn save(&mut self) {
        self.hook.schedule(&self.favorites);
        self.hook.flush();
    }

    pub fn add(&mut self, id: u32) {
        self.favorites.insert(id);
        self.changed();
    }

    pub fn remove(&mut self, id: u32) {
        self.favorites.remove(id);
        self.changed();
    }

    /// Removes `id` if present, adds it otherwise. Returns the new membership.
    pub fn toggle(&mut self, id: u32) -> bool {
        let now_favorite = if self.favorites.contains(id) {
            self.favorites.remove(id);
            false
        } else {
            self.favorites.insert(id);
            true
        };
        self.changed();
        now_favorite
    }

    pub fn contains(&self, id: u32) -> bool {
        self.favorites.contains(id)
    }

    /// Favorite ids in the order they were added.
    pub fn ids(&self) -> &[u32] {
        self.favorites.ids()
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    fn changed(&mut self) {
        self.hook.schedule(&self.favorites);
    }
}
