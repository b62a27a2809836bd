use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// Set of favorite recipe ids.
///
/// Membership is unique, but ids keep the order they were added in so the
/// favorites list reads the way the user built it. Serializes as a plain
/// JSON array of numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<u32>,
    // Mirrors `ids` for constant-time membership
    index: HashSet<u32>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the id was not already present.
    pub fn insert(&mut self, id: u32) -> bool {
        if !self.index.insert(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns true if the id was present.
    pub fn remove(&mut self, id: u32) -> bool {
        if !self.index.remove(&id) {
            return false;
        }
        self.ids.retain(|&existing| existing != id);
        true
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains(&id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u32> for FavoriteSet {
    /// Keeps the first occurrence of each id.
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl Serialize for FavoriteSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ids.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FavoriteSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<u32>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}
