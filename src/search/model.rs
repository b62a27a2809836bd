use super::ALL;

/// The search text plus the three categorical selections that decide which
/// recipes are visible.
///
/// Each selection holds either a concrete value or the `"All"` sentinel.
/// Filter state is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: String,
    pub region: String,
    pub difficulty: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL.to_string(),
            region: ALL.to_string(),
            difficulty: ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
    }

    pub fn set_difficulty(&mut self, difficulty: impl Into<String>) {
        self.difficulty = difficulty.into();
    }

    /// Restores every field to its "no constraint" default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when any field narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.category != ALL
            || self.region != ALL
            || self.difficulty != ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::new();
        assert_eq!(state.query, "");
        assert_eq!(state.category, "All");
        assert_eq!(state.region, "All");
        assert_eq!(state.difficulty, "All");
        assert!(!state.is_active());
    }

    #[test]
    fn test_any_field_activates() {
        let mut state = FilterState::new();
        state.set_query(" ");
        assert!(state.is_active());

        let mut state = FilterState::new();
        state.set_region("Kerala");
        assert!(state.is_active());

        let mut state = FilterState::new();
        state.set_difficulty("Hard");
        assert!(state.is_active());
    }

    #[test]
    fn test_reset() {
        let mut state = FilterState::new();
        state.set_query("dal");
        state.set_category("Main Course");
        state.set_region("Rajasthan");
        state.set_difficulty("Hard");

        state.reset();
        assert_eq!(state, FilterState::default());
    }
}
