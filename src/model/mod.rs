//! Core data types shared by the catalog, the query engine and the
//! favorites store.

mod favorite_set;
mod recipe;

pub use favorite_set::FavoriteSet;
pub use recipe::{Difficulty, Recipe};
