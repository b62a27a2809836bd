use crate::model::Recipe;

mod model;

pub use model::FilterState;

/// Selection value meaning "no constraint" for category, region and difficulty.
pub const ALL: &str = "All";

/// Filter recipes by free text and the three categorical selections.
///
/// The result keeps the relative order of `recipes`. An empty query matches
/// everything; otherwise the lowercased query must be a substring of the
/// recipe name, of one of its ingredients, or of its region. The query is
/// matched literally, surrounding whitespace included.
///
/// # Examples
///
/// ```
/// use recipe_book::{filter, Catalog};
///
/// let catalog = Catalog::builtin();
/// let desserts = filter(catalog.recipes(), "", "Dessert", "All", "All");
/// assert!(desserts.iter().all(|r| r.category == "Dessert"));
/// ```
pub fn filter<'a>(
    recipes: &'a [Recipe],
    query: &str,
    category: &str,
    region: &str,
    difficulty: &str,
) -> Vec<&'a Recipe> {
    let query = query.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            matches_text(recipe, &query)
                && matches_selection(&recipe.category, category)
                && matches_selection(&recipe.region, region)
                && matches_selection(recipe.difficulty.as_str(), difficulty)
        })
        .collect()
}

/// Same as [`filter`], reading the fields from a [`FilterState`].
pub fn filter_with<'a>(recipes: &'a [Recipe], state: &FilterState) -> Vec<&'a Recipe> {
    filter(
        recipes,
        &state.query,
        &state.category,
        &state.region,
        &state.difficulty,
    )
}

/// `query` must already be lowercase
fn matches_text(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    recipe.name.to_lowercase().contains(query)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(query))
        || recipe.region.to_lowercase().contains(query)
}

fn matches_selection(value: &str, selected: &str) -> bool {
    selected == ALL || value == selected
}
