use serde::{Deserialize, Serialize};
use std::fmt;

/// How demanding a recipe is to cook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Returns the display word used in filters and the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog recipe.
///
/// Recipes are built into the application and never edited at runtime.
/// The serialized form uses camelCase keys (`cookingTime`), which is the
/// layout front-ends already consume.
///
/// # Examples
///
/// ```
/// use recipe_book::Catalog;
///
/// let catalog = Catalog::builtin();
/// let recipe = catalog.get(1).unwrap();
/// assert_eq!(recipe.name, "Butter Chicken");
/// assert!(recipe.share_message().contains("Ingredients:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub category: String,
    pub difficulty: Difficulty,
    /// Free-form duration such as "45 mins"
    pub cooking_time: String,
    pub servings: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Glyph shown in place of a photo
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

impl Recipe {
    /// Returns the text handed to the platform share sheet.
    pub fn share_message(&self) -> String {
        format!(
            "Check out this delicious {} recipe! 🍛\n\nIngredients:\n{}\n\nFrom: Authentic Indian Recipes App",
            self.name,
            self.ingredients.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            id: 7,
            name: "Masala Dosa".to_string(),
            region: "South India".to_string(),
            category: "Breakfast".to_string(),
            difficulty: Difficulty::Hard,
            cooking_time: "40 mins".to_string(),
            servings: 4,
            ingredients: vec!["rice".to_string(), "urad dal".to_string()],
            instructions: vec!["Soak overnight".to_string()],
            image: "🥞".to_string(),
            tips: None,
        }
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
    }

    #[test]
    fn test_share_message() {
        let message = sample().share_message();
        assert_eq!(
            message,
            "Check out this delicious Masala Dosa recipe! 🍛\n\nIngredients:\nrice\nurad dal\n\nFrom: Authentic Indian Recipes App"
        );
    }

    #[test]
    fn test_serialized_layout() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["cookingTime"], "40 mins");
        assert_eq!(json["difficulty"], "Hard");
        assert!(json.get("tips").is_none());

        let parsed: Recipe = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, sample());
    }
}
