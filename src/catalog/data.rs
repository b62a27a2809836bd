use crate::model::{Difficulty, Recipe};

pub(super) struct RecipeData {
    id: u32,
    name: &'static str,
    region: &'static str,
    category: &'static str,
    difficulty: Difficulty,
    cooking_time: &'static str,
    servings: u32,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    image: &'static str,
    tips: Option<&'static str>,
}

impl RecipeData {
    pub(super) fn to_recipe(&self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name.to_string(),
            region: self.region.to_string(),
            category: self.category.to_string(),
            difficulty: self.difficulty,
            cooking_time: self.cooking_time.to_string(),
            servings: self.servings,
            ingredients: self.ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
            image: self.image.to_string(),
            tips: self.tips.map(str::to_string),
        }
    }
}

pub(super) static RECIPES: &[RecipeData] = &[
    RecipeData {
        id: 1,
        name: "Butter Chicken",
        region: "Punjab",
        category: "Main Course",
        difficulty: Difficulty::Medium,
        cooking_time: "45 mins",
        servings: 4,
        ingredients: &[
            "500g chicken thighs",
            "1 cup yogurt",
            "3 tbsp butter",
            "1 cup tomato puree",
            "1/2 cup fresh cream",
            "1 tbsp ginger garlic paste",
            "1 tsp garam masala",
            "1 tsp kashmiri red chili powder",
            "1 tsp kasuri methi",
        ],
        instructions: &[
            "Marinate chicken in yogurt, ginger garlic paste and chili powder for 30 minutes.",
            "Grill or pan-fry the chicken until charred at the edges.",
            "Melt butter, add tomato puree and simmer for 10 minutes.",
            "Stir in garam masala, cream and the cooked chicken.",
            "Finish with crushed kasuri methi and a knob of butter.",
        ],
        image: "🍛",
        tips: Some("Marinate overnight for the most tender chicken."),
    },
    RecipeData {
        id: 2,
        name: "Gulab Jamun",
        region: "North India",
        category: "Dessert",
        difficulty: Difficulty::Medium,
        cooking_time: "40 mins",
        servings: 6,
        ingredients: &[
            "1 cup milk powder",
            "1/4 cup all-purpose flour",
            "2 tbsp ghee",
            "1/4 cup milk",
            "2 cups sugar",
            "4 green cardamom pods",
            "1 tsp rose water",
        ],
        instructions: &[
            "Boil sugar with water and cardamom to make a light syrup, then add rose water.",
            "Mix milk powder, flour and ghee, then add milk to form a soft dough.",
            "Roll into smooth, crack-free balls.",
            "Fry on low heat until deep golden brown.",
            "Soak the warm dumplings in syrup for at least 1 hour.",
        ],
        image: "🍡",
        tips: Some("Keep the oil on low heat so the centres cook through."),
    },
    RecipeData {
        id: 3,
        name: "Masala Dosa",
        region: "South India",
        category: "Breakfast",
        difficulty: Difficulty::Hard,
        cooking_time: "30 mins",
        servings: 4,
        ingredients: &[
            "2 cups dosa batter",
            "3 potatoes, boiled",
            "1 onion, sliced",
            "1 tsp mustard seeds",
            "8 curry leaves",
            "1/2 tsp turmeric",
            "2 green chilies",
            "oil as needed",
        ],
        instructions: &[
            "Temper mustard seeds, curry leaves and green chilies in oil.",
            "Add onion and turmeric, then mash in the potatoes to make the filling.",
            "Spread a ladle of batter thin on a hot griddle.",
            "Drizzle oil around the edges and cook until crisp.",
            "Fill with the potato masala and fold.",
        ],
        image: "🥞",
        tips: Some("Ferment the batter overnight in a warm spot."),
    },
    RecipeData {
        id: 4,
        name: "Samosa",
        region: "North India",
        category: "Appetizer",
        difficulty: Difficulty::Medium,
        cooking_time: "50 mins",
        servings: 8,
        ingredients: &[
            "2 cups all-purpose flour",
            "4 tbsp oil",
            "4 potatoes, boiled",
            "1/2 cup green peas",
            "1 tsp cumin seeds",
            "1 tsp coriander powder",
            "1 tsp amchur",
            "salt to taste",
        ],
        instructions: &[
            "Rub oil into flour and knead a stiff dough with water. Rest 30 minutes.",
            "Saute cumin, add peas, potatoes and spices to make the filling.",
            "Roll the dough into ovals, cut in half and shape into cones.",
            "Fill, seal the edges and fry on low heat until golden.",
        ],
        image: "🥟",
        tips: None,
    },
    RecipeData {
        id: 5,
        name: "Palak Paneer",
        region: "Punjab",
        category: "Main Course",
        difficulty: Difficulty::Easy,
        cooking_time: "30 mins",
        servings: 4,
        ingredients: &[
            "250g paneer",
            "2 bunches spinach",
            "1 onion",
            "2 tomatoes",
            "1 tbsp ginger garlic paste",
            "1 tsp cumin seeds",
            "2 tbsp cream",
        ],
        instructions: &[
            "Blanch spinach and blend into a smooth puree.",
            "Saute cumin, onion and ginger garlic paste until golden.",
            "Add tomatoes and cook until soft.",
            "Stir in the spinach puree and simmer for 5 minutes.",
            "Add paneer cubes and cream.",
        ],
        image: "🥬",
        tips: Some("Plunge the blanched spinach into ice water to keep it green."),
    },
    RecipeData {
        id: 6,
        name: "Hyderabadi Biryani",
        region: "Hyderabad",
        category: "Main Course",
        difficulty: Difficulty::Hard,
        cooking_time: "90 mins",
        servings: 6,
        ingredients: &[
            "2 cups basmati rice",
            "750g mutton",
            "1 cup yogurt",
            "2 onions, fried",
            "1 pinch saffron",
            "1/4 cup mint leaves",
            "2 tbsp ghee",
            "1 tbsp biryani masala",
        ],
        instructions: &[
            "Marinate mutton with yogurt, fried onions, mint and biryani masala for 2 hours.",
            "Parboil the rice until 70% cooked.",
            "Layer the marinated meat and rice in a heavy pot.",
            "Top with saffron milk and ghee, seal the lid with dough.",
            "Cook on dum over low heat for 45 minutes.",
        ],
        image: "🍚",
        tips: Some("Do not open the pot during dum cooking."),
    },
    RecipeData {
        id: 7,
        name: "Rasgulla",
        region: "West Bengal",
        category: "Dessert",
        difficulty: Difficulty::Hard,
        cooking_time: "60 mins",
        servings: 6,
        ingredients: &[
            "1 litre full cream milk",
            "2 tbsp lemon juice",
            "1 cup sugar",
            "4 cups water",
        ],
        instructions: &[
            "Curdle boiling milk with lemon juice and strain the chenna.",
            "Knead the chenna until smooth and roll into balls.",
            "Boil sugar and water into a thin syrup.",
            "Cook the balls covered in the boiling syrup for 15 minutes.",
        ],
        image: "⚪",
        tips: None,
    },
    RecipeData {
        id: 8,
        name: "Dhokla",
        region: "Gujarat",
        category: "Breakfast",
        difficulty: Difficulty::Easy,
        cooking_time: "25 mins",
        servings: 4,
        ingredients: &[
            "1 cup besan",
            "1/2 cup yogurt",
            "1 tsp eno fruit salt",
            "1 tsp mustard seeds",
            "1 tbsp sugar",
            "curry leaves",
        ],
        instructions: &[
            "Whisk besan, yogurt, sugar and water into a smooth batter.",
            "Fold in eno and pour into a greased tin.",
            "Steam for 15 minutes.",
            "Pour a mustard seed and curry leaf tempering over the top.",
        ],
        image: "🟨",
        tips: Some("Add the fruit salt just before steaming."),
    },
    RecipeData {
        id: 9,
        name: "Pav Bhaji",
        region: "Maharashtra",
        category: "Main Course",
        difficulty: Difficulty::Easy,
        cooking_time: "35 mins",
        servings: 4,
        ingredients: &[
            "8 pav buns",
            "3 potatoes, boiled",
            "1 cup cauliflower",
            "1/2 cup green peas",
            "2 tomatoes",
            "2 tbsp pav bhaji masala",
            "4 tbsp butter",
        ],
        instructions: &[
            "Boil and mash the vegetables together.",
            "Cook tomatoes in butter with pav bhaji masala.",
            "Add the mashed vegetables and simmer, mashing as it cooks.",
            "Toast the buttered pav and serve alongside.",
        ],
        image: "🍞",
        tips: None,
    },
    RecipeData {
        id: 10,
        name: "Kerala Fish Curry",
        region: "Kerala",
        category: "Main Course",
        difficulty: Difficulty::Medium,
        cooking_time: "40 mins",
        servings: 4,
        ingredients: &[
            "500g kingfish",
            "1 cup coconut milk",
            "3 pieces kudampuli",
            "1 tbsp kashmiri red chili powder",
            "1 tsp fenugreek seeds",
            "curry leaves",
            "2 tbsp coconut oil",
        ],
        instructions: &[
            "Soak kudampuli in warm water.",
            "Splutter fenugreek and curry leaves in coconut oil.",
            "Add chili powder and a splash of water to make a paste.",
            "Add fish and kudampuli and simmer for 10 minutes.",
            "Stir in coconut milk and warm through without boiling.",
        ],
        image: "🐟",
        tips: Some("The curry tastes better the next day."),
    },
    RecipeData {
        id: 11,
        name: "Paneer Tikka",
        region: "Punjab",
        category: "Appetizer",
        difficulty: Difficulty::Easy,
        cooking_time: "30 mins",
        servings: 4,
        ingredients: &[
            "250g paneer",
            "1/2 cup hung curd",
            "1 capsicum",
            "1 onion",
            "1 tsp tandoori masala",
            "1 tbsp lemon juice",
        ],
        instructions: &[
            "Mix hung curd, tandoori masala and lemon juice.",
            "Coat paneer and vegetables and marinate for 20 minutes.",
            "Thread onto skewers.",
            "Grill until charred at the edges.",
        ],
        image: "🍢",
        tips: None,
    },
    RecipeData {
        id: 12,
        name: "Dal Baati",
        region: "Rajasthan",
        category: "Main Course",
        difficulty: Difficulty::Hard,
        cooking_time: "75 mins",
        servings: 4,
        ingredients: &[
            "2 cups whole wheat flour",
            "1/2 cup ghee",
            "1 cup mixed dal",
            "1 tsp cumin seeds",
            "1 pinch hing",
            "2 green chilies",
        ],
        instructions: &[
            "Knead flour with ghee and water into a firm dough.",
            "Shape into balls and bake until cracked and golden.",
            "Pressure cook the dal and temper with cumin, hing and chilies.",
            "Dip the baatis in ghee and serve with the dal.",
        ],
        image: "🫓",
        tips: Some("Crack the baatis open and pour ghee inside before serving."),
    },
];
