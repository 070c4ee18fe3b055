use serde::{Deserialize, Serialize};

use crate::models::Category;

const DEFAULT_BREAKFAST: [&str; 6] = [
    "Chai & Mandazi",
    "Porridge",
    "Bread & Eggs",
    "Pancakes",
    "Uji",
    "Chapati & Beans",
];

const DEFAULT_LUNCH: [&str; 7] = [
    "Rice & Beans",
    "Ugali & Sukuma",
    "Pilau",
    "Githeri",
    "Rice & Beef Stew",
    "Ugali & Fish",
    "Chapati & Chicken",
];

const DEFAULT_SUPPER: [&str; 7] = [
    "Ugali & Sukuma",
    "Rice & Vegetables",
    "Chapati & Stew",
    "Ugali & Beans",
    "Rice & Chicken",
    "Mukimo",
    "Ugali & Beef",
];

const DEFAULT_FRUIT: [&str; 7] = [
    "Banana",
    "Mango",
    "Watermelon",
    "Pineapple",
    "Papaya",
    "Orange",
    "Avocado",
];

/// Per-category ordered food lists.
///
/// A catalog is an immutable snapshot: edits return a new catalog and leave
/// the receiver untouched. Duplicate labels are allowed; they only make that
/// food more likely to be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCatalog {
    #[serde(default)]
    breakfast: Vec<String>,

    #[serde(default)]
    lunch: Vec<String>,

    #[serde(default)]
    supper: Vec<String>,

    #[serde(rename = "fruits", alias = "fruit", default)]
    fruit: Vec<String>,
}

impl FoodCatalog {
    /// Catalog with every category empty.
    pub fn empty() -> Self {
        Self {
            breakfast: Vec::new(),
            lunch: Vec::new(),
            supper: Vec::new(),
            fruit: Vec::new(),
        }
    }

    /// Build a catalog from explicit lists.
    pub fn from_lists<S: Into<String>>(
        breakfast: impl IntoIterator<Item = S>,
        lunch: impl IntoIterator<Item = S>,
        supper: impl IntoIterator<Item = S>,
        fruit: impl IntoIterator<Item = S>,
    ) -> Self {
        fn collect<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
            items.into_iter().map(Into::into).collect()
        }

        Self {
            breakfast: collect(breakfast),
            lunch: collect(lunch),
            supper: collect(supper),
            fruit: collect(fruit),
        }
    }

    /// Foods listed under a category, in selection order.
    pub fn foods(&self, category: Category) -> &[String] {
        match category {
            Category::Breakfast => &self.breakfast,
            Category::Lunch => &self.lunch,
            Category::Supper => &self.supper,
            Category::Fruit => &self.fruit,
        }
    }

    fn foods_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Breakfast => &mut self.breakfast,
            Category::Lunch => &mut self.lunch,
            Category::Supper => &mut self.supper,
            Category::Fruit => &mut self.fruit,
        }
    }

    /// Snapshot with `label` appended to `category`.
    ///
    /// The label is trimmed first; blank input yields an unchanged copy.
    pub fn with_food(&self, category: Category, label: &str) -> Self {
        let mut next = self.clone();
        let label = label.trim();
        if !label.is_empty() {
            next.foods_mut(category).push(label.to_string());
        }
        next
    }

    /// Snapshot with the first entry equal to `label` removed from `category`.
    ///
    /// Removing an absent label yields an unchanged copy.
    pub fn without_food(&self, category: Category, label: &str) -> Self {
        let mut next = self.clone();
        let foods = next.foods_mut(category);
        if let Some(pos) = foods.iter().position(|f| f == label) {
            foods.remove(pos);
        }
        next
    }

    pub fn contains(&self, category: Category, label: &str) -> bool {
        self.foods(category).iter().any(|f| f == label)
    }

    /// Categories that currently have nothing to choose from.
    pub fn empty_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.foods(*c).is_empty())
            .collect()
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.foods(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::from_lists(DEFAULT_BREAKFAST, DEFAULT_LUNCH, DEFAULT_SUPPER, DEFAULT_FRUIT)
    }
}
