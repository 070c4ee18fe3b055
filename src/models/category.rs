use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

/// One of the four meal slots planned for each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Breakfast,
    Lunch,
    Supper,
    Fruit,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Supper,
        Category::Fruit,
    ];

    /// Factor applied to the day seed so each slot draws from its own sequence.
    pub fn seed_multiplier(self) -> i64 {
        match self {
            Category::Breakfast => 1,
            Category::Lunch => 2,
            Category::Supper => 3,
            Category::Fruit => 4,
        }
    }

    /// Lowercase key used on the command line and in exported files.
    pub fn key(self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Supper => "supper",
            Category::Fruit => "fruit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Supper => "Supper",
            Category::Fruit => "Fruits",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Category::Breakfast),
            "lunch" => Ok(Category::Lunch),
            "supper" => Ok(Category::Supper),
            "fruit" | "fruits" => Ok(Category::Fruit),
            _ => Err(PlannerError::UnknownCategory(s.to_string())),
        }
    }
}
