use std::collections::BTreeMap;

use crate::error::{PlannerError, Result};
use crate::models::Category;

/// Outcome of drawing one category for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A food drawn from the category list at `index`.
    Food { index: usize, name: String },

    /// The category list was empty, so nothing could be drawn.
    Unavailable,
}

impl Selection {
    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::Food { name, .. } => Some(name),
            Selection::Unavailable => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Food { index, .. } => Some(*index),
            Selection::Unavailable => None,
        }
    }
}

/// Meals assigned to a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPlan {
    pub day: u32,
    pub breakfast: Selection,
    pub lunch: Selection,
    pub supper: Selection,
    pub fruit: Selection,
}

impl DayPlan {
    pub fn selection(&self, category: Category) -> &Selection {
        match category {
            Category::Breakfast => &self.breakfast,
            Category::Lunch => &self.lunch,
            Category::Supper => &self.supper,
            Category::Fruit => &self.fruit,
        }
    }

    /// Name of the food planned for `category`.
    ///
    /// Fails with [`PlannerError::EmptyCategory`] when the category had no
    /// foods to draw from; callers decide whether to show a placeholder.
    pub fn meal(&self, category: Category) -> Result<&str> {
        self.selection(category)
            .name()
            .ok_or(PlannerError::EmptyCategory(category))
    }
}

/// Every day of one month, keyed by day number starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPlan {
    pub year: i32,

    /// Zero-based month (0 = January).
    pub month0: u32,

    days: BTreeMap<u32, DayPlan>,
}

impl MonthPlan {
    pub(crate) fn new(year: i32, month0: u32, days: BTreeMap<u32, DayPlan>) -> Self {
        Self { year, month0, days }
    }

    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        self.days.get(&day)
    }

    /// Day plans in calendar order.
    pub fn days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Categories left unplanned because their list was empty.
    pub fn empty_categories(&self) -> Vec<Category> {
        let Some(first) = self.days.values().next() else {
            return Vec::new();
        };
        Category::ALL
            .into_iter()
            .filter(|c| matches!(first.selection(*c), Selection::Unavailable))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(index: usize, name: &str) -> Selection {
        Selection::Food {
            index,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_meal_reports_empty_category() {
        let plan = DayPlan {
            day: 3,
            breakfast: food(0, "Uji"),
            lunch: food(1, "Pilau"),
            supper: food(0, "Mukimo"),
            fruit: Selection::Unavailable,
        };

        assert_eq!(plan.meal(Category::Lunch).unwrap(), "Pilau");
        assert!(matches!(
            plan.meal(Category::Fruit),
            Err(PlannerError::EmptyCategory(Category::Fruit))
        ));
    }

    #[test]
    fn test_month_plan_lookup_by_day() {
        let mut days = BTreeMap::new();
        for day in 1..=3 {
            days.insert(
                day,
                DayPlan {
                    day,
                    breakfast: food(0, "Uji"),
                    lunch: Selection::Unavailable,
                    supper: food(0, "Mukimo"),
                    fruit: food(0, "Mango"),
                },
            );
        }
        let plan = MonthPlan::new(2024, 1, days);

        assert_eq!(plan.len(), 3);
        assert!(plan.day(4).is_none());
        assert_eq!(plan.day(2).map(|d| d.day), Some(2));
        assert_eq!(plan.empty_categories(), vec![Category::Lunch]);
    }
}
