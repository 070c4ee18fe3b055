use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{Category, DayPlan, FoodCatalog, MonthPlan, Selection};
use crate::planner::calendar::days_in_month;
use crate::planner::constants::{SEED_MONTH_FACTOR, SEED_YEAR_FACTOR, SINE_SCALE};

/// Reproducible value in `[0, 1)` derived from `seed`.
///
/// Fractional part of `sin(seed) * 10000`. Not uniform and not secure, but
/// the same seed always yields the same value, with no stored state.
pub fn seeded_random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * SINE_SCALE;
    x - x.floor()
}

/// Base seed for a calendar day (`month0` is zero-based).
pub fn day_seed(year: i32, month0: u32, day: u32) -> i64 {
    i64::from(year) * SEED_YEAR_FACTOR + i64::from(month0) * SEED_MONTH_FACTOR + i64::from(day)
}

/// Index into a list of `len` entries drawn from `seed`, or `None` for an empty list.
pub fn pick_index(seed: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = (seeded_random(seed) * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

fn select(catalog: &FoodCatalog, category: Category, seed: i64) -> Selection {
    let foods = catalog.foods(category);
    match pick_index(seed * category.seed_multiplier(), foods.len()) {
        Some(index) => Selection::Food {
            index,
            name: foods[index].clone(),
        },
        None => Selection::Unavailable,
    }
}

/// Assign one food per category to every day of a month.
///
/// Pure: identical inputs (including list order) give identical plans.
/// Categories with no foods are marked [`Selection::Unavailable`].
pub fn generate_month_plan(year: i32, month0: u32, catalog: &FoodCatalog) -> Result<MonthPlan> {
    let last_day = days_in_month(year, month0)?;

    let days = (1..=last_day)
        .map(|day| {
            let seed = day_seed(year, month0, day);
            let plan = DayPlan {
                day,
                breakfast: select(catalog, Category::Breakfast, seed),
                lunch: select(catalog, Category::Lunch, seed),
                supper: select(catalog, Category::Supper, seed),
                fruit: select(catalog, Category::Fruit, seed),
            };
            (day, plan)
        })
        .collect::<BTreeMap<_, _>>();

    Ok(MonthPlan::new(year, month0, days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_seeded_random_known_values() {
        assert_eq!(seeded_random(0), 0.0);
        // sin(1) * 10000 = 8414.709848078965
        assert_float_absolute_eq!(seeded_random(1), 0.709848078965, 1e-6);
    }

    #[test]
    fn test_seeded_random_in_unit_range() {
        for seed in (-5_000..5_000).map(|s| s * 7919) {
            let r = seeded_random(seed);
            assert!((0.0..1.0).contains(&r), "seed {} gave {}", seed, r);
        }
    }

    #[test]
    fn test_day_seed_layout() {
        assert_eq!(day_seed(2024, 0, 1), 20_240_001);
        assert_eq!(day_seed(2023, 11, 31), 20_231_131);
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!(pick_index(42, 0), None);
        assert_eq!(pick_index(42, 1), Some(0));
        for seed in 0..1_000 {
            let index = pick_index(seed, 7).unwrap();
            assert!(index < 7);
        }
    }

    #[test]
    fn test_empty_category_is_unavailable() {
        let catalog = FoodCatalog::from_lists(["Uji"], ["Pilau"], ["Mukimo"], Vec::<&str>::new());
        let plan = generate_month_plan(2024, 5, &catalog).unwrap();

        assert_eq!(plan.len(), 30);
        assert!(plan.days().all(|d| d.fruit == Selection::Unavailable));
        assert!(plan.days().all(|d| d.meal(Category::Breakfast).unwrap() == "Uji"));
        assert_eq!(plan.empty_categories(), vec![Category::Fruit]);
    }
}
