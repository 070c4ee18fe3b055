mod catalog;
mod category;
mod plan;

pub use catalog::FoodCatalog;
pub use category::Category;
pub use plan::{DayPlan, MonthPlan, Selection};
