pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{Category, DayPlan, FoodCatalog, MonthPlan, Selection};
pub use planner::generate_month_plan;
