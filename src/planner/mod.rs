pub mod calendar;
pub mod constants;
pub mod generator;

pub use calendar::{days_in_month, first_weekday, month_label};
pub use constants::*;
pub use generator::{day_seed, generate_month_plan, pick_index, seeded_random};
