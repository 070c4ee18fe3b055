pub mod prompts;
pub mod render;

pub use prompts::{prompt_category, prompt_food_name, prompt_yes_no, resolve_food, similar_foods};
pub use render::{display_calendar, display_catalog, display_day, render_calendar};
