use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{Category, FoodCatalog};

/// Minimum similarity for a food to be offered as a "did you mean".
const FUZZY_THRESHOLD: f64 = 0.7;

/// Most suggestions offered at once.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for the category of a new food.
pub fn prompt_category() -> Result<Category> {
    let options: Vec<&str> = Category::ALL.iter().map(|c| c.title()).collect();

    let selection = Select::new()
        .with_prompt("Category")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Category::ALL[selection])
}

/// Prompt for a food name. May return a blank string, which callers ignore.
pub fn prompt_food_name() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Food name")
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Foods in `category` resembling `input`, best match first.
pub fn similar_foods<'a>(catalog: &'a FoodCatalog, category: Category, input: &str) -> Vec<&'a str> {
    let needle = input.trim().to_lowercase();

    let mut candidates: Vec<(&str, f64)> = catalog
        .foods(category)
        .iter()
        .map(|f| (f.as_str(), jaro_winkler(&f.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut names: Vec<&str> = candidates.into_iter().map(|(name, _)| name).collect();
    names.dedup();
    names.truncate(MAX_SUGGESTIONS);
    names
}

/// Resolve `input` to a food actually listed in `category`.
///
/// Exact matches are returned directly; otherwise the user is asked to pick
/// among close matches. `None` means nothing was chosen.
pub fn resolve_food(catalog: &FoodCatalog, category: Category, input: &str) -> Result<Option<String>> {
    let input = input.trim();

    if catalog.contains(category, input) {
        return Ok(Some(input.to_string()));
    }

    let candidates = similar_foods(catalog, category, input);

    match candidates.as_slice() {
        [] => {
            println!("No {} food matching '{}'", category, input);
            Ok(None)
        }
        [only] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", only), true)?;
            Ok(confirm.then(|| only.to_string()))
        }
        _ => {
            let mut options: Vec<&str> = candidates.clone();
            options.push("None of these");

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(candidates.get(selection).map(|s| s.to_string()))
        }
    }
}
