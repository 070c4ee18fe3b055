use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::models::{Category, DayPlan, FoodCatalog, MonthPlan, Selection};
use crate::planner::constants::WEEKDAY_HEADERS;
use crate::planner::{first_weekday, month_label};

/// Width of one calendar cell in characters.
const CELL_WIDTH: usize = 16;

/// Shown in place of a meal whose category has no foods.
const UNAVAILABLE: &str = "(none)";

fn short_name(category: Category) -> &'static str {
    match category {
        Category::Breakfast => "B",
        Category::Lunch => "L",
        Category::Supper => "S",
        Category::Fruit => "F",
    }
}

/// Cut `text` to at most `width` characters, marking the cut with `~`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('~');
    out
}

fn selection_text(selection: &Selection) -> &str {
    selection.name().unwrap_or(UNAVAILABLE)
}

fn is_today(plan: &MonthPlan, day: &DayPlan, today: Option<NaiveDate>) -> bool {
    today.is_some_and(|t| t.year() == plan.year && t.month0() == plan.month0 && t.day() == day.day)
}

/// Month grid starting on Sunday, one row of cells per week.
///
/// Each cell shows the day number (starred for `today`) and one line per
/// category.
pub fn render_calendar(plan: &MonthPlan, today: Option<NaiveDate>) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("=== {} | Meal Planner ===\n\n", month_label(plan.year, plan.month0)?));

    let header: String = WEEKDAY_HEADERS
        .iter()
        .map(|h| format!("{:<width$}", h, width = CELL_WIDTH))
        .collect();
    out.push_str(header.trim_end());
    out.push('\n');

    let leading = first_weekday(plan.year, plan.month0)? as usize;
    let mut cells: Vec<Option<&DayPlan>> = vec![None; leading];
    cells.extend(plan.days().map(Some));

    for week in cells.chunks(7) {
        let mut line = String::new();
        for cell in week {
            let text = match cell {
                Some(day) if is_today(plan, day, today) => format!("*{} today", day.day),
                Some(day) => day.day.to_string(),
                None => String::new(),
            };
            line.push_str(&format!("{:<width$}", text, width = CELL_WIDTH));
        }
        out.push_str(line.trim_end());
        out.push('\n');

        for category in Category::ALL {
            let mut line = String::new();
            for cell in week {
                let text = match cell {
                    Some(day) => {
                        let label = format!(
                            "{}:{}",
                            short_name(category),
                            selection_text(day.selection(category))
                        );
                        truncate(&label, CELL_WIDTH - 1)
                    }
                    None => String::new(),
                };
                line.push_str(&format!("{:<width$}", text, width = CELL_WIDTH));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    Ok(out)
}

/// Print the month grid.
pub fn display_calendar(plan: &MonthPlan, today: Option<NaiveDate>) -> Result<()> {
    print!("{}", render_calendar(plan, today)?);
    Ok(())
}

/// Print the meals planned for one day.
pub fn display_day(day: &DayPlan, date: NaiveDate) {
    println!();
    println!("=== Today: {} ===", date.format("%-d %B %Y"));
    println!();

    for category in Category::ALL {
        match day.meal(category) {
            Ok(name) => println!("  {:<10} {}", category.title(), name),
            Err(e) => println!("  {:<10} {} ({})", category.title(), UNAVAILABLE, e),
        }
    }

    println!();
}

/// Print every category of the catalog.
pub fn display_catalog(catalog: &FoodCatalog) {
    println!();
    println!("=== Available Foods ({} items) ===", catalog.len());

    for category in Category::ALL {
        let foods = catalog.foods(category);
        println!();
        if foods.is_empty() {
            println!("{}: (none)", category.title());
            continue;
        }

        println!("{} ({}):", category.title(), foods.len());
        for food in foods {
            println!("  - {}", food);
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::generate_month_plan;

    fn single_choice_plan() -> MonthPlan {
        let catalog = FoodCatalog::from_lists(["Uji"], ["Pilau"], ["Mukimo"], ["Mango"]);
        // February 2026 starts on a Sunday and has exactly four weeks
        generate_month_plan(2026, 1, &catalog).unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Pilau", 10), "Pilau");
        assert_eq!(truncate("Rice & Beef Stew", 8), "Rice & ~");
    }

    #[test]
    fn test_calendar_layout() {
        let text = render_calendar(&single_choice_plan(), None).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "=== February 2026 | Meal Planner ===");
        assert!(lines[2].starts_with("Sun"));
        assert!(lines[2].ends_with("Sat"));
        // first week row starts at Sunday the 1st
        assert!(lines[3].starts_with("1 "));
        assert!(lines[4].starts_with("B:Uji"));
        // header + 4 weeks of (day row + 4 meal rows + blank)
        assert_eq!(lines.len(), 3 + 4 * 6);
    }

    #[test]
    fn test_calendar_marks_today() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 10);
        let text = render_calendar(&single_choice_plan(), today).unwrap();
        assert!(text.contains("*10 today"));

        let other_month = NaiveDate::from_ymd_opt(2026, 3, 10);
        let text = render_calendar(&single_choice_plan(), other_month).unwrap();
        assert!(!text.contains("today"));
    }

    #[test]
    fn test_calendar_leading_blanks() {
        // March 2026 starts on a Sunday too; April 2026 starts on a Wednesday
        let catalog = FoodCatalog::from_lists(["Uji"], ["Pilau"], ["Mukimo"], ["Mango"]);
        let plan = generate_month_plan(2026, 3, &catalog).unwrap();
        let text = render_calendar(&plan, None).unwrap();
        let first_week = text.lines().nth(3).unwrap();

        assert_eq!(first_week.find('1'), Some(3 * CELL_WIDTH));
    }

    #[test]
    fn test_unavailable_category_placeholder() {
        let catalog = FoodCatalog::from_lists(["Uji"], ["Pilau"], ["Mukimo"], Vec::<&str>::new());
        let plan = generate_month_plan(2026, 1, &catalog).unwrap();
        let text = render_calendar(&plan, None).unwrap();
        assert!(text.contains("F:(none)"));
    }
}
