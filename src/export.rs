use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{Category, MonthPlan};

/// Write one CSV row per day of `plan` to `writer`.
///
/// Categories that had nothing to draw from are left blank.
pub fn write_plan<W: Write>(plan: &MonthPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["date"];
    header.extend(Category::ALL.iter().map(|c| c.key()));
    wtr.write_record(&header)?;

    for day in plan.days() {
        let mut row = vec![format!("{}-{:02}-{:02}", plan.year, plan.month0 + 1, day.day)];
        row.extend(
            Category::ALL
                .iter()
                .map(|c| day.selection(*c).name().unwrap_or_default().to_string()),
        );
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the month plan to a CSV file at `path`.
pub fn write_csv(plan: &MonthPlan, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan(plan, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCatalog;
    use crate::planner::generate_month_plan;

    #[test]
    fn test_one_row_per_day() {
        let catalog = FoodCatalog::from_lists(["Uji"], ["Pilau"], ["Mukimo"], ["Mango"]);
        let plan = generate_month_plan(2024, 1, &catalog).unwrap();

        let mut buf = Vec::new();
        write_plan(&plan, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 29);
        assert_eq!(lines[0], "date,breakfast,lunch,supper,fruit");
        assert_eq!(lines[1], "2024-02-01,Uji,Pilau,Mukimo,Mango");
        assert_eq!(lines[29], "2024-02-29,Uji,Pilau,Mukimo,Mango");
    }

    #[test]
    fn test_empty_category_left_blank() {
        let catalog = FoodCatalog::from_lists(["Uji"], Vec::<&str>::new(), ["Mukimo"], ["Mango"]);
        let plan = generate_month_plan(2023, 11, &catalog).unwrap();

        let mut buf = Vec::new();
        write_plan(&plan, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().nth(31), Some("2023-12-31,Uji,,Mukimo,Mango"));
    }
}
