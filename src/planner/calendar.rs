use chrono::{Datelike, NaiveDate};

use crate::error::{PlannerError, Result};
use crate::planner::constants::MONTHS_PER_YEAR;

/// Reject months outside 0..=11.
pub fn check_month(month0: u32) -> Result<()> {
    if month0 >= MONTHS_PER_YEAR {
        return Err(PlannerError::InvalidMonth(month0));
    }
    Ok(())
}

fn first_of_month(year: i32, month0: u32) -> Result<NaiveDate> {
    check_month(month0)?;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .ok_or_else(|| PlannerError::InvalidDate(format!("{}-{:02}", year, month0 + 1)))
}

/// Number of days in a month: the day before the first of the next month.
pub fn days_in_month(year: i32, month0: u32) -> Result<u32> {
    check_month(month0)?;

    let (next_year, next_month0) = if month0 == MONTHS_PER_YEAR - 1 {
        let next_year = year
            .checked_add(1)
            .ok_or_else(|| PlannerError::InvalidDate(format!("{}-12", year)))?;
        (next_year, 0)
    } else {
        (year, month0 + 1)
    };

    let last = first_of_month(next_year, next_month0)?
        .pred_opt()
        .ok_or_else(|| PlannerError::InvalidDate(format!("{}-{:02}", year, month0 + 1)))?;

    Ok(last.day())
}

/// Weekday of the 1st of the month, counted from Sunday (0) to Saturday (6).
pub fn first_weekday(year: i32, month0: u32) -> Result<u32> {
    Ok(first_of_month(year, month0)?.weekday().num_days_from_sunday())
}

/// Heading such as "January 2024".
pub fn month_label(year: i32, month0: u32) -> Result<String> {
    Ok(first_of_month(year, month0)?.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_regular() {
        assert_eq!(days_in_month(2024, 0).unwrap(), 31);
        assert_eq!(days_in_month(2024, 3).unwrap(), 30);
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        assert_eq!(days_in_month(2023, 11).unwrap(), 31);
    }

    #[test]
    fn test_month_out_of_range() {
        assert!(matches!(days_in_month(2024, 12), Err(PlannerError::InvalidMonth(12))));
        assert!(matches!(first_weekday(2024, 40), Err(PlannerError::InvalidMonth(40))));
    }

    #[test]
    fn test_first_weekday() {
        // 2024-01-01 was a Monday, 2023-10-01 a Sunday
        assert_eq!(first_weekday(2024, 0).unwrap(), 1);
        assert_eq!(first_weekday(2023, 9).unwrap(), 0);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2024, 0).unwrap(), "January 2024");
        assert_eq!(month_label(2026, 9).unwrap(), "October 2026");
    }
}
