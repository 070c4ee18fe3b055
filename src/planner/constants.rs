/// Weight of the year in a day seed.
pub const SEED_YEAR_FACTOR: i64 = 10_000;

/// Weight of the zero-based month in a day seed.
pub const SEED_MONTH_FACTOR: i64 = 100;

/// Scale applied to the sine before taking its fractional part.
pub const SINE_SCALE: f64 = 10_000.0;

/// Number of months in a year; months are zero-based below this.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Column headers of the calendar grid, starting on Sunday.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
