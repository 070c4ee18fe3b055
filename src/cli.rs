use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Meal Calendar — plans breakfast, lunch, supper and fruit for every day of the month.
#[derive(Parser, Debug)]
#[command(name = "meal_calendar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding stored food catalogs.
    #[arg(short, long, global = true, env = "MEAL_CALENDAR_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// User whose catalog to use; the local catalog is used when omitted.
    #[arg(short, long, global = true, env = "MEAL_CALENDAR_USER")]
    pub user: Option<String>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Month selection shared by the calendar and export commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct MonthArgs {
    /// Year to plan; defaults to the current year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Month to plan (1-12); defaults to the current month.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show today's meals.
    #[default]
    Today,

    /// Show the meal calendar for a month.
    Calendar {
        #[command(flatten)]
        month: MonthArgs,
    },

    /// List the available foods per category.
    Foods,

    /// Add a food to a category (prompts for missing values).
    Add {
        /// Category: breakfast, lunch, supper or fruits.
        #[arg(short, long)]
        category: Option<String>,

        /// Food name.
        name: Option<String>,
    },

    /// Remove a food from a category.
    Remove {
        /// Category: breakfast, lunch, supper or fruits.
        category: String,

        /// Food name; close matches are offered when there is no exact one.
        name: String,
    },

    /// Restore the built-in food lists.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// Write a month's plan to a CSV file.
    Export {
        #[command(flatten)]
        month: MonthArgs,

        /// Output CSV file.
        #[arg(short, long, default_value = "meal_plan.csv")]
        out: PathBuf,
    },
}
