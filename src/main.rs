use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use meal_calendar_rs::cli::{Cli, Command, MonthArgs};
use meal_calendar_rs::config::Settings;
use meal_calendar_rs::error::Result;
use meal_calendar_rs::export::write_csv;
use meal_calendar_rs::interface::{
    display_calendar, display_catalog, display_day, prompt_category, prompt_food_name,
    prompt_yes_no, resolve_food,
};
use meal_calendar_rs::models::{Category, MonthPlan};
use meal_calendar_rs::planner::generate_month_plan;
use meal_calendar_rs::state::{CatalogSession, JsonFileStore, StoreKey};

type Session = CatalogSession<JsonFileStore>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;
    init_logging(settings.log_level);

    tracing::debug!(data_dir = %settings.data_dir.display(), key = %settings.key, "starting");

    let store = JsonFileStore::new(&settings.data_dir);

    match cli.command.unwrap_or_default() {
        // never reads the stored record, so it recovers from a corrupt one
        Command::Reset { yes } => cmd_reset(store, settings.key, yes),
        command => {
            let session = CatalogSession::open(store, settings.key)?;
            dispatch(session, command)
        }
    }
}

/// Run a command against a loaded catalog.
fn dispatch(mut session: Session, command: Command) -> Result<()> {
    let today = Local::now().date_naive();

    match command {
        Command::Today => cmd_today(&session, today),
        Command::Calendar { month } => cmd_calendar(&session, &month, today),
        Command::Foods => {
            display_catalog(session.catalog());
            Ok(())
        }
        Command::Add { category, name } => cmd_add(&mut session, category, name),
        Command::Remove { category, name } => cmd_remove(&mut session, &category, &name),
        Command::Reset { yes } => {
            let key = session.key().clone();
            cmd_reset(session.into_store(), key, yes)
        }
        Command::Export { month, out } => {
            let plan = plan_for(&session, &month, today)?;
            write_csv(&plan, &out)?;
            println!("Wrote {} days to {}", plan.len(), out.display());
            Ok(())
        }
    }
}

/// Plan for the requested month, defaulting to the month containing `today`.
fn plan_for(session: &Session, month: &MonthArgs, today: NaiveDate) -> Result<MonthPlan> {
    let year = month.year.unwrap_or(today.year());
    let month0 = month.month.map(|m| m - 1).unwrap_or(today.month0());
    generate_month_plan(year, month0, session.catalog())
}

fn warn_empty_categories(plan: &MonthPlan) {
    let empty = plan.empty_categories();
    if !empty.is_empty() {
        let names: Vec<&str> = empty.iter().map(|c| c.key()).collect();
        println!("No foods listed for: {}. Use 'add' to fill them in.", names.join(", "));
    }
}

/// Show the meals planned for today.
fn cmd_today(session: &Session, today: NaiveDate) -> Result<()> {
    let plan = generate_month_plan(today.year(), today.month0(), session.catalog())?;

    match plan.day(today.day()) {
        Some(day) => display_day(day, today),
        None => println!("No plan for today."),
    }
    warn_empty_categories(&plan);

    Ok(())
}

/// Show the month grid with today highlighted.
fn cmd_calendar(session: &Session, month: &MonthArgs, today: NaiveDate) -> Result<()> {
    let plan = plan_for(session, month, today)?;
    display_calendar(&plan, Some(today))?;
    warn_empty_categories(&plan);
    Ok(())
}

/// Add a food, prompting for whatever was not given on the command line.
fn cmd_add(session: &mut Session, category: Option<String>, name: Option<String>) -> Result<()> {
    let category = match category {
        Some(c) => c.parse::<Category>()?,
        None => prompt_category()?,
    };
    let name = match name {
        Some(n) => n,
        None => prompt_food_name()?,
    };

    let name = name.trim();
    if name.is_empty() {
        println!("Nothing to add.");
        return Ok(());
    }

    session.add(category, name)?;
    println!("Added '{}' to {}.", name, category);
    Ok(())
}

/// Remove a food, offering close matches when the name is not exact.
fn cmd_remove(session: &mut Session, category: &str, name: &str) -> Result<()> {
    let category = category.parse::<Category>()?;

    let Some(food) = resolve_food(session.catalog(), category, name)? else {
        println!("Nothing removed.");
        return Ok(());
    };

    session.remove(category, &food)?;
    println!("Removed '{}' from {}.", food, category);
    Ok(())
}

/// Restore the default foods, overwriting whatever is stored.
fn cmd_reset(store: JsonFileStore, key: StoreKey, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("Replace all foods with the default lists?", false)? {
        println!("Nothing changed.");
        return Ok(());
    }

    CatalogSession::restore_defaults(store, key)?;
    println!("Food lists reset to defaults.");
    Ok(())
}
