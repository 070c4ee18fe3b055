use thiserror::Error;

use crate::models::Category;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("No foods available for {0}")]
    EmptyCategory(Category),

    #[error("Month out of range: {0} (expected 0-11)")]
    InvalidMonth(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Failed to persist catalog for {key}: {reason}")]
    Persistence { key: String, reason: String },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
