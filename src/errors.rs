//! Unified application error type.
//! All modules (data, core, export, cli) return AppError so that the binary
//! can report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid status: {0} (expected pending, approved, rejected or all)")]
    InvalidStatus(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    // ---------------------------
    // Mutation errors
    // ---------------------------
    #[error("Time entry not found: {0}")]
    EntryNotFound(String),

    #[error("Time entry {id} is already {status} and cannot be {action}")]
    InvalidTransition {
        id: String,
        status: String,
        action: String,
    },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Nothing to export: no approved entries between {0} and {1}")]
    NothingToExport(String, String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
