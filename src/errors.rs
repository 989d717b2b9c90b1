//! Unified application error type.
//! Config, CLI and controller code return AppError; gateway failures
//! never reach this type because the gateway absorbs them.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Command errors
    // ---------------------------
    #[error("Invalid command: {0}")]
    Command(String),

    #[error("Invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),

    // ---------------------------
    // Submission errors
    // ---------------------------
    #[error("Form '{form}' rejected: {count} invalid field(s)")]
    Rejected { form: String, count: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Logging
    // ---------------------------
    #[error("Logger initialization failed: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type AppResult<T> = Result<T, AppError>;
