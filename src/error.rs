// src/error.rs
// Standardized error types for timecall

use thiserror::Error;

/// Main error type for the timecall library
#[derive(Error, Debug)]
pub enum TimecallError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("generation failed: {0}")]
    Generation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Convenience type alias for Result using TimecallError
pub type Result<T> = std::result::Result<T, TimecallError>;
