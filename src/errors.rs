/*!
 * Error types for the plainspeak application.
 *
 * The rewrite pipeline itself cannot fail; these errors cover the
 * configuration, file handling and command-line layers around it,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors found while validating a configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Reading level is not one of the known values
    #[error("Invalid reading level: {0}")]
    InvalidReadingLevel(String),

    /// Output format is not one of the known values
    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),

    /// Output variant is not one of the known values
    #[error("Invalid output variant: {0}")]
    InvalidVariant(String),

    /// No output variant selected
    #[error("At least one output variant must be selected")]
    NoVariants,

    /// The same output variant selected more than once
    #[error("Output variant listed more than once: {0}")]
    DuplicateVariant(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration loading or validation
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Input that the caller refuses to translate
    #[error("Input error: {0}")]
    Input(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
