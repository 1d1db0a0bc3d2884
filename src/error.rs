//! Custom error types for Saving Money Cat
//!
//! This module defines the error hierarchy shared by the console tracker and
//! the Purrfect Saver window, using thiserror for ergonomic definitions.

use thiserror::Error;

/// Which kind of number an input field expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Any decimal number (amounts, income)
    Float,
    /// A whole number (day numbers, day counts)
    Integer,
    /// A whole number that may not be negative (XP submissions)
    NonNegativeInteger,
}

impl std::fmt::Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberKind::Float => write!(f, "number"),
            NumberKind::Integer => write!(f, "whole number"),
            NumberKind::NonNegativeInteger => write!(f, "non-negative whole number"),
        }
    }
}

/// The main error type for Saving Money Cat operations
#[derive(Error, Debug)]
pub enum CatError {
    /// Text that could not be read as the expected kind of number
    #[error("Invalid {kind}: '{input}'")]
    InvalidNumber { kind: NumberKind, input: String },

    /// The input stream ended while a prompt was waiting
    #[error("Input closed")]
    InputClosed,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),
}

impl CatError {
    /// Create an invalid-number error for the given input text
    pub fn invalid_number(kind: NumberKind, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            kind,
            input: input.into(),
        }
    }

    /// Check if this is an invalid-number error
    pub fn is_invalid_number(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. })
    }
}

impl From<std::io::Error> for CatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Saving Money Cat operations
pub type CatResult<T> = Result<T, CatError>;
