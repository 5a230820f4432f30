//! Error types for rendering.

use thiserror::Error;

/// Errors that stop a single render call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("non-finite number: {value}")]
    NonFiniteNumber { value: f64 },

    #[error("invalid serial date: {serial}")]
    InvalidSerialDate { serial: f64 },

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

/// Non-fatal conditions met while rendering.
///
/// The text is still produced; these only tell the caller that the format
/// code was not fully understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Degradation {
    #[error("malformed format '{format}': {reason}")]
    MalformedFormat { format: String, reason: &'static str },

    #[error("fraction limit {limit} too small for approximation, used fixed denominator")]
    FractionOverflow { limit: u32 },
}
