//! Core calculator model: sanitization, parsing, evaluation, history.
//!
//! Everything in here is plain in-memory state manipulated synchronously
//! from a single event-handling thread; the `widget` module wires it to
//! the rendering surface.

pub mod display;
pub mod evaluator;
pub mod history;
mod operations;
pub mod parser;
pub mod sanitizer;

pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// The literal string shown in the display when an operation fails.
///
/// Errors never escape a widget operation; they are rendered as this
/// indicator and the user re-edits and resubmits.
pub const ERROR_INDICATOR: &str = "Error";

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Invalid expression syntax
    #[error("invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("empty expression")]
    EmptyExpression,
    /// Division or modulo by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Result was NaN or infinite
    #[error("non-finite result")]
    NonFinite,
    /// Display text could not be parsed as a number (square operation)
    #[error("not a number: {0}")]
    InvalidNumber(String),
}
