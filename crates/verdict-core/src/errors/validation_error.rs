//! Top-level validation errors.
//! Aggregates collaborator faults via `From` conversions where unambiguous.

use super::error_code::{self, VerdictErrorCode};
use super::ParserError;

/// Fatal errors that abort a validation run.
///
/// Predicate evaluation failures are never fatal; they surface as failed
/// checks in the result instead.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A parser fault while fetching the root or materialising children.
    /// Carries the context path at which traversal stopped.
    #[error("Parser fault at {context}: {source}")]
    Parser {
        context: String,
        #[source]
        source: ParserError,
    },

    /// An unexpected engine fault, e.g. a variable default expression
    /// that does not evaluate.
    #[error("Unexpected runtime failure during validation: {0}")]
    Runtime(String),
}

impl VerdictErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parser { source, .. } => source.error_code(),
            Self::Runtime(_) => error_code::RUNTIME_FAULT,
        }
    }
}
