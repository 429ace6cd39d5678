//! Parser collaborator errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors surfaced by the document parser while supplying the root object
/// or materialising linked children.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    /// The object declares a link name it cannot resolve to a child list.
    #[error("Link {link:?} declared but not resolvable")]
    UnresolvableLink { link: String },

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parser error: {0}")]
    Other(String),
}

impl VerdictErrorCode for ParserError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnresolvableLink { .. } => error_code::STRUCTURAL_FAULT,
            _ => error_code::PARSER_FAULT,
        }
    }
}
