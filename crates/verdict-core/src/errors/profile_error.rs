//! Validation profile errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors that can occur while loading or assembling a validation profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate variable name: {name}")]
    DuplicateVariable { name: String },

    #[error("Duplicate rule id: {rule_id}")]
    DuplicateRule { rule_id: String },
}

impl VerdictErrorCode for ProfileError {
    fn error_code(&self) -> &'static str {
        error_code::PROFILE_ERROR
    }
}
