//! VerdictErrorCode trait for embedding boundaries.

/// Trait for converting Verdict errors to structured error codes.
/// Every error enum implements this to provide a stable code string
/// for host-application consumption.
pub trait VerdictErrorCode {
    /// Returns the error code string (e.g., "PARSER_FAULT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the embedding boundary.
pub const STRUCTURAL_FAULT: &str = "STRUCTURAL_FAULT";
pub const PARSER_FAULT: &str = "PARSER_FAULT";
pub const PROFILE_ERROR: &str = "PROFILE_ERROR";
pub const RUNTIME_FAULT: &str = "RUNTIME_FAULT";
