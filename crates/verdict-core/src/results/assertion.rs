//! Per-check assertion records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::ErrorArgument;

/// Outcome of a single rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssertionStatus {
    Passed,
    Failed,
}

impl fmt::Display for AssertionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Where in the graph an assertion fired: the root's type plus the
/// slash-delimited context path of the checked node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub root_type: String,
    pub context: String,
}

/// One PASS/FAIL record in the result. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestAssertion {
    /// 1-based ordinal of the check within the run.
    pub ordinal: u32,
    pub rule_id: String,
    pub status: AssertionStatus,
    pub description: String,
    pub location: Location,
    /// The checked node's own self-label.
    pub object_context: String,
    /// Rendered error message, present on failures when message rendering
    /// is enabled.
    pub error_message: Option<String>,
    /// The rule's error arguments, evaluated when message rendering is
    /// enabled. Empty for passed checks.
    pub arguments: Vec<ErrorArgument>,
}
