//! Final validation report.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants;

use super::assertion::TestAssertion;

/// How a validation job ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobEndStatus {
    #[default]
    Normal,
    Cancelled,
    Timeout,
    OutOfMemory,
}

impl fmt::Display for JobEndStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Timeout => write!(f, "timeout"),
            Self::OutOfMemory => write!(f, "out_of_memory"),
        }
    }
}

/// Identity metadata for a validator component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDetails {
    pub id: String,
    pub name: String,
    pub version: String,
}

impl Default for ComponentDetails {
    fn default() -> Self {
        Self {
            id: constants::COMPONENT_ID.to_string(),
            name: constants::COMPONENT_NAME.to_string(),
            version: constants::VERSION.to_string(),
        }
    }
}

/// Final report of a validation run.
///
/// `failed_checks` counts every failure per rule and is never capped;
/// `assertions` is bounded by the display caps, so the two can disagree on
/// large non-compliant documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Name of the profile the document was validated against.
    pub profile_name: String,
    /// True iff every evaluated predicate returned true.
    pub is_compliant: bool,
    /// Ordered assertion records, subject to the display caps.
    pub assertions: Vec<TestAssertion>,
    /// Total failures per rule id.
    pub failed_checks: FxHashMap<String, u32>,
    /// Number of checks executed, passed or failed.
    pub total_checks: u32,
    pub job_end_status: JobEndStatus,
}

impl ValidationResult {
    /// Total failures across all rules.
    pub fn total_failures(&self) -> u32 {
        self.failed_checks.values().sum()
    }
}
