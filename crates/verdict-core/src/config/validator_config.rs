//! Validator configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_DISPLAYED_FAILED_CHECKS;

/// Configuration for a validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Per-rule cap on FAILED assertions retained in the result.
    /// `-1` means unlimited. Default: 100.
    pub max_displayed_failed_checks: i32,
    /// Append a PASSED assertion for every passing check. Default: false.
    pub log_passed_checks: bool,
    /// Evaluate error arguments and render error messages on failures.
    /// Default: false.
    pub show_error_messages: bool,
    /// Log per-step progress counters. Default: false.
    pub show_progress: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_displayed_failed_checks: DEFAULT_MAX_DISPLAYED_FAILED_CHECKS,
            log_passed_checks: false,
            show_error_messages: false,
            show_progress: false,
        }
    }
}

impl ValidatorConfig {
    /// Set the per-rule display cap (`-1` = unlimited).
    pub fn with_max_displayed_failed_checks(mut self, max: i32) -> Self {
        self.max_displayed_failed_checks = max;
        self
    }

    /// Enable PASSED assertion logging.
    pub fn with_log_passed_checks(mut self, log: bool) -> Self {
        self.log_passed_checks = log;
        self
    }

    /// Enable error-message rendering on failed checks.
    pub fn with_show_error_messages(mut self, show: bool) -> Self {
        self.show_error_messages = show;
        self
    }

    /// Enable progress logging.
    pub fn with_show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Returns true if the per-rule display cap admits the `n`-th failure
    /// of a rule.
    pub fn admits_failure(&self, n: u32) -> bool {
        self.max_displayed_failed_checks == -1
            || i64::from(n) <= i64::from(self.max_displayed_failed_checks)
    }
}
