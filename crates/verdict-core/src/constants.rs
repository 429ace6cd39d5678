//! Shared constants for the Verdict validation engine.

/// Verdict version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on the number of assertions retained in a result.
/// The first failure of each rule is recorded even past this cap.
pub const MAX_CHECKS_NUMBER: usize = 10_000;

/// Default per-rule cap on displayed failed checks. `-1` means unlimited.
pub const DEFAULT_MAX_DISPLAYED_FAILED_CHECKS: i32 = 100;

/// Identity of the default validator component.
pub const COMPONENT_ID: &str = "https://verdict.dev/components/validator#default";

/// Human-readable name of the default validator component.
pub const COMPONENT_NAME: &str = "Verdict Graph Validator";
