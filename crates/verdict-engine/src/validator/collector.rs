//! Bounded accumulation of per-rule assertions.

use rustc_hash::FxHashMap;

use verdict_core::config::ValidatorConfig;
use verdict_core::constants::MAX_CHECKS_NUMBER;
use verdict_core::profile::Rule;
use verdict_core::results::{
    AssertionStatus, JobEndStatus, Location, TestAssertion, ValidationResult,
};
use verdict_core::traits::{CancelToken, Cancellable, GraphObject};

use crate::sandbox::{self, Scope};

use super::message::render_error_message;

/// Collects assertion outcomes under two caps: a per-rule display cap and
/// a global result-size cap. The per-rule failure counts are never capped,
/// so `failed_checks` stays faithful on large non-compliant documents.
pub(crate) struct ResultCollector {
    config: ValidatorConfig,
    cancel: CancelToken,
    results: Vec<TestAssertion>,
    failed_checks: FxHashMap<String, u32>,
    is_compliant: bool,
    test_counter: u32,
}

impl ResultCollector {
    pub fn new(config: ValidatorConfig, cancel: CancelToken) -> Self {
        Self {
            config,
            cancel,
            results: Vec::new(),
            failed_checks: FxHashMap::default(),
            is_compliant: true,
            test_counter: 0,
        }
    }

    /// Record one check outcome.
    ///
    /// Once cancellation is requested the collector ignores further
    /// reports, so a cancelled run returns whatever was collected so far.
    pub fn report(
        &mut self,
        passed: bool,
        location_context: &str,
        rule: &Rule,
        object: &dyn GraphObject,
        root_type: &str,
        scope: &mut Scope,
    ) {
        if self.cancel.is_cancelled() {
            return;
        }

        self.test_counter += 1;
        if self.is_compliant {
            self.is_compliant = passed;
        }

        if !passed {
            let count = self
                .failed_checks
                .entry(rule.rule_id.clone())
                .or_insert(0);
            *count += 1;
            let nth_failure = *count;

            // The first failure of a rule is always recorded, even past the
            // global cap, so every failing rule is visible in the report.
            let within_global_cap = self.results.len() <= MAX_CHECKS_NUMBER || nth_failure <= 1;
            if self.config.admits_failure(nth_failure) && within_global_cap {
                let (error_message, arguments) = if self.config.show_error_messages {
                    let arguments =
                        sandbox::eval_error_arguments(object, &rule.error.arguments, scope);
                    let message = render_error_message(&rule.error.message, &arguments);
                    (Some(message), arguments)
                } else {
                    (None, rule.error.arguments.clone())
                };

                self.results.push(TestAssertion {
                    ordinal: self.test_counter,
                    rule_id: rule.rule_id.clone(),
                    status: AssertionStatus::Failed,
                    description: rule.description.clone(),
                    location: Location {
                        root_type: root_type.to_string(),
                        context: location_context.to_string(),
                    },
                    object_context: object.context().to_string(),
                    error_message,
                    arguments,
                });
            }
        } else if self.config.log_passed_checks && self.results.len() <= MAX_CHECKS_NUMBER {
            self.results.push(TestAssertion {
                ordinal: self.test_counter,
                rule_id: rule.rule_id.clone(),
                status: AssertionStatus::Passed,
                description: rule.description.clone(),
                location: Location {
                    root_type: root_type.to_string(),
                    context: location_context.to_string(),
                },
                object_context: object.context().to_string(),
                error_message: None,
                arguments: Vec::new(),
            });
        }
    }

    /// Number of distinct rules with at least one failure.
    pub fn distinct_failed_rules(&self) -> usize {
        self.failed_checks.len()
    }

    pub fn into_result(self, profile_name: String, job_end_status: JobEndStatus) -> ValidationResult {
        ValidationResult {
            profile_name,
            is_compliant: self.is_compliant,
            assertions: self.results,
            failed_checks: self.failed_checks,
            total_checks: self.test_counter,
            job_end_status,
        }
    }
}
