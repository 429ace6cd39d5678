//! The validator: depth-first traversal, rule dispatch, deferred flush.

use std::mem;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, warn};

use verdict_core::config::ValidatorConfig;
use verdict_core::errors::ValidationError;
use verdict_core::profile::{Profile, Rule};
use verdict_core::results::{ComponentDetails, JobEndStatus, ValidationResult};
use verdict_core::traits::{CancelToken, Cancellable, DocumentParser, ObjectRef};

use crate::sandbox::{self, Scope};

use super::collector::ResultCollector;
use super::progress::ValidationProgress;

/// An object retained with the context path it was visited under, queued
/// for a deferred rule.
pub struct ObjectWithContext {
    pub object: ObjectRef,
    pub context: String,
}

/// Occurrences queued for one deferred rule, insertion order.
struct DeferredChecks {
    rule: Rule,
    occurrences: Vec<ObjectWithContext>,
}

/// Per-run traversal state. Fresh for every `validate` call, torn down
/// (scope included) when the run finishes.
struct TraversalState {
    scope: Scope,
    stack: Vec<(ObjectRef, String)>,
    id_set: FxHashSet<String>,
    deferred: FxHashMap<String, DeferredChecks>,
    collector: ResultCollector,
    root_type: String,
}

/// Validates a document's object graph against a profile.
///
/// A validator is reusable across documents and shareable across threads;
/// each run confines its mutable state to the call. Cancellation is
/// cooperative through [`cancel`](Self::cancel) or a shared
/// [`cancel_token`](Self::cancel_token).
pub struct Validator {
    profile: Profile,
    config: ValidatorConfig,
    cancel: CancelToken,
    progress: Arc<ValidationProgress>,
}

impl Validator {
    pub fn new(profile: Profile, config: ValidatorConfig) -> Self {
        Self {
            profile,
            config,
            cancel: CancelToken::new(),
            progress: Arc::new(ValidationProgress::new()),
        }
    }

    /// The profile this validator dispatches.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Identity metadata of this validator component.
    pub fn details(&self) -> ComponentDetails {
        ComponentDetails::default()
    }

    /// Request cooperative cancellation; the run reports `end_status`.
    /// Safe to call from any thread.
    pub fn cancel(&self, end_status: JobEndStatus) {
        self.cancel.cancel(end_status);
    }

    /// A shared cancellation handle for external watchdogs.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Human-readable snapshot of the run counters.
    pub fn progress_string(&self) -> String {
        self.progress.progress_string()
    }

    /// Validate the document supplied by `parser`.
    pub fn validate(
        &self,
        parser: &dyn DocumentParser,
    ) -> Result<ValidationResult, ValidationError> {
        let root = parser.root().map_err(|source| {
            warn!(%source, "parser failed to supply a root object");
            ValidationError::Parser {
                context: "root".to_string(),
                source,
            }
        })?;
        self.validate_root(root)
    }

    /// Validate a graph from its root, below the parser seam.
    pub fn validate_root(&self, root: ObjectRef) -> Result<ValidationResult, ValidationError> {
        self.progress.reset();

        let mut scope = Scope::new();
        sandbox::initialise_variables(&self.profile, &mut scope)?;

        let mut state = TraversalState {
            scope,
            stack: Vec::new(),
            id_set: FxHashSet::default(),
            deferred: FxHashMap::default(),
            collector: ResultCollector::new(self.config.clone(), self.cancel.clone()),
            root_type: root.object_type().to_string(),
        };

        if let Some(id) = root.id() {
            state.id_set.insert(id.to_string());
        }
        state.stack.push((root, "root".to_string()));

        while !state.stack.is_empty() && !self.cancel.is_cancelled() {
            self.check_next(&mut state)?;
            self.progress.object_processed(state.stack.len());
            if self.config.show_progress {
                debug!(progress = %self.progress.progress_string(), "validation progress");
            }
        }

        // Deferred rules fire after the whole graph has been seen, so the
        // accumulators hold their final values. The collector still
        // suppresses output if the run was cancelled.
        let deferred = mem::take(&mut state.deferred);
        for checks in deferred.values() {
            for occurrence in &checks.occurrences {
                self.check_object_with_rule(
                    &mut state,
                    &occurrence.object,
                    &occurrence.context,
                    &checks.rule,
                );
            }
        }

        if self.config.show_progress {
            info!(progress = %self.progress.progress_string(), "validation finished");
        }

        Ok(state
            .collector
            .into_result(self.profile.name().to_string(), self.cancel.end_status()))
    }

    /// One traversal step: dispatch rules, update variables, push children.
    fn check_next(&self, state: &mut TraversalState) -> Result<(), ValidationError> {
        let Some((object, context)) = state.stack.pop() else {
            return Ok(());
        };

        self.check_all_rules(state, &object, &context);
        self.update_variables(state, &object);
        self.push_linked_objects(state, &object, &context)
    }

    /// Dispatch every rule matching the object's direct type, then every
    /// rule matching each super-type. Overlap between the two is the
    /// profile's contract; the engine does not deduplicate.
    fn check_all_rules(&self, state: &mut TraversalState, object: &ObjectRef, context: &str) {
        for rule in self.profile.rules_by_object_type(object.object_type()) {
            self.process_rule(state, object, context, rule);
        }
        for super_type in object.super_types() {
            for rule in self.profile.rules_by_object_type(super_type) {
                self.process_rule(state, object, context, rule);
            }
        }
    }

    fn process_rule(
        &self,
        state: &mut TraversalState,
        object: &ObjectRef,
        context: &str,
        rule: &Rule,
    ) {
        if rule.deferred {
            state
                .deferred
                .entry(rule.rule_id.clone())
                .or_insert_with(|| DeferredChecks {
                    rule: rule.clone(),
                    occurrences: Vec::new(),
                })
                .occurrences
                .push(ObjectWithContext {
                    object: object.clone(),
                    context: context.to_string(),
                });
            return;
        }
        self.check_object_with_rule(state, object, context, rule);
    }

    fn check_object_with_rule(
        &self,
        state: &mut TraversalState,
        object: &ObjectRef,
        context: &str,
        rule: &Rule,
    ) {
        let passed = sandbox::eval_predicate(object.as_ref(), rule, &mut state.scope);
        state.collector.report(
            passed,
            context,
            rule,
            object.as_ref(),
            &state.root_type,
            &mut state.scope,
        );
        self.progress
            .check_executed(state.collector.distinct_failed_rules());
    }

    /// Re-evaluate every variable bound to the object's type or any of its
    /// super-types.
    fn update_variables(&self, state: &mut TraversalState, object: &ObjectRef) {
        for variable in self.profile.variables_by_object_type(object.object_type()) {
            sandbox::eval_variable_update(variable, object.as_ref(), &mut state.scope);
        }
        for super_type in object.super_types() {
            for variable in self.profile.variables_by_object_type(super_type) {
                sandbox::eval_variable_update(variable, object.as_ref(), &mut state.scope);
            }
        }
    }

    /// Push the object's children, links and children both in reverse, so
    /// LIFO popping visits them in declared order. Identified children are
    /// pushed at most once per run.
    fn push_linked_objects(
        &self,
        state: &mut TraversalState,
        object: &ObjectRef,
        context: &str,
    ) -> Result<(), ValidationError> {
        let links = object.links();
        for link in links.iter().rev() {
            let children = object.linked_objects(link).map_err(|source| {
                warn!(%link, context, "parser fault while materialising children");
                ValidationError::Parser {
                    context: context.to_string(),
                    source,
                }
            })?;

            for (index, child) in children.iter().enumerate().rev() {
                if !self.visit_required(state, child) {
                    continue;
                }

                let mut path = format!("{context}/{link}[{index}]");
                if let Some(id) = child.id() {
                    path.push('(');
                    path.push_str(id);
                    path.push(')');
                    state.id_set.insert(id.to_string());
                }
                if let Some(extra) = child.extra_context() {
                    path.push('{');
                    path.push_str(extra);
                    path.push('}');
                }
                state.stack.push((child.clone(), path));
            }
        }
        Ok(())
    }

    /// An object must be visited unless it carries an id we have already
    /// seen. This is the cycle guard: every cycle through an identified
    /// object terminates.
    fn visit_required(&self, state: &TraversalState, object: &ObjectRef) -> bool {
        object.id().map_or(true, |id| !state.id_set.contains(id))
    }
}
