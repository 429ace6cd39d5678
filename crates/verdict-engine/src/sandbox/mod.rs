//! Expression sandbox backed by `evalexpr`.
//!
//! Profile-authored expressions run against a mutable scope that holds the
//! accumulator variables and, under the `obj.` prefix, the attributes of
//! the object currently under evaluation. Predicate faults are recovered
//! as failed checks and never propagate.

use evalexpr::{
    eval_with_context_mut, Context, ContextWithMutableVariables, HashMapContext,
};
pub use evalexpr::Value;
use tracing::debug;

use verdict_core::errors::ValidationError;
use verdict_core::model::AttrValue;
use verdict_core::profile::{ErrorArgument, Profile, Rule, Variable};
use verdict_core::traits::GraphObject;

/// Prefix under which the current object's attributes are bound.
const OBJECT_PREFIX: &str = "obj.";

/// A mutable expression scope for one traversal.
///
/// Reusable across objects within a run; each run owns its own scope, so
/// concurrent validators never share evaluator state. Dropping the scope
/// releases all bindings.
pub struct Scope {
    context: HashMapContext,
    /// Names bound for the current object, cleared on the next bind.
    object_bindings: Vec<String>,
}

impl Scope {
    pub fn new() -> Self {
        Self {
            context: HashMapContext::new(),
            object_bindings: Vec::new(),
        }
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: &str, value: Value) {
        if let Err(error) = self.context.set_value(name.to_string(), value) {
            debug!(name, %error, "scope binding rejected");
        }
    }

    /// Read a binding back, mostly useful to inspect accumulators.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.context.get_value(name)
    }

    /// Bind the given object under the `obj.` prefix: every attribute as
    /// `obj.<name>`, plus `obj.object_type`, `obj.id` and `obj.context`.
    /// Bindings of the previously bound object are cleared first so stale
    /// attributes cannot leak between objects.
    fn bind_object(&mut self, object: &dyn GraphObject) {
        let stale: Vec<String> = self.object_bindings.drain(..).collect();
        for name in stale {
            self.bind(&name, Value::Empty);
        }

        for name in object.attribute_names() {
            let value = object
                .attribute(&name)
                .map(attr_to_value)
                .unwrap_or(Value::Empty);
            let key = format!("{OBJECT_PREFIX}{name}");
            self.bind(&key, value);
            self.object_bindings.push(key);
        }

        let builtins = [
            ("obj.object_type", Value::String(object.object_type().to_string())),
            (
                "obj.id",
                object
                    .id()
                    .map(|id| Value::String(id.to_string()))
                    .unwrap_or(Value::Empty),
            ),
            ("obj.context", Value::String(object.context().to_string())),
        ];
        for (key, value) in builtins {
            self.bind(key, value);
            self.object_bindings.push(key.to_string());
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate every profile variable's default expression and bind the
/// results. A default that does not evaluate is a fatal run error.
pub fn initialise_variables(profile: &Profile, scope: &mut Scope) -> Result<(), ValidationError> {
    for variable in profile.variables() {
        let value = eval_expression(&variable.default_value, scope).map_err(|error| {
            ValidationError::Runtime(format!(
                "default value of variable {:?} failed to evaluate: {error}",
                variable.name
            ))
        })?;
        scope.bind(&variable.name, value);
    }
    Ok(())
}

/// Evaluate a free-standing profile expression.
pub fn eval_expression(source: &str, scope: &mut Scope) -> Result<Value, evalexpr::EvalexprError> {
    eval_with_context_mut(source, &mut scope.context)
}

/// Evaluate a rule predicate against an object, coercing to boolean.
/// Any evaluation error counts as a failed check.
pub fn eval_predicate(object: &dyn GraphObject, rule: &Rule, scope: &mut Scope) -> bool {
    scope.bind_object(object);
    match eval_with_context_mut(&rule.test, &mut scope.context).and_then(|value| value.as_boolean())
    {
        Ok(passed) => passed,
        Err(error) => {
            debug!(
                rule_id = %rule.rule_id,
                %error,
                "predicate evaluation failed, treating check as failed"
            );
            false
        }
    }
}

/// Re-evaluate a variable's update expression for an object and re-bind
/// the result. On evaluation failure the variable keeps its previous value.
pub fn eval_variable_update(variable: &Variable, object: &dyn GraphObject, scope: &mut Scope) {
    scope.bind_object(object);
    match eval_with_context_mut(&variable.update, &mut scope.context) {
        Ok(value) => scope.bind(&variable.name, value),
        Err(error) => debug!(
            variable = %variable.name,
            %error,
            "variable update failed, keeping previous value"
        ),
    }
}

/// Evaluate error arguments against an object, producing owned descriptors
/// with their values filled. Unresolvable arguments keep `value = None`.
pub fn eval_error_arguments(
    object: &dyn GraphObject,
    arguments: &[ErrorArgument],
    scope: &mut Scope,
) -> Vec<ErrorArgument> {
    scope.bind_object(object);
    arguments
        .iter()
        .map(|argument| {
            let value = eval_with_context_mut(&argument.expression, &mut scope.context)
                .ok()
                .and_then(|value| value_to_display(&value));
            ErrorArgument {
                value,
                ..argument.clone()
            }
        })
        .collect()
}

/// Render a value for error-message substitution. `Empty` renders as
/// absent so the template machinery falls back to the `"null"` literal.
pub fn value_to_display(value: &Value) -> Option<String> {
    match value {
        Value::Empty => None,
        Value::String(s) => Some(s.clone()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(x) => Some(x.to_string()),
        Value::Tuple(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| value_to_display(item).unwrap_or_else(|| "null".to_string()))
                .collect();
            Some(format!("({})", rendered.join(", ")))
        }
    }
}

fn attr_to_value(attr: AttrValue) -> Value {
    match attr {
        AttrValue::Null => Value::Empty,
        AttrValue::Bool(b) => Value::Boolean(b),
        AttrValue::Int(i) => Value::Int(i),
        AttrValue::Float(x) => Value::Float(x),
        AttrValue::Str(s) => Value::String(s),
    }
}
