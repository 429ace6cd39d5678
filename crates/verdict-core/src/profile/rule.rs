//! Rule and error-template types.

use serde::{Deserialize, Serialize};

/// A typed check: a predicate expression applied to every object whose
/// type (or any super-type) equals `object_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier, unique within the profile.
    pub rule_id: String,
    /// Target object type name.
    pub object_type: String,
    /// Human-readable description of the requirement.
    pub description: String,
    /// Predicate expression; must evaluate to a boolean.
    pub test: String,
    /// When true, evaluation is postponed until the whole graph has been
    /// traversed, so profile-wide accumulators hold their final values.
    #[serde(default)]
    pub deferred: bool,
    pub error: ErrorDetails,
}

impl Rule {
    pub fn new(
        rule_id: impl Into<String>,
        object_type: impl Into<String>,
        test: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            object_type: object_type.into(),
            description: description.into(),
            test: test.into(),
            deferred: false,
            error: ErrorDetails::default(),
        }
    }

    pub fn with_deferred(mut self, deferred: bool) -> Self {
        self.deferred = deferred;
        self
    }

    pub fn with_error(mut self, error: ErrorDetails) -> Self {
        self.error = error;
        self
    }
}

/// Error template attached to a rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Message template; `%NAME%` and `%N` tokens are substituted with
    /// argument values when rendering is enabled.
    #[serde(default)]
    pub message: String,
    /// Ordered argument descriptors referenced by the template.
    #[serde(default)]
    pub arguments: Vec<ErrorArgument>,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>, arguments: Vec<ErrorArgument>) -> Self {
        Self {
            message: message.into(),
            arguments,
        }
    }
}

/// A named argument of an error template.
///
/// `value` is filled by evaluating `expression` against the failing object;
/// profiles ship it empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorArgument {
    pub name: String,
    pub expression: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl ErrorArgument {
    pub fn new(name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            value: None,
        }
    }
}
