//! Accumulator variables.

use serde::{Deserialize, Serialize};

/// A traversal-wide accumulator held in the expression scope.
///
/// The default expression is evaluated once when the run starts; the update
/// expression is re-evaluated for every visited object whose type (or any
/// super-type) equals `object_type`, with the object bound in scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    /// Binding name, unique within the profile.
    pub name: String,
    /// Object type whose visits trigger the update expression.
    pub object_type: String,
    /// Initial-value expression.
    pub default_value: String,
    /// Per-object update expression.
    pub update: String,
}

impl Variable {
    pub fn new(
        name: impl Into<String>,
        object_type: impl Into<String>,
        default_value: impl Into<String>,
        update: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            object_type: object_type.into(),
            default_value: default_value.into(),
            update: update.into(),
        }
    }
}
