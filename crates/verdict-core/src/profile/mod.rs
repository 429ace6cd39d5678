//! Validation profile data model.
//!
//! A profile is the declarative input of a run: accumulator variables,
//! typed rules, and their error templates. Immutable once built; lookups
//! by object-type name are indexed eagerly so dispatch never scans.

pub mod rule;
pub mod variable;

pub use rule::{ErrorArgument, ErrorDetails, Rule};
pub use variable::Variable;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use crate::errors::ProfileError;

/// An immutable validation profile with by-type lookup indexes.
#[derive(Debug, Clone)]
pub struct Profile {
    name: String,
    description: Option<String>,
    variables: Vec<Variable>,
    rules: Vec<Rule>,
    rules_by_type: FxHashMap<String, Vec<usize>>,
    variables_by_type: FxHashMap<String, Vec<usize>>,
}

/// Serde shape of a profile document.
#[derive(Debug, Deserialize)]
struct RawProfile {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    variables: Vec<Variable>,
    #[serde(default)]
    rules: Vec<Rule>,
}

impl Profile {
    /// Assemble a profile and build its lookup indexes.
    ///
    /// Variable names and rule ids must be unique within the profile.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        variables: Vec<Variable>,
        rules: Vec<Rule>,
    ) -> Result<Self, ProfileError> {
        {
            let mut rule_ids = FxHashSet::default();
            for rule in &rules {
                if !rule_ids.insert(rule.rule_id.as_str()) {
                    return Err(ProfileError::DuplicateRule {
                        rule_id: rule.rule_id.clone(),
                    });
                }
            }
            let mut variable_names = FxHashSet::default();
            for variable in &variables {
                if !variable_names.insert(variable.name.as_str()) {
                    return Err(ProfileError::DuplicateVariable {
                        name: variable.name.clone(),
                    });
                }
            }
        }

        let mut rules_by_type: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (index, rule) in rules.iter().enumerate() {
            rules_by_type
                .entry(rule.object_type.clone())
                .or_default()
                .push(index);
        }

        let mut variables_by_type: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (index, variable) in variables.iter().enumerate() {
            variables_by_type
                .entry(variable.object_type.clone())
                .or_default()
                .push(index);
        }

        Ok(Self {
            name: name.into(),
            description,
            variables,
            rules,
            rules_by_type,
            variables_by_type,
        })
    }

    /// Load a profile from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let raw: RawProfile = serde_json::from_str(json)?;
        Self::new(raw.name, raw.description, raw.variables, raw.rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// All variables, declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// All rules, declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rules targeting the given object type, declaration order.
    /// Unknown types yield an empty iterator.
    pub fn rules_by_object_type<'a>(
        &'a self,
        object_type: &str,
    ) -> impl Iterator<Item = &'a Rule> {
        self.rules_by_type
            .get(object_type)
            .into_iter()
            .flatten()
            .map(move |&index| &self.rules[index])
    }

    /// Variables bound to the given object type, declaration order.
    pub fn variables_by_object_type<'a>(
        &'a self,
        object_type: &str,
    ) -> impl Iterator<Item = &'a Variable> {
        self.variables_by_type
            .get(object_type)
            .into_iter()
            .flatten()
            .map(move |&index| &self.variables[index])
    }
}
