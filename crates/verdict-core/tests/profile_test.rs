//! Tests for the profile data model and its lookup indexes.

use verdict_core::errors::ProfileError;
use verdict_core::profile::{ErrorArgument, ErrorDetails, Profile, Rule, Variable};

fn sample_json() -> &'static str {
    r#"{
        "name": "sample",
        "description": "sample profile",
        "variables": [
            {
                "name": "page_count",
                "object_type": "Page",
                "default_value": "0",
                "update": "page_count + 1"
            }
        ],
        "rules": [
            {
                "rule_id": "page-1",
                "object_type": "Page",
                "description": "pages must be boxed",
                "test": "obj.has_box == true",
                "error": {
                    "message": "page %index% has no box",
                    "arguments": [
                        { "name": "index", "expression": "obj.index" }
                    ]
                }
            },
            {
                "rule_id": "doc-1",
                "object_type": "Doc",
                "description": "exactly three pages",
                "test": "page_count == 3",
                "deferred": true,
                "error": { "message": "wrong page count" }
            }
        ]
    }"#
}

// ─── JSON loading ───

#[test]
fn from_json_parses_rules_and_variables() {
    let profile = Profile::from_json(sample_json()).unwrap();
    assert_eq!(profile.name(), "sample");
    assert_eq!(profile.description(), Some("sample profile"));
    assert_eq!(profile.rules().len(), 2);
    assert_eq!(profile.variables().len(), 1);
}

#[test]
fn deferred_defaults_to_false() {
    let profile = Profile::from_json(sample_json()).unwrap();
    assert!(!profile.rules()[0].deferred);
    assert!(profile.rules()[1].deferred);
}

#[test]
fn argument_values_ship_empty() {
    let profile = Profile::from_json(sample_json()).unwrap();
    let arguments = &profile.rules()[0].error.arguments;
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].name, "index");
    assert!(arguments[0].value.is_none());
}

#[test]
fn invalid_json_is_rejected() {
    let err = Profile::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ProfileError::Json(_)));
}

// ─── Lookup indexes ───

#[test]
fn rules_by_object_type_returns_declaration_order() {
    let rules = vec![
        Rule::new("r1", "T", "true", "first"),
        Rule::new("r2", "U", "true", "other type"),
        Rule::new("r3", "T", "false", "second"),
    ];
    let profile = Profile::new("p", None, Vec::new(), rules).unwrap();

    let ids: Vec<&str> = profile
        .rules_by_object_type("T")
        .map(|r| r.rule_id.as_str())
        .collect();
    assert_eq!(ids, ["r1", "r3"]);
}

#[test]
fn unknown_type_yields_empty_lookups() {
    let profile = Profile::from_json(sample_json()).unwrap();
    assert_eq!(profile.rules_by_object_type("Nope").count(), 0);
    assert_eq!(profile.variables_by_object_type("Nope").count(), 0);
}

#[test]
fn variables_by_object_type_finds_bindings() {
    let variables = vec![
        Variable::new("count", "T", "0", "count + 1"),
        Variable::new("sum", "T", "0", "sum + obj.size"),
        Variable::new("seen", "U", "false", "true"),
    ];
    let profile = Profile::new("p", None, variables, Vec::new()).unwrap();

    let names: Vec<&str> = profile
        .variables_by_object_type("T")
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, ["count", "sum"]);
}

// ─── Uniqueness ───

#[test]
fn duplicate_rule_ids_are_rejected() {
    let rules = vec![
        Rule::new("dup", "T", "true", "one"),
        Rule::new("dup", "U", "true", "two"),
    ];
    let err = Profile::new("p", None, Vec::new(), rules).unwrap_err();
    assert!(matches!(err, ProfileError::DuplicateRule { rule_id } if rule_id == "dup"));
}

#[test]
fn duplicate_variable_names_are_rejected() {
    let variables = vec![
        Variable::new("count", "T", "0", "count + 1"),
        Variable::new("count", "U", "0", "count + 2"),
    ];
    let err = Profile::new("p", None, variables, Vec::new()).unwrap_err();
    assert!(matches!(err, ProfileError::DuplicateVariable { name } if name == "count"));
}

// ─── Builders ───

#[test]
fn rule_builder_attaches_error_details() {
    let rule = Rule::new("r", "T", "false", "desc")
        .with_deferred(true)
        .with_error(ErrorDetails::new(
            "value was %got%",
            vec![ErrorArgument::new("got", "obj.value")],
        ));
    assert!(rule.deferred);
    assert_eq!(rule.error.message, "value was %got%");
    assert_eq!(rule.error.arguments[0].expression, "obj.value");
}
