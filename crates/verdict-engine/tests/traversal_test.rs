//! Traversal-order and cycle-safety tests.

use std::rc::Rc;

use verdict_core::config::ValidatorConfig;
use verdict_core::model::{InMemoryParser, ObjectNode};
use verdict_core::profile::{Profile, Rule};
use verdict_core::results::ValidationResult;
use verdict_core::traits::ObjectRef;
use verdict_engine::Validator;

/// Validate with a pass-logging rule on type `N`, returning the visit
/// order as recorded context paths.
fn visit_contexts(root: ObjectRef) -> Vec<String> {
    let profile = Profile::new(
        "order",
        None,
        Vec::new(),
        vec![Rule::new("n-1", "N", "true", "visit marker")],
    )
    .unwrap();
    let validator = Validator::new(
        profile,
        ValidatorConfig::default().with_log_passed_checks(true),
    );
    let result = validator.validate(&InMemoryParser::new(root)).unwrap();
    result
        .assertions
        .iter()
        .map(|a| a.location.context.clone())
        .collect()
}

fn node() -> ObjectNode {
    ObjectNode::new("N")
}

// ─── Depth-first order ───

#[test]
fn children_visit_in_declared_order_depth_first() {
    let root = Rc::new(node());
    let x = Rc::new(node());
    let y = Rc::new(node());
    let z = Rc::new(node());
    let grandchild = Rc::new(node());

    x.add_link("c", vec![grandchild as ObjectRef]);
    root.add_link("a", vec![x as ObjectRef, y as ObjectRef]);
    root.add_link("b", vec![z as ObjectRef]);

    assert_eq!(
        visit_contexts(root),
        [
            "root",
            "root/a[0]",
            "root/a[0]/c[0]",
            "root/a[1]",
            "root/b[0]",
        ]
    );
}

#[test]
fn context_paths_carry_id_and_extra_context() {
    let root = Rc::new(node());
    let child = Rc::new(node().with_id("n1").with_extra_context("anno"));
    root.add_link("kids", vec![child as ObjectRef]);

    assert_eq!(visit_contexts(root), ["root", "root/kids[0](n1){anno}"]);
}

// ─── Cycle safety ───

fn count_checks(root: ObjectRef, rule_type: &str) -> ValidationResult {
    let profile = Profile::new(
        "cycles",
        None,
        Vec::new(),
        vec![Rule::new("marker", rule_type, "true", "visit marker")],
    )
    .unwrap();
    let validator = Validator::new(
        profile,
        ValidatorConfig::default().with_log_passed_checks(true),
    );
    validator.validate(&InMemoryParser::new(root)).unwrap()
}

#[test]
fn cycle_through_identified_object_terminates() {
    let a = Rc::new(ObjectNode::new("A").with_id("1"));
    let b = Rc::new(ObjectNode::new("B"));
    a.add_link("next", vec![b.clone() as ObjectRef]);
    b.add_link("back", vec![a.clone() as ObjectRef]);

    let result = count_checks(a, "A");
    assert_eq!(result.total_checks, 1, "A must be visited exactly once");
}

#[test]
fn cycle_back_to_identified_root_terminates() {
    let root = Rc::new(ObjectNode::new("N").with_id("root-id"));
    let child = Rc::new(node());
    root.add_link("down", vec![child.clone() as ObjectRef]);
    child.add_link("up", vec![root.clone() as ObjectRef]);

    let result = count_checks(root, "N");
    // Root once, child once; the back-edge is not re-entered.
    assert_eq!(result.total_checks, 2);
}

#[test]
fn shared_identified_child_visits_once() {
    let root = Rc::new(node());
    let shared = Rc::new(ObjectNode::new("S").with_id("s"));
    root.add_link("l1", vec![shared.clone() as ObjectRef]);
    root.add_link("l2", vec![shared as ObjectRef]);

    let result = count_checks(root, "S");
    assert_eq!(result.total_checks, 1);
}

#[test]
fn unidentified_objects_may_recur() {
    let root = Rc::new(node());
    let shared = Rc::new(ObjectNode::new("S"));
    root.add_link("l1", vec![shared.clone() as ObjectRef]);
    root.add_link("l2", vec![shared as ObjectRef]);

    let result = count_checks(root, "S");
    // No id means no deduplication; both occurrences are visited.
    assert_eq!(result.total_checks, 2);
}

// ─── Empty links ───

#[test]
fn empty_child_lists_are_fine() {
    let root = Rc::new(node());
    root.add_link("empty", Vec::new());

    assert_eq!(visit_contexts(root), ["root"]);
}
