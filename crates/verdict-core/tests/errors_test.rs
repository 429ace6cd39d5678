//! Tests for error codes at the embedding boundary.

use verdict_core::errors::{ParserError, ProfileError, ValidationError, VerdictErrorCode};

#[test]
fn parser_faults_distinguish_structural_cases() {
    let structural = ParserError::UnresolvableLink {
        link: "kids".to_string(),
    };
    assert_eq!(structural.error_code(), "STRUCTURAL_FAULT");

    let malformed = ParserError::Malformed("bad header".to_string());
    assert_eq!(malformed.error_code(), "PARSER_FAULT");
}

#[test]
fn validation_errors_delegate_to_their_source() {
    let error = ValidationError::Parser {
        context: "root/kids[0]".to_string(),
        source: ParserError::UnresolvableLink {
            link: "kids".to_string(),
        },
    };
    assert_eq!(error.error_code(), "STRUCTURAL_FAULT");
    assert!(error.to_string().contains("root/kids[0]"));

    let runtime = ValidationError::Runtime("boom".to_string());
    assert_eq!(runtime.error_code(), "RUNTIME_FAULT");
}

#[test]
fn code_string_prefixes_the_code() {
    let error = ProfileError::DuplicateRule {
        rule_id: "r-1".to_string(),
    };
    assert_eq!(error.code_string(), "[PROFILE_ERROR] Duplicate rule id: r-1");
}
