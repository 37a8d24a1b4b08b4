#![allow(dead_code)]

use reflect_cors::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => {
            assert!(!result.end_response, "simple decision must not finalize");
            result.headers
        }
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16) {
    match decision {
        CorsDecision::Preflight(result) => {
            assert!(result.end_response, "preflight decision must finalize");
            (result.headers, result.status.expect("preflight status"))
        }
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_not_applicable(decision: CorsDecision) {
    assert!(
        matches!(decision, CorsDecision::NotApplicable),
        "expected not-applicable decision, got {:?}",
        decision
    );
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        headers.get(name),
        Some(expected),
        "header {} mismatch",
        name
    );
}

pub fn assert_header_absent(headers: &Headers, name: &str) {
    assert_eq!(headers.get(name), None, "header {} should be absent", name);
}

pub fn assert_vary_eq<const N: usize>(headers: &Headers, expected: [&str; N]) {
    assert_eq!(headers.vary(), expected, "vary entries mismatch");
}

pub fn assert_vary_contains(headers: &Headers, name: &str) {
    assert!(
        headers.vary().iter().any(|entry| entry == name),
        "vary should contain {}, got {:?}",
        name,
        headers.vary()
    );
}

pub fn assert_vary_is_empty(headers: &Headers) {
    assert!(
        headers.vary().is_empty(),
        "vary should be empty, got {:?}",
        headers.vary()
    );
}
