//! Integration tests for the stop hook decision flow
//!
//! These tests verify the complete path a hook invocation takes:
//! - Payload parsing with Cursor's stop event format
//! - Rule evaluation (abort suppression, continuation ceiling)
//! - Response serialization matching Cursor's expectations

use flywheel_core::engine::{self, CONTINUE_MESSAGE, LIMIT_MESSAGE};
use flywheel_core::harness::CursorHarness;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Run an input through the full parse/evaluate/format path and return
/// the serialized response line, as the CLI would print it.
fn decide(input: &str) -> String {
    let payload = CursorHarness::parse_event(input).unwrap();
    let decision = engine::evaluate(&payload);
    let response = CursorHarness::format_response(&decision);
    serde_json::to_string(&response).unwrap()
}

fn followup_line(message: &str) -> String {
    json!({ "followup_message": message }).to_string()
}

#[test]
fn test_completed_turn_continues() {
    let output = decide(r#"{"status":"completed","loop_count":0}"#);
    assert_eq!(output, followup_line(CONTINUE_MESSAGE));
}

#[test]
fn test_aborted_turn_is_suppressed() {
    let output = decide(r#"{"status":"aborted","loop_count":2}"#);
    assert_eq!(output, "{}");
}

#[test]
fn test_error_at_ceiling_hands_off() {
    let output = decide(r#"{"status":"error","loop_count":5}"#);
    assert_eq!(output, followup_line(LIMIT_MESSAGE));
}

#[test]
fn test_empty_object_uses_defaults() {
    let output = decide("{}");
    assert_eq!(output, followup_line(CONTINUE_MESSAGE));
}

#[test]
fn test_ceiling_is_inclusive() {
    assert_eq!(
        decide(r#"{"loop_count":4}"#),
        followup_line(CONTINUE_MESSAGE)
    );
    assert_eq!(decide(r#"{"loop_count":5}"#), followup_line(LIMIT_MESSAGE));
}

#[test]
fn test_abort_wins_at_any_loop_count() {
    assert_eq!(decide(r#"{"status":"aborted","loop_count":0}"#), "{}");
    assert_eq!(decide(r#"{"status":"aborted","loop_count":5}"#), "{}");
    assert_eq!(decide(r#"{"status":"aborted","loop_count":99}"#), "{}");
}

#[test]
fn test_extra_fields_are_ignored() {
    let input = r#"{
        "conversation_id": "conv-123",
        "generation_id": "gen-456",
        "workspace_roots": ["/home/user/project"],
        "status": "completed",
        "loop_count": 1
    }"#;
    assert_eq!(decide(input), followup_line(CONTINUE_MESSAGE));
}

#[test]
fn test_same_payload_same_output() {
    let input = r#"{"status":"completed","loop_count":3}"#;
    assert_eq!(decide(input), decide(input));
}

#[test]
fn test_malformed_input_is_a_decode_error() {
    assert!(CursorHarness::parse_event("not valid json").is_err());
    assert!(CursorHarness::parse_event("").is_err());
    assert!(CursorHarness::parse_event("null").is_err());
    assert!(CursorHarness::parse_event(r#"{"loop_count":"three"}"#).is_err());
    assert!(CursorHarness::parse_event(r#"{"status":7}"#).is_err());
}
