//! Tests for the domain error payload and its serde contract.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("Name is required"), ErrorCode::InvalidRequest)]
#[case(Error::conflict("Email already in use"), ErrorCode::Conflict)]
#[case(Error::not_found("User not found"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values() {
    let result = Error::not_found("missing").try_with_trace_id("  ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
fn trace_id_absent_outside_request_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn trace_id_captured_inside_request_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("trace id");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_envelope() {
    let error = Error::internal("Server error")
        .with_trace_id(TRACE_ID)
        .with_cause("user store query failed: database error");

    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "internal_error",
            "message": "Server error",
            "traceId": TRACE_ID,
            "error": "user store query failed: database error",
        })
    );
}

#[rstest]
fn omits_empty_optional_fields() {
    let value = serde_json::to_value(Error::conflict("Email already in use")).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "conflict", "message": "Email already in use" })
    );
}

#[rstest]
fn deserialising_blank_message_fails() {
    let result = serde_json::from_value::<Error>(json!({ "code": "not_found", "message": " " }));
    assert!(result.is_err());
}

#[rstest]
fn deserialising_accepts_snake_case_trace_id() {
    let error: Error = serde_json::from_value(json!({
        "code": "invalid_request",
        "message": "Name is required",
        "trace_id": TRACE_ID,
        "details": { "field": "name" },
    }))
    .expect("deserialise error");

    assert_eq!(error.trace_id(), Some(TRACE_ID));
    assert_eq!(error.details(), Some(&json!({ "field": "name" })));
}
