//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn store_failure() -> Error {
    Error::internal("user store failure")
        .with_cause("user repository query failed: relation \"users\" does not exist")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"table": "users"}))
}

async fn body_of(error: &Error) -> (StatusCode, Option<String>, Value) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, header, body)
}

#[rstest]
#[case(Error::invalid_request("Name is required"), StatusCode::BAD_REQUEST)]
#[case(Error::conflict("Email already in use"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_with_cause(store_failure: Error) {
    let (status, header, body) = body_of(&store_failure).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(body["message"], json!("Server error"));
    assert_eq!(body["code"], json!("internal_error"));
    assert_eq!(
        body["error"],
        json!("user repository query failed: relation \"users\" does not exist")
    );
    assert_eq!(body["traceId"], json!(TRACE_ID));
    assert!(body.get("details").is_none());
}

#[rstest]
#[actix_web::test]
async fn internal_error_without_cause_reports_original_message() {
    let (_, _, body) = body_of(&Error::internal("picture storage failure")).await;
    assert_eq!(body["message"], json!("Server error"));
    assert_eq!(body["error"], json!("picture storage failure"));
}

#[rstest]
#[actix_web::test]
async fn conflict_keeps_message_and_details() {
    let err = Error::conflict("Email already in use")
        .with_details(json!({"field": "email", "code": "email_taken"}));

    let (status, header, body) = body_of(&err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert_eq!(body["message"], json!("Email already in use"));
    assert_eq!(body["code"], json!("conflict"));
    assert_eq!(body["details"]["field"], json!("email"));
    assert!(body.get("error").is_none());
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    let actix_err = actix_web::error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), SERVER_ERROR_MESSAGE);
    assert_eq!(err.details(), None);
}
