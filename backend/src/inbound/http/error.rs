//! HTTP adapter mapping for domain errors.
//!
//! Domain errors stay HTTP-agnostic; this module turns them into status codes
//! and the shared JSON envelope. Email conflicts are answered with 400, which
//! is what existing clients of the profile endpoint expect.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Client-facing message for every internal failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Replace internal failures with the generic message.
///
/// The failure description survives in `error`; structured details do not.
fn redact_if_internal(error: &Error) -> Error {
    if !matches!(error.code(), ErrorCode::InternalError) {
        return error.clone();
    }
    let cause = error.cause().unwrap_or(error.message()).to_owned();
    let mut redacted = Error::internal(SERVER_ERROR_MESSAGE).with_cause(cause);
    if let Some(id) = error.trace_id() {
        redacted = redacted.with_trace_id(id.to_owned());
    }
    redacted
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(SERVER_ERROR_MESSAGE).with_cause("request handling failed")
    }
}

#[cfg(test)]
mod tests;
