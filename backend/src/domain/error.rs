//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and JSON bodies; nothing in here knows about actix.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required field is missing or a field fails validation.
    InvalidRequest,
    /// A uniqueness rule would be violated by the request.
    Conflict,
    /// The referenced record does not exist.
    NotFound,
    /// The store or another dependency failed unexpectedly.
    InternalError,
}

/// Validation failures raised when constructing an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The message is empty once trimmed.
    #[error("error message must not be empty")]
    EmptyMessage,
    /// A trace identifier was supplied but is blank.
    #[error("trace identifier must not be empty")]
    EmptyTraceId,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
/// - `trace_id`, when present, must be non-empty.
///
/// Errors created inside a request scope capture the current [`TraceId`].
///
/// # Examples
/// ```
/// use travel_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("User not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "User not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ErrorDto", into = "ErrorDto")]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
    details: Option<Value>,
    cause: Option<String>,
}

impl Error {
    /// Create a new error, panicking if the message is blank.
    ///
    /// Use [`Error::try_new`] for messages that come from outside the crate.
    ///
    /// # Panics
    /// Panics when `message` is empty once trimmed.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(code: ErrorCode, message: impl Into<String>) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
            cause: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary structured details.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Sanitised description of the underlying failure.
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("Name is required")
    ///     .with_details(json!({ "field": "name" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a description of the underlying failure.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Attach a trace identifier, panicking if it is blank.
    ///
    /// # Panics
    /// Panics when `trace_id` is empty once trimmed.
    pub fn with_trace_id(self, trace_id: impl Into<String>) -> Self {
        match self.try_with_trace_id(trace_id) {
            Ok(value) => value,
            Err(err) => panic!("trace identifiers must satisfy validation: {err}"),
        }
    }

    /// Attach a trace identifier after checking it is not blank.
    pub fn try_with_trace_id(
        mut self,
        trace_id: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let trace_id = trace_id.into();
        if trace_id.trim().is_empty() {
            return Err(ErrorValidationError::EmptyTraceId);
        }
        self.trace_id = Some(trace_id);
        Ok(self)
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct ErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    trace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(default, rename = "error", skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

impl From<Error> for ErrorDto {
    fn from(value: Error) -> Self {
        let Error {
            code,
            message,
            trace_id,
            details,
            cause,
        } = value;
        Self {
            code,
            message,
            trace_id,
            details,
            cause,
        }
    }
}

impl TryFrom<ErrorDto> for Error {
    type Error = ErrorValidationError;

    fn try_from(value: ErrorDto) -> Result<Self, Self::Error> {
        let ErrorDto {
            code,
            message,
            trace_id,
            details,
            cause,
        } = value;

        let mut error = Error::try_new(code, message)?;
        error.trace_id = None;
        if let Some(trace_id) = trace_id {
            error = error.try_with_trace_id(trace_id)?;
        }
        error.details = details;
        error.cause = cause;
        Ok(error)
    }
}

#[cfg(test)]
mod tests;
