//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{
    Error, PACKAGE_NOT_FOUND_MESSAGE, TravelPackageId, USER_NOT_FOUND_MESSAGE, UserId,
};

/// Detail codes attached to request validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MalformedBody,
    UnsupportedContentType,
    UnsupportedMediaType,
    PayloadTooLarge,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MalformedBody => "malformed_body",
            Self::UnsupportedContentType => "unsupported_content_type",
            Self::UnsupportedMediaType => "unsupported_media_type",
            Self::PayloadTooLarge => "payload_too_large",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

pub(crate) const BODY: FieldName = FieldName::new("body");
pub(crate) const PICTURE: FieldName = FieldName::new("picture");

/// Build an `invalid_request` error pointing at `field`.
pub(crate) fn field_error(field: FieldName, code: ValidationCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.0,
        "code": code.as_str(),
    }))
}

/// Parse a user id path segment.
///
/// A malformed id cannot name a stored user, so it is reported as missing.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| Error::not_found(USER_NOT_FOUND_MESSAGE))
}

/// Parse a travel package id path segment; malformed ids are reported as missing.
pub(crate) fn parse_package_id(raw: &str) -> Result<TravelPackageId, Error> {
    TravelPackageId::new(raw).map_err(|_| Error::not_found(PACKAGE_NOT_FOUND_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("u1")]
    #[case("")]
    #[case("11111111-1111-1111-1111-11111111111")]
    fn malformed_user_ids_are_not_found(#[case] raw: &str) {
        let err = parse_user_id(raw).expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), USER_NOT_FOUND_MESSAGE);
    }

    #[rstest]
    fn field_errors_carry_details() {
        let err = field_error(PICTURE, ValidationCode::PayloadTooLarge, "too big");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({"field": "picture", "code": "payload_too_large"}))
        );
    }
}
