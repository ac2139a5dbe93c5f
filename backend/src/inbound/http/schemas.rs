//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. The wrappers here mirror their
//! serialised shape and register under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or a field fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The submitted email belongs to another user.
    #[schema(rename = "conflict")]
    Conflict,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Name is required")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, e.g. the offending field.
    details: Option<serde_json::Value>,
    /// Failure description on `internal_error` responses.
    #[schema(example = "user repository connection failed: timed out")]
    error: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Alex")]
    name: String,
    #[schema(example = "alex@example.com")]
    email: Option<String>,
    /// `/uploads/<file>` for uploaded pictures, otherwise a URL.
    #[schema(example = "/uploads/7d0c9a3e-2b1f-4f43-9d0e-3c2f5f8e1a6b.png")]
    picture: Option<String>,
}

/// JSON body for `PUT /api/v1/users/{id}/profile`.
#[derive(ToSchema)]
#[schema(as = ProfileUpdate)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ProfileUpdateSchema {
    /// Required; blank counts as missing.
    #[schema(example = "Alex")]
    name: String,
    /// Must not belong to another user.
    #[schema(example = "alex@example.com")]
    email: Option<String>,
    /// Picture URL, stored verbatim.
    picture: Option<String>,
}

/// Multipart body for `PUT /api/v1/users/{id}/profile`.
#[derive(ToSchema)]
#[schema(as = ProfileUpdateForm)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ProfileUpdateFormSchema {
    name: String,
    email: Option<String>,
    /// Image file (PNG, JPEG, GIF or WebP) or a picture URL text part.
    #[schema(value_type = Option<String>, format = Binary)]
    picture: Option<Vec<u8>>,
}

/// Success body for profile updates.
#[derive(ToSchema)]
#[schema(as = ProfileUpdated)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ProfileUpdatedSchema {
    #[schema(example = "Profile updated successfully")]
    message: String,
    user: UserSchema,
}

/// OpenAPI schema for [`crate::domain::ItineraryDay`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ItineraryDay)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ItineraryDaySchema {
    day: Option<u32>,
    title: Option<String>,
    description: Option<String>,
    activities: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::PackageReview`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PackageReview)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PackageReviewSchema {
    name: Option<String>,
    rating: Option<f64>,
    comment: Option<String>,
    date: Option<String>,
}

/// OpenAPI schema for [`crate::domain::PackageFaq`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PackageFaq)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PackageFaqSchema {
    question: Option<String>,
    answer: Option<String>,
}

/// OpenAPI schema for [`crate::domain::TravelPackage`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TravelPackage)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TravelPackageSchema {
    #[schema(example = "5c1d6a7e-0000-4000-8000-000000000001")]
    id: String,
    #[schema(example = "Bali Escape")]
    title: String,
    location: Option<String>,
    #[schema(example = "7 days")]
    duration: Option<String>,
    price: Option<f64>,
    rating: Option<f64>,
    review_count: Option<u32>,
    description: Option<String>,
    image: Option<String>,
    highlights: Vec<String>,
    itinerary: Vec<ItineraryDaySchema>,
    inclusions: Vec<String>,
    exclusions: Vec<String>,
    reviews: Vec<PackageReviewSchema>,
    faqs: Vec<PackageFaqSchema>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn domain_schemas_register_under_domain_names() {
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert_eq!(UserSchema::name(), "crate.domain.User");
        assert_eq!(TravelPackageSchema::name(), "crate.domain.TravelPackage");
    }

    #[test]
    fn error_schema_uses_wire_field_names() {
        let json = schema_json::<ErrorSchema>();
        assert!(json.contains("traceId"));
        assert!(json.contains("\"error\""));
    }

    #[test]
    fn error_code_schema_lists_conflict() {
        let json = schema_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "conflict", "not_found", "internal_error"] {
            assert!(json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn travel_package_schema_is_camel_case() {
        let json = schema_json::<TravelPackageSchema>();
        assert!(json.contains("reviewCount"));
        assert!(json.contains("createdAt"));
    }
}
