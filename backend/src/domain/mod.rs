//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed entities used by the API and persistence
//! layers, plus the services implementing the driving ports. Nothing in this
//! module depends on actix or Diesel.
//!
//! Public surface:
//! - Error, ErrorCode: transport-agnostic failure payload.
//! - TraceId: per-request correlation identifier.
//! - User and its field newtypes.
//! - ProfileChanges, ProfileUpdateRequest: profile update inputs.
//! - TravelPackage and its nested entries.
//! - ProfileService, TravelPackagesService: driving port implementations.

pub mod error;
pub mod ports;
pub mod profile;
pub mod profile_service;
pub mod trace_id;
pub mod travel_package;
pub mod travel_package_service;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::profile::{
    PictureContentType, PictureUpload, ProfileChanges, ProfileUpdateRequest,
    ProfileValidationError, StoredPicture, UPLOADS_PATH_PREFIX,
};
pub use self::profile_service::{EMAIL_IN_USE_MESSAGE, ProfileService, USER_NOT_FOUND_MESSAGE};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::travel_package::{
    ItineraryDay, PackageFaq, PackageReview, PackageTitle, TravelPackage, TravelPackageId,
    TravelPackageValidationError, sort_for_listing,
};
pub use self::travel_package_service::{PACKAGE_NOT_FOUND_MESSAGE, TravelPackagesService};
pub use self::user::{
    EMAIL_MAX, EmailAddress, PICTURE_REF_MAX, PictureRef, USER_NAME_MAX, User, UserId, UserName,
    UserValidationError,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use travel_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("User not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
