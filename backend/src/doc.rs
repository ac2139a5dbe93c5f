//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint of the inbound layer (users,
//! travel packages, health) together with the schema wrappers from
//! [`crate::inbound::http::schemas`]. Domain types stay free of utoipa
//! derives.
//!
//! Swagger UI serves the document in debug builds.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, ItineraryDaySchema, PackageFaqSchema, PackageReviewSchema,
    ProfileUpdateFormSchema, ProfileUpdateSchema, ProfileUpdatedSchema, TravelPackageSchema,
    UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel backend API",
        description = "Profile updates for travellers and read access to travel packages.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_profile,
        crate::inbound::http::travel_packages::list_travel_packages,
        crate::inbound::http::travel_packages::get_travel_package,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        ProfileUpdateSchema,
        ProfileUpdateFormSchema,
        ProfileUpdatedSchema,
        TravelPackageSchema,
        ItineraryDaySchema,
        PackageReviewSchema,
        PackageFaqSchema
    )),
    tags(
        (name = "users", description = "User lookup and profile updates"),
        (name = "travel-packages", description = "Travel package documents"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
