//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod profile_form;
pub mod schemas;
pub mod state;
pub mod travel_packages;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;

use actix_web::{Scope, web};

/// Versioned REST scope with every user and travel package endpoint.
///
/// Callers provide [`state::HttpState`] as app data.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(users::get_user)
        .service(users::update_profile)
        .service(travel_packages::list_travel_packages)
        .service(travel_packages::get_travel_package)
}
