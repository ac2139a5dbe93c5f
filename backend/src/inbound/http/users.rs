//! User profile API handlers.
//!
//! ```text
//! GET /api/v1/users/{id}
//! PUT /api/v1/users/{id}/profile {"name":"Alex","email":"alex@example.com"}
//! ```

use actix_web::{HttpRequest, HttpResponse, get, put, web};
use serde::Serialize;

use crate::domain::{Error, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::profile_form::read_profile_form;
use crate::inbound::http::schemas::{
    ErrorSchema, ProfileUpdateFormSchema, ProfileUpdateSchema, ProfileUpdatedSchema, UserSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Success message returned by the profile update endpoint.
pub const PROFILE_UPDATED_MESSAGE: &str = "Profile updated successfully";

/// Response body for a successful profile update.
#[derive(Debug, Serialize)]
pub struct ProfileUpdatedBody {
    pub message: &'static str,
    pub user: User,
}

/// Report a failed user lookup ahead of a body rejection, so unknown users stay 404.
async fn reject_for_user(state: &HttpState, user_id: &UserId, rejection: Error) -> Error {
    match state.users.fetch_user(user_id).await {
        Ok(_) => rejection,
        Err(lookup) => lookup,
    }
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let user_id = parse_user_id(&path.into_inner())?;
    let user = state.users.fetch_user(&user_id).await?;
    Ok(web::Json(user))
}

/// Update a user's name, email and picture.
///
/// Accepts JSON or `multipart/form-data`. An uploaded `picture` file wins over
/// a `picture` URL; omitted optional fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/profile",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body(
        description = "Profile fields; send multipart to upload a picture file",
        content(
            (ProfileUpdateSchema = "application/json"),
            (ProfileUpdateFormSchema = "multipart/form-data")
        )
    ),
    responses(
        (status = 200, description = "Profile updated", body = ProfileUpdatedSchema),
        (status = 400, description = "Missing name, invalid field or email already in use", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateProfile"
)]
#[put("/users/{id}/profile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let user_id = parse_user_id(&path.into_inner())?;
    let form = match read_profile_form(&req, payload, state.upload_max_bytes).await {
        Ok(form) => form,
        Err(err) => return Err(reject_for_user(&state, &user_id, err).await),
    };
    let user = state.profile.update_profile(form.into_request(user_id)).await?;
    Ok(HttpResponse::Ok().json(ProfileUpdatedBody {
        message: PROFILE_UPDATED_MESSAGE,
        user,
    }))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
