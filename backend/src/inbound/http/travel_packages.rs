//! Travel package API handlers.
//!
//! ```text
//! GET /api/v1/travel-packages
//! GET /api/v1/travel-packages/{id}
//! ```

use actix_web::{get, web};

use crate::domain::TravelPackage;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, TravelPackageSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_package_id;

/// List all travel packages, ordered by title.
#[utoipa::path(
    get,
    path = "/api/v1/travel-packages",
    responses(
        (status = 200, description = "Travel packages", body = [TravelPackageSchema]),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["travel-packages"],
    operation_id = "listTravelPackages"
)]
#[get("/travel-packages")]
pub async fn list_travel_packages(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<TravelPackage>>> {
    let packages = state.packages.list_packages().await?;
    Ok(web::Json(packages))
}

/// Fetch one travel package.
#[utoipa::path(
    get,
    path = "/api/v1/travel-packages/{id}",
    params(("id" = String, Path, description = "Travel package identifier (UUID)")),
    responses(
        (status = 200, description = "Travel package", body = TravelPackageSchema),
        (status = 404, description = "Travel package not found", body = ErrorSchema),
        (status = 500, description = "Server error", body = ErrorSchema)
    ),
    tags = ["travel-packages"],
    operation_id = "getTravelPackage"
)]
#[get("/travel-packages/{id}")]
pub async fn get_travel_package(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TravelPackage>> {
    let id = parse_package_id(&path.into_inner())?;
    let package = state.packages.fetch_package(&id).await?;
    Ok(web::Json(package))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{MockTravelPackagesQuery, MockUserProfileCommand, MockUsersQuery};
    use crate::domain::{Error, PACKAGE_NOT_FOUND_MESSAGE, PackageTitle, TravelPackageId};

    fn app_state(packages: MockTravelPackagesQuery) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(MockUserProfileCommand::new()),
            Arc::new(MockUsersQuery::new()),
            Arc::new(packages),
        ))
    }

    async fn get_json(packages: MockTravelPackagesQuery, uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new().app_data(app_state(packages)).service(
                web::scope("/api/v1")
                    .service(list_travel_packages)
                    .service(get_travel_package),
            ),
        )
        .await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn list_returns_packages() {
        let mut packages = MockTravelPackagesQuery::new();
        packages.expect_list_packages().return_once(|| {
            Ok(vec![TravelPackage::new(
                TravelPackageId::random(),
                PackageTitle::new("Bali Escape").expect("title"),
            )])
        });

        let (status, body) = get_json(packages, "/api/v1/travel-packages").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["title"], json!("Bali Escape"));
        assert_eq!(body[0]["highlights"], json!([]));
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("5c1d6a7e-0000-4000-8000-000000000009")]
    #[actix_web::test]
    async fn unknown_or_malformed_ids_are_not_found(#[case] id: &str) {
        let mut packages = MockTravelPackagesQuery::new();
        packages
            .expect_fetch_package()
            .returning(|_| Err(Error::not_found(PACKAGE_NOT_FOUND_MESSAGE)));

        let (status, body) = get_json(packages, &format!("/api/v1/travel-packages/{id}")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], json!(PACKAGE_NOT_FOUND_MESSAGE));
    }
}
