//! Builders wiring adapters into the HTTP state.
//!
//! Without a database the user and package stores are empty in-memory
//! repositories: every user lookup and profile update answers 404 and the
//! package list is empty. That mode only suits local smoke checks.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use travel_backend::domain::ports::{PictureStore, TravelPackageRepository, UserRepository};
use travel_backend::domain::{ProfileService, TravelPackagesService};
use travel_backend::inbound::http::state::HttpState;
use travel_backend::outbound::memory::{InMemoryTravelPackageRepository, InMemoryUserRepository};
use travel_backend::outbound::persistence::{DieselTravelPackageRepository, DieselUserRepository};
use travel_backend::outbound::uploads::CapStdPictureStore;

use super::ServerConfig;

fn assemble<U, T, P>(users: Arc<U>, packages: Arc<T>, pictures: Arc<P>) -> HttpState
where
    U: UserRepository + 'static,
    T: TravelPackageRepository + 'static,
    P: PictureStore + 'static,
{
    let profile = Arc::new(ProfileService::new(users, pictures));
    let packages = Arc::new(TravelPackagesService::new(packages));
    HttpState::new(profile.clone(), profile, packages)
}

/// Build the HTTP state from configuration.
///
/// Uses the Diesel repositories when a pool is configured, otherwise
/// empty in-memory stores. Pictures always go to the upload directory.
///
/// # Errors
/// Returns [`std::io::Error`] when the upload directory cannot be opened.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let pictures = Arc::new(CapStdPictureStore::open(&config.upload_dir)?);
    info!(dir = %pictures.root().display(), "picture uploads enabled");

    let state = match &config.db_pool {
        Some(pool) => assemble(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselTravelPackageRepository::new(pool.clone())),
            pictures,
        ),
        None => {
            warn!(
                "no database configured; using empty in-memory stores, \
                 so user reads and profile updates will return 404"
            );
            assemble(
                Arc::new(InMemoryUserRepository::default()),
                Arc::new(InMemoryTravelPackageRepository::default()),
                pictures,
            )
        }
    };

    Ok(web::Data::new(
        state.with_upload_max_bytes(config.upload_max_bytes),
    ))
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, SocketAddr};

    use rstest::rstest;
    use travel_backend::domain::{ErrorCode, UserId};

    use super::*;

    fn config_without_database(upload_dir: &std::path::Path) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            db_pool: None,
            upload_dir: upload_dir.to_path_buf(),
            upload_max_bytes: 1024,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn without_database_users_are_not_found_and_packages_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = build_http_state(&config_without_database(dir.path())).expect("state");
        let id = UserId::new("11111111-1111-1111-1111-111111111111").expect("user id");

        let err = state.users.fetch_user(&id).await.expect_err("no users");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(state.packages.list_packages().await.expect("list").is_empty());
        assert_eq!(state.upload_max_bytes, 1024);
    }
}
