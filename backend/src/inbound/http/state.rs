//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TravelPackagesQuery, UserProfileCommand, UsersQuery};

/// Default cap on uploaded picture size: 5 MiB.
pub const DEFAULT_UPLOAD_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub profile: Arc<dyn UserProfileCommand>,
    pub users: Arc<dyn UsersQuery>,
    pub packages: Arc<dyn TravelPackagesQuery>,
    /// Largest picture upload accepted, in bytes.
    pub upload_max_bytes: usize,
}

impl HttpState {
    /// Bundle the driving ports with the default upload limit.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use travel_backend::domain::{ProfileService, TravelPackagesService};
    /// use travel_backend::inbound::http::state::{DEFAULT_UPLOAD_MAX_BYTES, HttpState};
    /// use travel_backend::outbound::memory::{
    ///     InMemoryPictureStore, InMemoryTravelPackageRepository, InMemoryUserRepository,
    /// };
    ///
    /// let profile = Arc::new(ProfileService::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(InMemoryPictureStore::default()),
    /// ));
    /// let packages = Arc::new(TravelPackagesService::new(Arc::new(
    ///     InMemoryTravelPackageRepository::default(),
    /// )));
    /// let state = HttpState::new(profile.clone(), profile, packages);
    /// assert_eq!(state.upload_max_bytes, DEFAULT_UPLOAD_MAX_BYTES);
    /// ```
    pub fn new(
        profile: Arc<dyn UserProfileCommand>,
        users: Arc<dyn UsersQuery>,
        packages: Arc<dyn TravelPackagesQuery>,
    ) -> Self {
        Self {
            profile,
            users,
            packages,
            upload_max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
        }
    }

    /// Override the picture upload limit.
    pub fn with_upload_max_bytes(mut self, upload_max_bytes: usize) -> Self {
        self.upload_max_bytes = upload_max_bytes;
        self
    }
}
