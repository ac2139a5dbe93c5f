//! Travel package read service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    TravelPackagePersistenceError, TravelPackageRepository, TravelPackagesQuery,
};
use crate::domain::{Error, TravelPackage, TravelPackageId};

/// Client message for a missing travel package.
pub const PACKAGE_NOT_FOUND_MESSAGE: &str = "Travel package not found";

/// Service implementing [`TravelPackagesQuery`] over a repository.
#[derive(Clone)]
pub struct TravelPackagesService<R> {
    packages: Arc<R>,
}

impl<R> TravelPackagesService<R> {
    /// Create a service backed by `packages`.
    pub fn new(packages: Arc<R>) -> Self {
        Self { packages }
    }
}

fn map_package_error(err: TravelPackagePersistenceError) -> Error {
    error!(error = %err, "travel package store failure");
    Error::internal("travel package store failure").with_cause(err.to_string())
}

#[async_trait]
impl<R> TravelPackagesQuery for TravelPackagesService<R>
where
    R: TravelPackageRepository,
{
    async fn list_packages(&self) -> Result<Vec<TravelPackage>, Error> {
        self.packages.list_all().await.map_err(map_package_error)
    }

    async fn fetch_package(&self, id: &TravelPackageId) -> Result<TravelPackage, Error> {
        self.packages
            .find_by_id(id)
            .await
            .map_err(map_package_error)?
            .ok_or_else(|| Error::not_found(PACKAGE_NOT_FOUND_MESSAGE))
    }
}
