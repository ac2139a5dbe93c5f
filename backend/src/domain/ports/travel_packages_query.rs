//! Driving port for travel package reads.

use async_trait::async_trait;

use crate::domain::{Error, TravelPackage, TravelPackageId};

/// Use-case port for browsing travel packages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TravelPackagesQuery: Send + Sync {
    /// List every package in listing order.
    async fn list_packages(&self) -> Result<Vec<TravelPackage>, Error>;

    /// Fetch one package or a `not_found` error.
    async fn fetch_package(&self, id: &TravelPackageId) -> Result<TravelPackage, Error>;
}
