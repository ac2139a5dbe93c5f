//! Driven port for travel package persistence.
use async_trait::async_trait;

use crate::domain::{TravelPackage, TravelPackageId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by travel package adapters.
    pub enum TravelPackagePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "travel package repository connection failed: {message}",
        /// Query failed or a stored row could not be decoded.
        Query { message: String } => "travel package repository query failed: {message}",
    }
}

/// Read access to stored travel packages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TravelPackageRepository: Send + Sync {
    /// All packages, ordered by title then id.
    async fn list_all(&self) -> Result<Vec<TravelPackage>, TravelPackagePersistenceError>;

    /// One package by identifier.
    async fn find_by_id(
        &self,
        id: &TravelPackageId,
    ) -> Result<Option<TravelPackage>, TravelPackagePersistenceError>;
}
