//! In-process adapters for the driven ports.
//!
//! Used by the server when no database URL is configured and by tests. They
//! honour the same contracts as the PostgreSQL adapters, including the unique
//! email rule on writes.

mod picture_store;
mod travel_package_repository;
mod user_repository;

pub use picture_store::InMemoryPictureStore;
pub use travel_package_repository::InMemoryTravelPackageRepository;
pub use user_repository::InMemoryUserRepository;
