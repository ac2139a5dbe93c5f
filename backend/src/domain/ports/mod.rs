//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod picture_store;
mod travel_package_repository;
mod travel_packages_query;
mod user_profile_command;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use picture_store::MockPictureStore;
pub use picture_store::{PictureStore, PictureStoreError};
#[cfg(test)]
pub use travel_package_repository::MockTravelPackageRepository;
pub use travel_package_repository::{TravelPackagePersistenceError, TravelPackageRepository};
#[cfg(test)]
pub use travel_packages_query::MockTravelPackagesQuery;
pub use travel_packages_query::TravelPackagesQuery;
#[cfg(test)]
pub use user_profile_command::MockUserProfileCommand;
pub use user_profile_command::UserProfileCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
