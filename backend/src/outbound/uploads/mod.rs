//! Filesystem storage for uploaded profile pictures.

mod cap_std_picture_store;

pub use cap_std_picture_store::CapStdPictureStore;
