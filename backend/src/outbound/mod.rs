//! Outbound adapters implementing the driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: in-process repositories and picture store.
//! - **uploads**: filesystem picture store built on `cap-std`.
//!
//! Adapters translate between domain types and infrastructure
//! representations and hold no business rules.

pub mod memory;
pub mod persistence;
pub mod uploads;
