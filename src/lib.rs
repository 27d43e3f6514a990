//! Campus: an in-memory university registry.
//!
//! The registry models a small university: students, faculty, dual-role
//! members, and the courses that connect them. Everything is owned by the
//! [`University`] aggregate; see [`registry`] for the operation surface and
//! [`models`] for the entity types.

pub mod error;
pub mod models;
pub mod registry;

pub use error::{RegistryError, Result};
pub use registry::University;
