//! Nestegg Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the retirement contribution
//! planner: contribution settings, the contribution log and the retirement
//! projection calculator. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod contributions;
pub mod errors;
pub mod projection;
pub mod settings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
