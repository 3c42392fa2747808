//! WealthTrack Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for WealthTrack.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod holdings;
pub mod portfolio;
pub mod transactions;
pub mod users;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
