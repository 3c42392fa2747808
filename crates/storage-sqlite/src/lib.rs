//! SQLite storage implementation for WealthTrack.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `wealthtrack-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. Reads go through the r2d2 pool; every write is a job on the
//! single-writer actor and runs inside an immediate transaction, which is
//! the atomicity and locking boundary for transaction recording.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod goals;
pub mod holdings;
pub mod transactions;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from wealthtrack-core for convenience
pub use wealthtrack_core::errors::{DatabaseError, Error, Result};
