//! SQLite storage implementation for AgriFin.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `agrifin-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The `local_storage` key-value table holding JSON snapshots
//! - Repository implementations for the profile, loan and insurance ledgers
//!
//! ```text
//!   agrifin-core (domain, repository traits)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

pub mod insurance;
pub mod loans;
pub mod local_storage;
pub mod profile;

#[cfg(test)]
mod test_utils;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use insurance::InsuranceRepository;
pub use loans::LoanRepository;
pub use local_storage::LocalStorageRepository;
pub use profile::ProfileRepository;

// Re-export from agrifin-core for convenience
pub use agrifin_core::errors::{DatabaseError, Error, Result};
