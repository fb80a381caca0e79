//! SQLite storage implementation for PropVest.
//!
//! Implements the repository traits of `propvest-core` with Diesel on SQLite:
//! - Connection pooling and pragmas
//! - Embedded Diesel migrations
//! - A single-writer actor that runs every write in an immediate transaction
//! - Repository implementations and their Diesel row types
//!
//! This is the only crate that depends on Diesel; `core` stays
//! database-agnostic.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod directory;
pub mod favorites;
pub mod investments;
pub mod properties;
pub mod users;

pub use db::{
    create_pool, get_connection, init, open, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

pub use errors::{IntoCore, StorageError};

pub use propvest_core::errors::{DatabaseError, Error, Result};
