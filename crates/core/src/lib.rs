//! PropVest Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the marketplace: listings,
//! favorites, the fractional-equity calculator and purchase flow, KYC and
//! the investor dashboard. It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod dashboard;
pub mod directory;
pub mod errors;
pub mod favorites;
pub mod investments;
pub mod projection;
pub mod properties;
pub mod users;

#[cfg(test)]
mod testing;

// Re-export error types
pub use errors::{DatabaseError, Error, Result};
