//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the insurance search portal
//! test suite.
//!
//! # Modules
//!
//! - `database`: In-memory SQLite pools with migrations and seed data
//! - `fixtures`: Pre-built request bodies

pub mod database;
pub mod fixtures;

pub use database::*;
pub use fixtures::*;
