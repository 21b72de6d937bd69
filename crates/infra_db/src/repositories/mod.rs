//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for the catalog and profile partitions. Repositories
//! encapsulate SQL queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Queries are fixed strings parameterized by the `Country` enum's
//!   canonical code; partition names are never built from user input
//! - Uniqueness rules live in the schema, not in check-then-act sequences
//! - Row structs decode with `sqlx::FromRow` and convert to domain types
//!   at the repository boundary

pub mod catalog;
pub mod profile;

pub use catalog::CatalogRepository;
pub use profile::ProfileRepository;
