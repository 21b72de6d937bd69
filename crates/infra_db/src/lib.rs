//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the insurance search
//! portal, backed by SQLite through SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, providing data access
//! abstractions that hide the database implementation details from the
//! domain layer. The schema bootstraps itself through embedded migrations,
//! and the policy catalog is seeded on first run.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, run_migrations, seed_catalog};
//!
//! let pool = create_pool(DatabaseConfig::new("sqlite://insurance.db")).await?;
//! run_migrations(&pool).await?;
//! seed_catalog(&pool).await?;
//! ```

pub mod error;
pub mod pool;
pub mod repositories;
pub mod seed;

pub use error::DatabaseError;
pub use pool::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use seed::seed_catalog;
