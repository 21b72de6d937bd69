//! Database test helpers

use infra_db::{create_pool, run_migrations, seed_catalog, DatabaseConfig, DatabasePool};

/// Creates an in-memory SQLite pool with the schema applied
///
/// The pool is capped at a single connection so every query sees the same
/// in-memory database.
pub async fn memory_pool() -> DatabasePool {
    let pool = create_pool(DatabaseConfig::new("sqlite::memory:").max_connections(1))
        .await
        .expect("Failed to create in-memory pool");
    run_migrations(&pool).await.expect("Failed to migrate");
    pool
}

/// Creates an in-memory pool with the demo catalog seeded
pub async fn seeded_memory_pool() -> DatabasePool {
    let pool = memory_pool().await;
    seed_catalog(&pool).await.expect("Failed to seed catalog");
    pool
}
