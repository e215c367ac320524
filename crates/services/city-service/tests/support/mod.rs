//! Shared test setup.

use std::sync::Arc;

use city_service_lib::infra::Database;
use common::DatabaseConfig;

/// Fresh in-memory SQLite database with migrations applied.
///
/// The pool is pinned to a single connection: every SQLite `:memory:`
/// connection is its own database.
pub async fn setup_database() -> Arc<Database> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };

    Arc::new(
        Database::connect(&config)
            .await
            .expect("in-memory database should connect"),
    )
}
