//! City Service Library
//!
//! CRUD for the City entity over HTTP. The crate is split into:
//! - **infra**: session provider (connection pool) and migrations
//! - **repository**: SeaORM data access for the `cities` table
//! - **service**: city use cases
//! - **http**: axum handlers, routes and OpenAPI docs

pub mod config;
pub mod http;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::CityServiceConfig;
use crate::http::{create_router, AppState};
use crate::infra::Database;

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Connect, apply pending migrations and serve HTTP until shutdown.
pub async fn run_server(config: CityServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let database = Arc::new(Database::connect(&config.database).await?);

    // Create app state and router
    let state = AppState::from_database(database);
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = config.service.addr().parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: CityServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
