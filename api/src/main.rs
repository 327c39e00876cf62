//! Campus Coffee API Server
//!
//! Directory of campus points of sale and their users.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod routes;

#[cfg(test)]
mod test_utils;

use adapters::{run_migrations, PostgresPosRepository, PostgresUserRepository};
use app::{PosService, UserService};
use config::Config;
use domain::ports::{PosRepository, UserRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pos_service: Arc<PosService<dyn PosRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,campuscoffee_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campus Coffee API...");

    let config = Config::from_env()?;

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(config.max_connections);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.run_migrations {
        let applied = run_migrations(&db)
            .await
            .context("Failed to apply schema migrations")?;
        tracing::info!("Applied {} schema migration(s)", applied);
    }

    // Create adapters
    let pos_repo: Arc<dyn PosRepository> = Arc::new(PostgresPosRepository::new(db.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(db.clone()));

    let state = AppState {
        pos_service: Arc::new(PosService::new(pos_repo)),
        user_service: Arc::new(UserService::new(user_repo)),
    };

    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
