//! Router construction
//!
//! Kept apart from `main` so tests can serve the same routes over in-memory
//! repositories.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/pos",
            get(handlers::list_pos).post(handlers::create_pos),
        )
        .route("/api/pos/filter", get(handlers::filter_pos))
        .route(
            "/api/pos/:id",
            get(handlers::get_pos)
                .put(handlers::update_pos)
                .delete(handlers::delete_pos),
        )
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/api/users/filter", get(handlers::filter_users))
        .route(
            "/api/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
