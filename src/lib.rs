//! Event management backend: accounts, token auth, events and registrations.
//!
//! Public reads (health, listing and fetching events) are open; every
//! mutation passes through the auth gate, which is the only source of the
//! caller's identity.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router. Used by main and by integration tests.
pub fn create_app(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(handlers::health))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/events", get(handlers::list_events))
        .route("/events/:id", get(handlers::get_event));

    let protected = Router::new()
        .route("/events", post(handlers::create_event))
        .route(
            "/events/:id",
            put(handlers::update_event).delete(handlers::delete_event),
        )
        .route(
            "/events/:id/register",
            post(handlers::register).delete(handlers::cancel),
        )
        .route("/events/:id/registrations", get(handlers::list_registrations))
        .route_layer(from_fn_with_state(state.clone(), middleware::require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
