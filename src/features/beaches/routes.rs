use axum::{
    routing::{get, post},
    Router,
};

use crate::features::beaches::handlers;
use crate::features::beaches::BeachState;

/// Read-only directory routes, no auth.
pub fn public_routes(state: BeachState) -> Router {
    Router::new()
        .route("/api/beaches/search", get(handlers::search_beaches))
        .route("/api/beaches/{id}", get(handlers::get_beach))
        .with_state(state)
}

/// Submission and moderation, mounted behind the auth middleware. The
/// admin gate for confirm/pending lives in the handlers, not here.
pub fn protected_routes(state: BeachState) -> Router {
    Router::new()
        .route("/api/beaches", post(handlers::submit_beach))
        .route("/api/beaches/pending", get(handlers::list_pending_beaches))
        .route("/api/beaches/{id}/confirm", post(handlers::confirm_beach))
        .with_state(state)
}
