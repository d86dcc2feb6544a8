use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reviews::handlers;
use crate::features::reviews::services::ReviewService;

/// Public read side: anyone can browse reviews.
pub fn public_routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/api/beaches/{id}/reviews", get(handlers::list_reviews))
        .with_state(service)
}

/// Write side, mounted behind the auth middleware in main.
pub fn protected_routes(service: Arc<ReviewService>) -> Router {
    Router::new()
        .route("/api/beaches/{id}/reviews", post(handlers::create_review))
        .with_state(service)
}
