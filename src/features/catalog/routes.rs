use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::catalog::handlers;
use crate::features::catalog::services::CatalogService;

/// Public reference-data routes. No auth required.
pub fn catalog_routes(service: Arc<CatalogService>) -> Router {
    Router::new()
        .route("/api/countries", get(handlers::list_countries))
        .route("/api/cities", get(handlers::list_cities))
        .route("/api/characteristics", get(handlers::list_characteristics))
        .route("/api/beach-options", get(handlers::beach_form_options))
        .with_state(service)
}
