use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::images::handlers;
use crate::features::images::services::AttachmentService;

/// Public image routes. Access control is the signed URL itself.
pub fn routes(service: Arc<AttachmentService>) -> Router {
    Router::new()
        .route("/api/beaches/{id}/images", get(handlers::list_images))
        .with_state(service)
}
