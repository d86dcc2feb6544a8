use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::images::dtos::ImageDto;
use crate::features::images::services::AttachmentService;
use crate::shared::types::ApiResponse;

/// List a beach's images as signed URLs
#[utoipa::path(
    get,
    path = "/api/beaches/{id}/images",
    params(
        ("id" = i64, Path, description = "Beach id")
    ),
    responses(
        (status = 200, description = "Signed image URLs", body = ApiResponse<Vec<ImageDto>>),
    ),
    tag = "images"
)]
pub async fn list_images(
    State(service): State<Arc<AttachmentService>>,
    Path(beach_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<ImageDto>>>> {
    let images = service.list_display(beach_id).await?;
    Ok(Json(ApiResponse::success(Some(images), None, None)))
}
