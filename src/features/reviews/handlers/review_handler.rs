use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reviews::dtos::{CreateReviewDto, CreatedReviewDto, ReviewListDto};
use crate::features::reviews::services::ReviewService;
use crate::shared::types::ApiResponse;

/// Leave a review on an approved beach
#[utoipa::path(
    post,
    path = "/api/beaches/{id}/reviews",
    params(
        ("id" = i64, Path, description = "Beach id")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<CreatedReviewDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Beach not found or not approved")
    ),
    security(("bearer_auth" = [])),
    tag = "reviews"
)]
pub async fn create_review(
    State(service): State<Arc<ReviewService>>,
    user: AuthenticatedUser,
    Path(beach_id): Path<i64>,
    AppJson(dto): AppJson<CreateReviewDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedReviewDto>>)> {
    dto.validate()?;

    let review = service.create(&user, beach_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(review.into()),
            Some("Review submitted".to_string()),
            None,
        )),
    ))
}

/// List reviews for a beach, newest first
#[utoipa::path(
    get,
    path = "/api/beaches/{id}/reviews",
    params(
        ("id" = i64, Path, description = "Beach id")
    ),
    responses(
        (status = 200, description = "Reviews for the beach", body = ApiResponse<ReviewListDto>),
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(service): State<Arc<ReviewService>>,
    Path(beach_id): Path<i64>,
) -> Result<Json<ApiResponse<ReviewListDto>>> {
    let reviews = service.list_by_beach(beach_id).await?;
    let list = ReviewListDto::from_reviews(reviews.into_iter().map(Into::into).collect());
    Ok(Json(ApiResponse::success(Some(list), None, None)))
}
