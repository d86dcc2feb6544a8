use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::ProfileDto;
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// Get the authenticated caller's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Caller profile", body = ApiResponse<ProfileDto>),
        (status = 404, description = "No profile for this identity")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<ProfileDto>>> {
    let profile = service.get_by_id(&user.sub).await?;
    Ok(Json(ApiResponse::success(
        Some(profile.into()),
        None,
        None,
    )))
}
