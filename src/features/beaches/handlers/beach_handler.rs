use std::collections::HashMap;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::beaches::dtos::{
    BeachDetailDto, BeachDto, BeachFieldsDto, BeachForm, BeachSearchQuery, FilteredBeachesResponse,
    PendingBeachDto,
};
use crate::features::beaches::services::BeachFilter;
use crate::features::beaches::BeachState;
use crate::features::images::services::UploadImage;
use crate::shared::constants::{
    is_image_mime_type_allowed, ALLOWED_IMAGE_MIME_TYPES, MAX_IMAGES_PER_BEACH, MAX_IMAGE_SIZE,
};
use crate::shared::types::{ApiResponse, PaginationMeta, PaginationQuery};
use crate::shared::validation::parse_id_list;

fn take_text(fields: &mut HashMap<String, String>, key: &str) -> Result<String> {
    fields
        .remove(key)
        .ok_or_else(|| AppError::BadRequest(format!("Missing field '{}'", key)))
}

fn take_id(fields: &mut HashMap<String, String>, key: &str) -> Result<i64> {
    take_text(fields, key)?
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Field '{}' must be a numeric id", key)))
}

/// Pull a listing submission out of multipart form data.
///
/// Text fields use the same camelCase names as the JSON DTOs; image parts
/// are named `picture-0` through `picture-4`. Field validation happens
/// here so nothing is persisted for a bad form.
async fn parse_beach_form(mut multipart: Multipart) -> Result<BeachForm> {
    let mut text_fields: HashMap<String, String> = HashMap::new();
    let mut characteristic_ids: Vec<i64> = Vec::new();
    let mut featured_ids: Vec<i64> = Vec::new();
    let mut images: Vec<UploadImage> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name.starts_with("picture-") {
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .ok_or_else(|| AppError::BadRequest("Image part is missing a filename".to_string()))?;
            let data = field.bytes().await.map_err(|e| {
                debug!("Failed to read image bytes: {}", e);
                AppError::BadRequest(format!("Failed to read image data: {}", e))
            })?;

            // An empty picture slot from the form is not an error.
            if data.is_empty() {
                continue;
            }
            if data.len() > MAX_IMAGE_SIZE {
                return Err(AppError::BadRequest(format!(
                    "Image '{}' too large. Maximum size is {} MB",
                    filename,
                    MAX_IMAGE_SIZE / 1024 / 1024
                )));
            }
            if !is_image_mime_type_allowed(&content_type) {
                return Err(AppError::BadRequest(format!(
                    "Image type '{}' is not allowed. Allowed types: {}",
                    content_type,
                    ALLOWED_IMAGE_MIME_TYPES.join(", ")
                )));
            }

            images.push(UploadImage {
                filename,
                content_type,
                data: data.to_vec(),
            });
            continue;
        }

        let value = field.text().await.map_err(|e| {
            AppError::BadRequest(format!("Failed to read field '{}': {}", name, e))
        })?;
        match name.as_str() {
            "characteristicIds" => {
                characteristic_ids = parse_id_list(&value).map_err(AppError::BadRequest)?;
            }
            "featuredIds" => {
                featured_ids = parse_id_list(&value).map_err(AppError::BadRequest)?;
            }
            _ => {
                text_fields.insert(name, value);
            }
        }
    }

    if images.len() > MAX_IMAGES_PER_BEACH {
        return Err(AppError::BadRequest(format!(
            "At most {} images are allowed per listing",
            MAX_IMAGES_PER_BEACH
        )));
    }

    let fields = BeachFieldsDto {
        name: take_text(&mut text_fields, "name")?,
        address: take_text(&mut text_fields, "address")?,
        working_hours: take_text(&mut text_fields, "workingHours")?,
        description: take_text(&mut text_fields, "description")?,
        best_time_to_visit: take_text(&mut text_fields, "bestTimeToVisit")?,
        local_wildlife: take_text(&mut text_fields, "localWildlife")?,
        restaurants_and_bars_nearby: take_text(&mut text_fields, "restaurantsAndBarsNearby")?,
        beach_type_id: take_id(&mut text_fields, "beachTypeId")?,
        beach_depth_id: take_id(&mut text_fields, "beachDepthId")?,
        beach_texture_id: take_id(&mut text_fields, "beachTextureId")?,
        city_id: take_id(&mut text_fields, "cityId")?,
    };
    fields.validate()?;

    Ok(BeachForm {
        fields,
        characteristic_ids,
        featured_ids,
        images,
    })
}

/// Submit a new beach listing for moderation
///
/// Accepts multipart/form-data with the listing fields, `characteristicIds`
/// and `featuredIds` as comma-separated lists, and up to five image parts
/// named `picture-0` .. `picture-4`. The listing always lands unapproved.
#[utoipa::path(
    post,
    path = "/api/beaches",
    tag = "beaches",
    request_body(
        content = BeachFieldsDto,
        content_type = "multipart/form-data",
        description = "Listing fields plus optional images",
    ),
    responses(
        (status = 201, description = "Listing submitted for moderation", body = ApiResponse<BeachDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn submit_beach(
    user: AuthenticatedUser,
    State(state): State<BeachState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<BeachDto>>)> {
    let form = parse_beach_form(multipart).await?;
    let beach = state.moderation.submit(&user, form).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(beach.into()),
            Some("Listing submitted for moderation".to_string()),
            None,
        )),
    ))
}

/// Confirm and publish a pending listing (admin only)
///
/// Takes the same multipart form as submission. All fields are
/// overwritten, the characteristic set is replaced wholesale, and the
/// listing becomes publicly visible.
#[utoipa::path(
    post,
    path = "/api/beaches/{id}/confirm",
    tag = "beaches",
    params(
        ("id" = i64, Path, description = "Beach id")
    ),
    request_body(
        content = BeachFieldsDto,
        content_type = "multipart/form-data",
        description = "Final listing fields plus optional extra images",
    ),
    responses(
        (status = 200, description = "Listing published", body = ApiResponse<BeachDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "Beach not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn confirm_beach(
    user: AuthenticatedUser,
    State(state): State<BeachState>,
    Path(beach_id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<BeachDto>>> {
    state.users.ensure_admin(&user.sub).await?;

    let form = parse_beach_form(multipart).await?;
    let beach = state.moderation.confirm(beach_id, form).await?;

    Ok(Json(ApiResponse::success(
        Some(beach.into()),
        Some("Listing published".to_string()),
        None,
    )))
}

/// List pending listings for the moderation queue (admin only)
#[utoipa::path(
    get,
    path = "/api/beaches/pending",
    tag = "beaches",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Pending listings, oldest first", body = ApiResponse<Vec<PendingBeachDto>>),
        (status = 403, description = "Admin access required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_pending_beaches(
    user: AuthenticatedUser,
    State(state): State<BeachState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<PendingListingPage>>> {
    state.users.ensure_admin(&user.sub).await?;

    let (beaches, meta) = state.moderation.list_pending(&pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(PendingListingPage {
            beaches,
            pagination: meta,
        }),
        None,
        None,
    )))
}

/// One page of the moderation queue.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingListingPage {
    pub beaches: Vec<PendingBeachDto>,
    pub pagination: PaginationMeta,
}

/// Search published beaches
///
/// All filters are optional and combine conjunctively. `characteristicIds`
/// is a comma-separated list matched inclusively: a beach carrying any one
/// of the requested characteristics qualifies.
#[utoipa::path(
    get,
    path = "/api/beaches/search",
    tag = "beaches",
    params(BeachSearchQuery),
    responses(
        (status = 200, description = "Filtered page of published beaches", body = FilteredBeachesResponse),
        (status = 400, description = "Malformed filter")
    )
)]
pub async fn search_beaches(
    State(state): State<BeachState>,
    Query(query): Query<BeachSearchQuery>,
) -> Result<Json<FilteredBeachesResponse>> {
    let filter = BeachFilter::from_query(&query)?;
    let response = state.search.search(&filter, query.page, query.page_size).await;
    Ok(Json(response))
}

/// Fetch a published beach's detail view
#[utoipa::path(
    get,
    path = "/api/beaches/{id}",
    tag = "beaches",
    params(
        ("id" = i64, Path, description = "Beach id")
    ),
    responses(
        (status = 200, description = "Beach detail", body = ApiResponse<BeachDetailDto>),
        (status = 404, description = "Beach not found")
    )
)]
pub async fn get_beach(
    State(state): State<BeachState>,
    Path(beach_id): Path<i64>,
) -> Result<Json<ApiResponse<BeachDetailDto>>> {
    let detail = state.search.get_detail(beach_id).await?;
    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}
