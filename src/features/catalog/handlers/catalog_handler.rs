use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tokio::try_join;

use crate::core::error::Result;
use crate::features::catalog::dtos::{
    BeachFormOptionsDto, CharacteristicDto, CityDto, CityQuery, CountryDto,
};
use crate::features::catalog::services::CatalogService;
use crate::shared::types::ApiResponse;

/// List all countries
#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "All countries", body = ApiResponse<Vec<CountryDto>>),
    ),
    tag = "catalog"
)]
pub async fn list_countries(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<CountryDto>>>> {
    let countries = service.list_countries().await?;
    Ok(Json(ApiResponse::success(
        Some(countries.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// List cities for a country
#[utoipa::path(
    get,
    path = "/api/cities",
    params(CityQuery),
    responses(
        (status = 200, description = "Cities in the country", body = ApiResponse<Vec<CityDto>>),
    ),
    tag = "catalog"
)]
pub async fn list_cities(
    State(service): State<Arc<CatalogService>>,
    Query(query): Query<CityQuery>,
) -> Result<Json<ApiResponse<Vec<CityDto>>>> {
    let cities = service.list_cities_by_country(query.country_id).await?;
    Ok(Json(ApiResponse::success(
        Some(cities.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// List all characteristics
#[utoipa::path(
    get,
    path = "/api/characteristics",
    responses(
        (status = 200, description = "All characteristics", body = ApiResponse<Vec<CharacteristicDto>>),
    ),
    tag = "catalog"
)]
pub async fn list_characteristics(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<Vec<CharacteristicDto>>>> {
    let characteristics = service.list_characteristics().await?;
    Ok(Json(ApiResponse::success(
        Some(characteristics.into_iter().map(Into::into).collect()),
        None,
        None,
    )))
}

/// Everything the listing form needs: types, depths, textures and
/// characteristics, fetched concurrently.
#[utoipa::path(
    get,
    path = "/api/beach-options",
    responses(
        (status = 200, description = "Form reference data", body = ApiResponse<BeachFormOptionsDto>),
    ),
    tag = "catalog"
)]
pub async fn beach_form_options(
    State(service): State<Arc<CatalogService>>,
) -> Result<Json<ApiResponse<BeachFormOptionsDto>>> {
    let (types, depths, textures, characteristics) = try_join!(
        service.list_beach_types(),
        service.list_beach_depths(),
        service.list_beach_textures(),
        service.list_characteristics(),
    )?;

    let options = BeachFormOptionsDto {
        beach_types: types.into_iter().map(Into::into).collect(),
        beach_depths: depths.into_iter().map(Into::into).collect(),
        beach_textures: textures.into_iter().map(Into::into).collect(),
        characteristics: characteristics.into_iter().map(Into::into).collect(),
    };

    Ok(Json(ApiResponse::success(Some(options), None, None)))
}
