use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::beaches::{dtos as beaches_dtos, handlers::beach_handler};
use crate::features::catalog::{dtos as catalog_dtos, handlers::catalog_handler};
use crate::features::images::{dtos as images_dtos, handlers::image_handler};
use crate::features::reviews::{dtos as reviews_dtos, handlers::review_handler};
use crate::features::users::{dtos as users_dtos, handlers::profile_handler};
use crate::shared::types::{ApiResponse, Meta, PaginationMeta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Beaches
        beach_handler::submit_beach,
        beach_handler::confirm_beach,
        beach_handler::list_pending_beaches,
        beach_handler::search_beaches,
        beach_handler::get_beach,
        // Reviews
        review_handler::create_review,
        review_handler::list_reviews,
        // Images
        image_handler::list_images,
        // Catalog (public reference data)
        catalog_handler::list_countries,
        catalog_handler::list_cities,
        catalog_handler::list_characteristics,
        catalog_handler::beach_form_options,
        // Users
        profile_handler::get_me,
    ),
    components(
        schemas(
            // Shared
            Meta,
            PaginationMeta,
            // Beaches
            beaches_dtos::BeachFieldsDto,
            beaches_dtos::BeachDto,
            beaches_dtos::BeachDetailDto,
            beaches_dtos::LinkedCharacteristicDto,
            beaches_dtos::FilteredBeachDto,
            beaches_dtos::FilteredBeachesResponse,
            beaches_dtos::PendingBeachDto,
            beach_handler::PendingListingPage,
            ApiResponse<beaches_dtos::BeachDto>,
            ApiResponse<beaches_dtos::BeachDetailDto>,
            ApiResponse<beach_handler::PendingListingPage>,
            // Reviews
            reviews_dtos::CreateReviewDto,
            reviews_dtos::CreatedReviewDto,
            reviews_dtos::ReviewDto,
            reviews_dtos::ReviewListDto,
            ApiResponse<reviews_dtos::CreatedReviewDto>,
            ApiResponse<reviews_dtos::ReviewListDto>,
            // Images
            images_dtos::ImageDto,
            ApiResponse<Vec<images_dtos::ImageDto>>,
            // Catalog
            catalog_dtos::CountryDto,
            catalog_dtos::CityDto,
            catalog_dtos::CharacteristicDto,
            catalog_dtos::BeachTypeDto,
            catalog_dtos::BeachDepthDto,
            catalog_dtos::BeachTextureDto,
            catalog_dtos::BeachFormOptionsDto,
            ApiResponse<Vec<catalog_dtos::CountryDto>>,
            ApiResponse<Vec<catalog_dtos::CityDto>>,
            ApiResponse<Vec<catalog_dtos::CharacteristicDto>>,
            ApiResponse<catalog_dtos::BeachFormOptionsDto>,
            // Users
            users_dtos::ProfileDto,
            ApiResponse<users_dtos::ProfileDto>,
        )
    ),
    tags(
        (name = "beaches", description = "Beach listings: search, detail, submission and moderation"),
        (name = "reviews", description = "Beach reviews"),
        (name = "images", description = "Beach images (signed URLs)"),
        (name = "catalog", description = "Reference data: countries, cities, taxonomies, characteristics"),
        (name = "users", description = "User profiles"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Shoreline API",
        version = "0.1.0",
        description = "API documentation for the Shoreline beach directory",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
