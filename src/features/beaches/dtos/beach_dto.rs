use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::beaches::models::{Beach, BeachDisplayRow, FilteredBeachRow};
use crate::features::images::services::UploadImage;
use crate::features::reviews::dtos::ReviewDto;
use crate::shared::constants::DEFAULT_PAGE_SIZE;

/// The mutable fields of a listing. Submit and Confirm share the exact
/// same constraints; Confirm simply overwrites with a fresh copy.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeachFieldsDto {
    #[validate(length(min = 2, max = 80, message = "Name must be 2 to 80 characters"))]
    pub name: String,

    #[validate(length(min = 2, message = "Address must be at least 2 characters"))]
    pub address: String,

    #[validate(length(min = 2, max = 80, message = "Working hours must be 2 to 80 characters"))]
    pub working_hours: String,

    #[validate(length(min = 2, message = "Description must be at least 2 characters"))]
    pub description: String,

    #[validate(length(min = 2, max = 100, message = "Best time to visit must be 2 to 100 characters"))]
    pub best_time_to_visit: String,

    #[validate(length(min = 2, message = "Local wildlife must be at least 2 characters"))]
    pub local_wildlife: String,

    #[validate(length(min = 2, message = "Restaurants and bars must be at least 2 characters"))]
    pub restaurants_and_bars_nearby: String,

    #[validate(range(min = 1, message = "A beach type must be selected"))]
    pub beach_type_id: i64,

    #[validate(range(min = 1, message = "A beach depth must be selected"))]
    pub beach_depth_id: i64,

    #[validate(range(min = 1, message = "A beach texture must be selected"))]
    pub beach_texture_id: i64,

    #[validate(range(min = 1, message = "A city must be selected"))]
    pub city_id: i64,
}

/// Fully parsed listing submission: validated fields, the two
/// characteristic id sets, and the decoded image parts.
#[derive(Debug, Clone)]
pub struct BeachForm {
    pub fields: BeachFieldsDto,
    pub characteristic_ids: Vec<i64>,
    pub featured_ids: Vec<i64>,
    pub images: Vec<UploadImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeachDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub working_hours: String,
    pub description: String,
    pub best_time_to_visit: String,
    pub local_wildlife: String,
    pub restaurants_and_bars_nearby: String,
    pub beach_type_id: i64,
    pub beach_depth_id: i64,
    pub beach_texture_id: i64,
    pub city_id: i64,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Beach> for BeachDto {
    fn from(b: Beach) -> Self {
        Self {
            id: b.id,
            name: b.name,
            address: b.address,
            working_hours: b.working_hours,
            description: b.description,
            best_time_to_visit: b.best_time_to_visit,
            local_wildlife: b.local_wildlife,
            restaurants_and_bars_nearby: b.restaurants_and_bars_nearby,
            beach_type_id: b.beach_type_id,
            beach_depth_id: b.beach_depth_id,
            beach_texture_id: b.beach_texture_id,
            city_id: b.city_id,
            approved: b.approved,
            created_at: b.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkedCharacteristicDto {
    pub id: i64,
    pub name: String,
    pub featured: bool,
}

/// Query parameters for the public beach search.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BeachSearchQuery {
    pub city_id: Option<i64>,
    pub beach_type_id: Option<i64>,
    pub beach_texture_id: Option<i64>,
    pub country_id: Option<i64>,
    /// Comma-separated characteristic ids; a beach matching any one of
    /// them qualifies
    pub characteristic_ids: Option<String>,
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilteredBeachDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub image_path: Option<String>,
    pub review_count: i64,
    pub avg_rating: f64,
}

impl From<FilteredBeachRow> for FilteredBeachDto {
    fn from(row: FilteredBeachRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            address: row.address,
            image_path: row.image_path,
            review_count: row.review_count,
            avg_rating: row.avg_rating,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilteredBeachesResponse {
    pub data: Vec<FilteredBeachDto>,
    pub total_pages: i64,
    pub current_page: i64,
    pub total_count: i64,
}

impl FilteredBeachesResponse {
    /// What the search returns when the query itself fails: an empty page
    /// rather than an error.
    pub fn zeroed(current_page: i64) -> Self {
        Self {
            data: Vec::new(),
            total_pages: 0,
            current_page,
            total_count: 0,
        }
    }
}

/// A queue entry for the moderation screen, with everything the admin
/// needs to review and prefill the confirmation form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingBeachDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub working_hours: String,
    pub description: String,
    pub best_time_to_visit: String,
    pub local_wildlife: String,
    pub restaurants_and_bars_nearby: String,
    pub beach_type_id: i64,
    pub beach_type_name: String,
    pub beach_depth_id: i64,
    pub beach_depth_description: String,
    pub beach_texture_id: i64,
    pub beach_texture_name: String,
    pub city_id: i64,
    pub city_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country_name: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
    pub characteristics: Vec<LinkedCharacteristicDto>,
    pub reviews: Vec<ReviewDto>,
}

impl PendingBeachDto {
    pub fn from_parts(
        row: BeachDisplayRow,
        characteristics: Vec<LinkedCharacteristicDto>,
        reviews: Vec<ReviewDto>,
    ) -> Self {
        let owner_name = format!("{} {}", row.owner_first_name, row.owner_last_name)
            .trim()
            .to_string();
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            working_hours: row.working_hours,
            description: row.description,
            best_time_to_visit: row.best_time_to_visit,
            local_wildlife: row.local_wildlife,
            restaurants_and_bars_nearby: row.restaurants_and_bars_nearby,
            beach_type_id: row.beach_type_id,
            beach_type_name: row.beach_type_name,
            beach_depth_id: row.beach_depth_id,
            beach_depth_description: row.beach_depth_description,
            beach_texture_id: row.beach_texture_id,
            beach_texture_name: row.beach_texture_name,
            city_id: row.city_id,
            city_name: row.city_name,
            latitude: row.latitude.and_then(|d| d.to_f64()),
            longitude: row.longitude.and_then(|d| d.to_f64()),
            country_name: row.country_name,
            owner_name,
            created_at: row.created_at,
            characteristics,
            reviews,
        }
    }
}

/// The public detail page for an approved beach.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeachDetailDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub working_hours: String,
    pub description: String,
    pub best_time_to_visit: String,
    pub local_wildlife: String,
    pub restaurants_and_bars_nearby: String,
    pub beach_type_name: String,
    pub beach_depth_description: String,
    pub beach_texture_name: String,
    pub city_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country_name: String,
    pub avg_rating: f64,
    pub review_count: i64,
    pub characteristics: Vec<LinkedCharacteristicDto>,
}

impl BeachDetailDto {
    pub fn from_parts(row: BeachDisplayRow, characteristics: Vec<LinkedCharacteristicDto>) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            working_hours: row.working_hours,
            description: row.description,
            best_time_to_visit: row.best_time_to_visit,
            local_wildlife: row.local_wildlife,
            restaurants_and_bars_nearby: row.restaurants_and_bars_nearby,
            beach_type_name: row.beach_type_name,
            beach_depth_description: row.beach_depth_description,
            beach_texture_name: row.beach_texture_name,
            city_name: row.city_name,
            latitude: row.latitude.and_then(|d| d.to_f64()),
            longitude: row.longitude.and_then(|d| d.to_f64()),
            country_name: row.country_name,
            avg_rating: row.avg_rating,
            review_count: row.review_count,
            characteristics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> BeachFieldsDto {
        BeachFieldsDto {
            name: "Golden Cove".to_string(),
            address: "12 Shore Road".to_string(),
            working_hours: "08:00-20:00".to_string(),
            description: "A quiet cove with clear water".to_string(),
            best_time_to_visit: "Early summer".to_string(),
            local_wildlife: "Gulls, crabs".to_string(),
            restaurants_and_bars_nearby: "Two beach bars".to_string(),
            beach_type_id: 1,
            beach_depth_id: 2,
            beach_texture_id: 3,
            city_id: 4,
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert!(valid_fields().validate().is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut fields = valid_fields();
        fields.name = "x".to_string();
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_long_name_rejected() {
        let mut fields = valid_fields();
        fields.name = "a".repeat(81);
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_unselected_city_rejected() {
        let mut fields = valid_fields();
        fields.city_id = 0;
        assert!(fields.validate().is_err());
    }

    #[test]
    fn test_long_best_time_rejected() {
        let mut fields = valid_fields();
        fields.best_time_to_visit = "a".repeat(101);
        assert!(fields.validate().is_err());
    }
}
