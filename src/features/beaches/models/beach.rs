use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Beach {
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
    pub user_id: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Beach joined with the reference names the moderation queue and the
/// detail page display.
#[derive(Debug, Clone, FromRow)]
pub struct BeachDisplayRow {
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
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    pub country_name: String,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
    pub review_count: i64,
    pub avg_rating: f64,
}

/// Shared SELECT for [`BeachDisplayRow`]. Callers append their own WHERE,
/// ORDER BY and paging.
pub(crate) const BEACH_DISPLAY_SELECT: &str = r#"
    SELECT b.id, b.name, b.address, b.working_hours, b.description,
           b.best_time_to_visit, b.local_wildlife, b.restaurants_and_bars_nearby,
           b.beach_type_id, bt.name AS beach_type_name,
           b.beach_depth_id, bd.description AS beach_depth_description,
           b.beach_texture_id, bx.name AS beach_texture_name,
           b.city_id, c.name AS city_name, c.latitude, c.longitude,
           co.name AS country_name,
           u.first_name AS owner_first_name, u.last_name AS owner_last_name,
           b.approved, b.created_at,
           (SELECT COUNT(*) FROM reviews r WHERE r.beach_id = b.id) AS review_count,
           (SELECT COALESCE(AVG(r.rating), 0)::FLOAT8 FROM reviews r WHERE r.beach_id = b.id) AS avg_rating
    FROM beaches b
    JOIN beach_types bt ON bt.id = b.beach_type_id
    JOIN beach_depths bd ON bd.id = b.beach_depth_id
    JOIN beach_textures bx ON bx.id = b.beach_texture_id
    JOIN cities c ON c.id = b.city_id
    JOIN countries co ON co.id = c.country_id
    JOIN users u ON u.id = b.user_id
"#;

/// One search-result card.
#[derive(Debug, Clone, FromRow)]
pub struct FilteredBeachRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub address: String,
    pub image_path: Option<String>,
    pub review_count: i64,
    pub avg_rating: f64,
}

/// Characteristic link joined with its name, grouped per beach.
#[derive(Debug, Clone, FromRow)]
pub struct LinkedCharacteristicRow {
    pub beach_id: i64,
    pub characteristic_id: i64,
    pub name: String,
    pub featured: bool,
}
