use rust_decimal::Decimal;
use sqlx::FromRow;

/// Read-only reference rows backing the beach catalog. None of these are
/// mutated by this service.

#[derive(Debug, Clone, FromRow)]
pub struct Country {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country_id: i64,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Characteristic {
    pub id: i64,
    pub name: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct BeachType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct BeachDepth {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct BeachTexture {
    pub id: i64,
    pub name: String,
    pub img_url: Option<String>,
}
