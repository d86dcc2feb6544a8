use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::catalog::models::{
    BeachDepth, BeachTexture, BeachType, Characteristic, City, Country,
};

/// Service for read-only reference data (countries, cities, beach
/// taxonomies, characteristics).
pub struct CatalogService {
    pool: PgPool,
}

impl CatalogService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_countries(&self) -> Result<Vec<Country>> {
        sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name
            FROM countries
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch countries: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn list_cities_by_country(&self, country_id: i64) -> Result<Vec<City>> {
        sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, country_id, latitude, longitude
            FROM cities
            WHERE country_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(country_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch cities for country {}: {:?}", country_id, e);
            AppError::Database(e)
        })
    }

    pub async fn list_characteristics(&self) -> Result<Vec<Characteristic>> {
        sqlx::query_as::<_, Characteristic>(
            r#"
            SELECT id, name, icon_url
            FROM characteristics
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch characteristics: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn list_beach_types(&self) -> Result<Vec<BeachType>> {
        sqlx::query_as::<_, BeachType>(
            r#"
            SELECT id, name
            FROM beach_types
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch beach types: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn list_beach_depths(&self) -> Result<Vec<BeachDepth>> {
        sqlx::query_as::<_, BeachDepth>(
            r#"
            SELECT id, description
            FROM beach_depths
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch beach depths: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn list_beach_textures(&self) -> Result<Vec<BeachTexture>> {
        sqlx::query_as::<_, BeachTexture>(
            r#"
            SELECT id, name, img_url
            FROM beach_textures
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch beach textures: {:?}", e);
            AppError::Database(e)
        })
    }
}
