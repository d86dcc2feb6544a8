use std::sync::Arc;

use futures::future::join_all;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::core::error::{AppError, Result};
use crate::features::beaches::dtos::{
    BeachDetailDto, BeachSearchQuery, FilteredBeachDto, FilteredBeachesResponse,
    LinkedCharacteristicDto,
};
use crate::features::beaches::models::{
    BeachDisplayRow, FilteredBeachRow, LinkedCharacteristicRow, BEACH_DISPLAY_SELECT,
};
use crate::features::images::services::sign_display_path;
use crate::modules::storage::ObjectStore;
use crate::shared::constants::MAX_PAGE_SIZE;
use crate::shared::types::total_pages;
use crate::shared::validation::parse_id_list;

/// Typed filter assembled from the raw search query. Every clause is
/// optional except the approval gate, which is always applied.
#[derive(Debug, Clone, Default)]
pub struct BeachFilter {
    pub city_id: Option<i64>,
    pub beach_type_id: Option<i64>,
    pub beach_texture_id: Option<i64>,
    pub country_id: Option<i64>,
    pub characteristic_ids: Vec<i64>,
}

impl BeachFilter {
    pub fn from_query(query: &BeachSearchQuery) -> Result<Self> {
        let characteristic_ids = match &query.characteristic_ids {
            Some(raw) => parse_id_list(raw).map_err(AppError::BadRequest)?,
            None => Vec::new(),
        };
        Ok(Self {
            city_id: query.city_id,
            beach_type_id: query.beach_type_id,
            beach_texture_id: query.beach_texture_id,
            country_id: query.country_id,
            characteristic_ids,
        })
    }
}

/// Append the conjunctive WHERE clause for `filter` to a query that
/// aliases `beaches` as `b`. Characteristic matching is inclusive OR: a
/// beach carrying any one of the requested ids qualifies.
fn push_predicates(builder: &mut QueryBuilder<'_, Postgres>, filter: &BeachFilter) {
    builder.push(" WHERE b.approved = TRUE");

    if let Some(city_id) = filter.city_id {
        builder.push(" AND b.city_id = ").push_bind(city_id);
    }
    if let Some(beach_type_id) = filter.beach_type_id {
        builder.push(" AND b.beach_type_id = ").push_bind(beach_type_id);
    }
    if let Some(beach_texture_id) = filter.beach_texture_id {
        builder
            .push(" AND b.beach_texture_id = ")
            .push_bind(beach_texture_id);
    }
    if let Some(country_id) = filter.country_id {
        builder
            .push(" AND EXISTS (SELECT 1 FROM cities fc WHERE fc.id = b.city_id AND fc.country_id = ")
            .push_bind(country_id)
            .push(")");
    }
    if !filter.characteristic_ids.is_empty() {
        builder
            .push(" AND EXISTS (SELECT 1 FROM beach_has_characteristics fbhc WHERE fbhc.beach_id = b.id AND fbhc.characteristic_id = ANY(")
            .push_bind(filter.characteristic_ids.clone())
            .push("))");
    }
}

/// SQL OFFSET for a 1-indexed page. `page` comes straight off the query
/// string, so the arithmetic saturates instead of overflowing on absurd
/// values.
fn page_offset(page: i64, limit: i64) -> i64 {
    page.max(1).saturating_sub(1).saturating_mul(limit)
}

/// Read side of the directory: filtered pagination over the approved
/// beaches plus the single-beach detail fetch.
pub struct SearchService {
    pool: PgPool,
    store: Arc<dyn ObjectStore>,
}

impl SearchService {
    pub fn new(pool: PgPool, store: Arc<dyn ObjectStore>) -> Self {
        Self { pool, store }
    }

    /// Run the filtered, paginated search. A query failure degrades to an
    /// empty zeroed page instead of surfacing an error.
    pub async fn search(
        &self,
        filter: &BeachFilter,
        page: i64,
        page_size: i64,
    ) -> FilteredBeachesResponse {
        match self.run_search(filter, page, page_size).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Beach search failed, returning empty page: {:?}", e);
                FilteredBeachesResponse::zeroed(page)
            }
        }
    }

    async fn run_search(
        &self,
        filter: &BeachFilter,
        page: i64,
        page_size: i64,
    ) -> Result<FilteredBeachesResponse> {
        let limit = page_size.clamp(1, MAX_PAGE_SIZE);
        let offset = page_offset(page, limit);

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM beaches b");
        push_predicates(&mut count_builder, filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let mut page_builder: QueryBuilder<Postgres> = QueryBuilder::new(
            r#"
            SELECT b.id, b.name, b.description, b.address,
                   (SELECT i.path FROM images i WHERE i.beach_id = b.id ORDER BY i.id ASC LIMIT 1) AS image_path,
                   (SELECT COUNT(*) FROM reviews r WHERE r.beach_id = b.id) AS review_count,
                   (SELECT COALESCE(AVG(r.rating), 0)::FLOAT8 FROM reviews r WHERE r.beach_id = b.id) AS avg_rating
            FROM beaches b
            "#,
        );
        push_predicates(&mut page_builder, filter);
        page_builder.push(" ORDER BY b.id ASC LIMIT ");
        page_builder.push_bind(limit);
        page_builder.push(" OFFSET ");
        page_builder.push_bind(offset);

        let rows: Vec<FilteredBeachRow> = page_builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await?;

        // The bucket is private, so the representative image path only
        // helps the client once it carries a signature. A path that fails
        // to sign renders as no image.
        let data = join_all(rows.into_iter().map(|row| async {
            let mut dto = FilteredBeachDto::from(row);
            if let Some(path) = dto.image_path.take() {
                dto.image_path = sign_display_path(self.store.as_ref(), &path).await;
            }
            dto
        }))
        .await;

        Ok(FilteredBeachesResponse {
            data,
            total_pages: total_pages(total, limit),
            current_page: page,
            total_count: total,
        })
    }

    /// Detail view of a published beach. Pending listings are invisible
    /// here, a pending id reads as not found.
    pub async fn get_detail(&self, beach_id: i64) -> Result<BeachDetailDto> {
        let query = format!("{} WHERE b.id = $1 AND b.approved = TRUE", BEACH_DISPLAY_SELECT);
        let row = sqlx::query_as::<_, BeachDisplayRow>(&query)
            .bind(beach_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch beach {}: {:?}", beach_id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Beach '{}' not found", beach_id)))?;

        let links = sqlx::query_as::<_, LinkedCharacteristicRow>(
            r#"
            SELECT bhc.beach_id, bhc.characteristic_id, ch.name, bhc.featured
            FROM beach_has_characteristics bhc
            JOIN characteristics ch ON ch.id = bhc.characteristic_id
            WHERE bhc.beach_id = $1
            ORDER BY bhc.id ASC
            "#,
        )
        .bind(beach_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch characteristics for beach {}: {:?}",
                beach_id,
                e
            );
            AppError::Database(e)
        })?;

        let characteristics = links
            .into_iter()
            .map(|row| LinkedCharacteristicDto {
                id: row.characteristic_id,
                name: row.name,
                featured: row.featured,
            })
            .collect();

        Ok(BeachDetailDto::from_parts(row, characteristics))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_only_gates_on_approved() {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT 1 FROM beaches b");
        push_predicates(&mut builder, &BeachFilter::default());
        assert_eq!(builder.sql(), "SELECT 1 FROM beaches b WHERE b.approved = TRUE");
    }

    #[test]
    fn test_filter_clauses_are_conjunctive() {
        let filter = BeachFilter {
            city_id: Some(5),
            beach_type_id: Some(2),
            beach_texture_id: None,
            country_id: None,
            characteristic_ids: vec![],
        };
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT 1 FROM beaches b");
        push_predicates(&mut builder, &filter);
        let sql = builder.sql();
        assert!(sql.contains("b.approved = TRUE"));
        assert!(sql.contains("b.city_id = $1"));
        assert!(sql.contains("b.beach_type_id = $2"));
        assert!(!sql.contains("beach_texture_id"));
    }

    #[test]
    fn test_characteristics_match_any() {
        let filter = BeachFilter {
            characteristic_ids: vec![1, 2, 3],
            ..Default::default()
        };
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT 1 FROM beaches b");
        push_predicates(&mut builder, &filter);
        let sql = builder.sql();
        assert!(sql.contains("characteristic_id = ANY($1)"));
    }

    #[test]
    fn test_country_filters_through_city() {
        let filter = BeachFilter {
            country_id: Some(9),
            ..Default::default()
        };
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT 1 FROM beaches b");
        push_predicates(&mut builder, &filter);
        assert!(builder.sql().contains("fc.country_id = $1"));
    }

    #[test]
    fn test_filter_from_query_parses_id_list() {
        let query = BeachSearchQuery {
            characteristic_ids: Some("1, 2,3".to_string()),
            ..Default::default()
        };
        let filter = BeachFilter::from_query(&query).unwrap();
        assert_eq!(filter.characteristic_ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_from_query_rejects_garbage() {
        let query = BeachSearchQuery {
            characteristic_ids: Some("1,sand".to_string()),
            ..Default::default()
        };
        assert!(BeachFilter::from_query(&query).is_err());
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 12), 0);
        assert_eq!(page_offset(3, 12), 24);
        assert_eq!(page_offset(0, 12), 0);
    }

    #[test]
    fn test_page_offset_saturates_on_huge_page() {
        assert_eq!(page_offset(i64::MAX, 100), i64::MAX);
    }
}
