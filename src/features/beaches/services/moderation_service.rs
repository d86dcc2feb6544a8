use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::beaches::dtos::{BeachForm, LinkedCharacteristicDto, PendingBeachDto};
use crate::features::beaches::models::{
    Beach, BeachDisplayRow, LinkedCharacteristicRow, BEACH_DISPLAY_SELECT,
};
use crate::features::images::services::{AttachmentService, UploadImage};
use crate::features::reviews::dtos::ReviewDto;
use crate::features::reviews::models::ReviewWithAuthor;
use crate::shared::types::{PaginationMeta, PaginationQuery};

/// The characteristic link rows a listing should carry: one per regular id
/// and one per featured id. No dedup between the sets, the same id in both
/// legitimately produces two rows differing only in `featured`.
pub fn characteristic_rows(characteristic_ids: &[i64], featured_ids: &[i64]) -> Vec<(i64, bool)> {
    characteristic_ids
        .iter()
        .map(|id| (*id, false))
        .chain(featured_ids.iter().map(|id| (*id, true)))
        .collect()
}

/// Listing lifecycle: submission into the pending queue, admin
/// confirmation into the public directory.
pub struct ModerationService {
    pool: PgPool,
    attachments: Arc<AttachmentService>,
}

impl ModerationService {
    pub fn new(pool: PgPool, attachments: Arc<AttachmentService>) -> Self {
        Self { pool, attachments }
    }

    /// Create a pending listing. The beach row and its characteristic links
    /// commit atomically; images are attached after the commit, best
    /// effort, so a storage failure can never lose the listing.
    pub async fn submit(&self, user: &AuthenticatedUser, form: BeachForm) -> Result<Beach> {
        sqlx::query(
            r#"
            INSERT INTO users (id) VALUES ($1)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&user.sub)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to ensure user row for {}: {:?}", user.sub, e);
            AppError::Database(e)
        })?;

        let mut tx = self.pool.begin().await?;

        let beach = sqlx::query_as::<_, Beach>(
            r#"
            INSERT INTO beaches (
                name, address, working_hours, description, best_time_to_visit,
                local_wildlife, restaurants_and_bars_nearby,
                beach_type_id, beach_depth_id, beach_texture_id, city_id,
                user_id, approved
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, FALSE)
            RETURNING id, name, address, working_hours, description,
                      best_time_to_visit, local_wildlife, restaurants_and_bars_nearby,
                      beach_type_id, beach_depth_id, beach_texture_id, city_id,
                      user_id, approved, created_at, updated_at
            "#,
        )
        .bind(&form.fields.name)
        .bind(&form.fields.address)
        .bind(&form.fields.working_hours)
        .bind(&form.fields.description)
        .bind(&form.fields.best_time_to_visit)
        .bind(&form.fields.local_wildlife)
        .bind(&form.fields.restaurants_and_bars_nearby)
        .bind(form.fields.beach_type_id)
        .bind(form.fields.beach_depth_id)
        .bind(form.fields.beach_texture_id)
        .bind(form.fields.city_id)
        .bind(&user.sub)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert beach submission: {:?}", e);
            AppError::Database(e)
        })?;

        for (characteristic_id, featured) in
            characteristic_rows(&form.characteristic_ids, &form.featured_ids)
        {
            sqlx::query(
                r#"
                INSERT INTO beach_has_characteristics (beach_id, characteristic_id, featured)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(beach.id)
            .bind(characteristic_id)
            .bind(featured)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to link characteristic {} to beach {}: {:?}",
                    characteristic_id,
                    beach.id,
                    e
                );
                AppError::Database(e)
            })?;
        }

        tx.commit().await?;

        tracing::info!(
            "User {} submitted beach {} ('{}') for moderation",
            user.sub,
            beach.id,
            beach.name
        );

        self.spawn_attach(beach.id, form.images);

        Ok(beach)
    }

    /// Admin confirmation: overwrite every mutable field, flip `approved`,
    /// and replace the characteristic set wholesale. Delete plus reinsert
    /// runs in one transaction; any failed insert abandons the whole thing.
    pub async fn confirm(&self, beach_id: i64, form: BeachForm) -> Result<Beach> {
        let mut tx = self.pool.begin().await?;

        let beach = sqlx::query_as::<_, Beach>(
            r#"
            UPDATE beaches SET
                name = $1, address = $2, working_hours = $3, description = $4,
                best_time_to_visit = $5, local_wildlife = $6,
                restaurants_and_bars_nearby = $7,
                beach_type_id = $8, beach_depth_id = $9, beach_texture_id = $10,
                city_id = $11, approved = TRUE, updated_at = NOW()
            WHERE id = $12
            RETURNING id, name, address, working_hours, description,
                      best_time_to_visit, local_wildlife, restaurants_and_bars_nearby,
                      beach_type_id, beach_depth_id, beach_texture_id, city_id,
                      user_id, approved, created_at, updated_at
            "#,
        )
        .bind(&form.fields.name)
        .bind(&form.fields.address)
        .bind(&form.fields.working_hours)
        .bind(&form.fields.description)
        .bind(&form.fields.best_time_to_visit)
        .bind(&form.fields.local_wildlife)
        .bind(&form.fields.restaurants_and_bars_nearby)
        .bind(form.fields.beach_type_id)
        .bind(form.fields.beach_depth_id)
        .bind(form.fields.beach_texture_id)
        .bind(form.fields.city_id)
        .bind(beach_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to confirm beach {}: {:?}", beach_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Beach '{}' not found", beach_id)))?;

        sqlx::query(
            r#"
            DELETE FROM beach_has_characteristics WHERE beach_id = $1
            "#,
        )
        .bind(beach_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to clear characteristics for beach {}: {:?}",
                beach_id,
                e
            );
            AppError::Database(e)
        })?;

        for (characteristic_id, featured) in
            characteristic_rows(&form.characteristic_ids, &form.featured_ids)
        {
            sqlx::query(
                r#"
                INSERT INTO beach_has_characteristics (beach_id, characteristic_id, featured)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(beach_id)
            .bind(characteristic_id)
            .bind(featured)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to link characteristic {} to beach {}: {:?}",
                    characteristic_id,
                    beach_id,
                    e
                );
                AppError::Database(e)
            })?;
        }

        tx.commit().await?;

        tracing::info!("Beach {} confirmed and published", beach_id);

        self.spawn_attach(beach_id, form.images);

        Ok(beach)
    }

    /// The moderation queue, oldest submissions first.
    pub async fn list_pending(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<PendingBeachDto>, PaginationMeta)> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM beaches WHERE approved = FALSE
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count pending beaches: {:?}", e);
            AppError::Database(e)
        })?;

        let query = format!(
            "{} WHERE b.approved = FALSE ORDER BY b.created_at ASC LIMIT $1 OFFSET $2",
            BEACH_DISPLAY_SELECT
        );
        let rows = sqlx::query_as::<_, BeachDisplayRow>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch pending beaches: {:?}", e);
                AppError::Database(e)
            })?;

        let beach_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut links = self.links_by_beach(&beach_ids).await?;
        let mut reviews = self.reviews_by_beach(&beach_ids).await?;

        let meta = PaginationMeta::new(pagination.page, pagination.limit(), total);
        let beaches = rows
            .into_iter()
            .map(|row| {
                let characteristics = links.remove(&row.id).unwrap_or_default();
                let beach_reviews = reviews.remove(&row.id).unwrap_or_default();
                PendingBeachDto::from_parts(row, characteristics, beach_reviews)
            })
            .collect();

        Ok((beaches, meta))
    }

    fn spawn_attach(&self, beach_id: i64, images: Vec<UploadImage>) {
        if images.is_empty() {
            return;
        }
        let attachments = Arc::clone(&self.attachments);
        tokio::spawn(async move {
            let attached = attachments.attach_batch(beach_id, images).await;
            tracing::debug!("Post-commit attach for beach {}: {:?}", beach_id, attached);
        });
    }

    async fn links_by_beach(
        &self,
        beach_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<LinkedCharacteristicDto>>> {
        if beach_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, LinkedCharacteristicRow>(
            r#"
            SELECT bhc.beach_id, bhc.characteristic_id, ch.name, bhc.featured
            FROM beach_has_characteristics bhc
            JOIN characteristics ch ON ch.id = bhc.characteristic_id
            WHERE bhc.beach_id = ANY($1)
            ORDER BY bhc.id ASC
            "#,
        )
        .bind(beach_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch characteristic links: {:?}", e);
            AppError::Database(e)
        })?;

        let mut grouped: HashMap<i64, Vec<LinkedCharacteristicDto>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.beach_id)
                .or_default()
                .push(LinkedCharacteristicDto {
                    id: row.characteristic_id,
                    name: row.name,
                    featured: row.featured,
                });
        }
        Ok(grouped)
    }

    async fn reviews_by_beach(
        &self,
        beach_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<ReviewDto>>> {
        if beach_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ReviewWithAuthor>(
            r#"
            SELECT r.id, r.title, r.description, r.rating, r.beach_id, r.created_at,
                   u.first_name, u.last_name
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            WHERE r.beach_id = ANY($1)
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(beach_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch reviews for pending beaches: {:?}", e);
            AppError::Database(e)
        })?;

        let mut grouped: HashMap<i64, Vec<ReviewDto>> = HashMap::new();
        for row in rows {
            grouped.entry(row.beach_id).or_default().push(row.into());
        }
        Ok(grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characteristic_rows_union() {
        let rows = characteristic_rows(&[1, 2], &[3]);
        assert_eq!(rows, vec![(1, false), (2, false), (3, true)]);
    }

    #[test]
    fn test_characteristic_rows_no_dedup_across_sets() {
        let rows = characteristic_rows(&[4], &[4]);
        assert_eq!(rows, vec![(4, false), (4, true)]);
    }

    #[test]
    fn test_characteristic_rows_featured_only() {
        let rows = characteristic_rows(&[], &[7]);
        assert_eq!(rows, vec![(7, true)]);
    }

    #[test]
    fn test_characteristic_rows_empty() {
        assert!(characteristic_rows(&[], &[]).is_empty());
    }
}
