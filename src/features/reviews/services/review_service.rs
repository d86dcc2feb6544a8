use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reviews::dtos::CreateReviewDto;
use crate::features::reviews::models::{Review, ReviewWithAuthor};

pub struct ReviewService {
    pool: PgPool,
}

impl ReviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a review on an approved beach. Unapproved or unknown beaches
    /// are both reported as not found so pending listings stay invisible.
    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        beach_id: i64,
        dto: CreateReviewDto,
    ) -> Result<Review> {
        let approved = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT approved FROM beaches WHERE id = $1
            "#,
        )
        .bind(beach_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up beach {}: {:?}", beach_id, e);
            AppError::Database(e)
        })?;

        if approved != Some(true) {
            return Err(AppError::NotFound(format!(
                "Beach '{}' not found",
                beach_id
            )));
        }

        // The author may never have hit /api/users/me; make sure the
        // profile row exists before the FK insert.
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

        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (title, description, rating, beach_id, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, rating, beach_id, user_id, created_at
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.rating)
        .bind(beach_id)
        .bind(&user.sub)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert review for beach {}: {:?}", beach_id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "User {} reviewed beach {} with rating {}",
            user.sub,
            beach_id,
            dto.rating
        );

        Ok(review)
    }

    /// All reviews for a beach, newest first, with author names attached.
    pub async fn list_by_beach(&self, beach_id: i64) -> Result<Vec<ReviewWithAuthor>> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            r#"
            SELECT r.id, r.title, r.description, r.rating, r.beach_id, r.created_at,
                   u.first_name, u.last_name
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            WHERE r.beach_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(beach_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch reviews for beach {}: {:?}", beach_id, e);
            AppError::Database(e)
        })
    }
}
