use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::users::models::User;

/// Service for user profile lookups and the admin gate.
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a user profile by its external subject id
    pub async fn get_by_id(&self, id: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, is_admin, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch user {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        user.ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    /// Verify the caller is an admin. Moderation endpoints call this before
    /// doing anything else; an unknown user is treated the same as a
    /// non-admin.
    pub async fn ensure_admin(&self, id: &str) -> Result<()> {
        let is_admin = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT is_admin FROM users WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check admin flag for {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        match is_admin {
            Some(true) => Ok(()),
            _ => Err(AppError::Forbidden("Admin access required".to_string())),
        }
    }

}
