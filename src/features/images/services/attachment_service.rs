use std::sync::Arc;

use futures::future::join_all;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::images::dtos::ImageDto;
use crate::features::images::models::Image;
use crate::modules::storage::ObjectStore;

/// One image pulled out of a multipart submission.
#[derive(Debug, Clone)]
pub struct UploadImage {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Object key for a beach image. Filenames are scoped per beach, so two
/// beaches can carry the same filename without colliding.
pub fn object_key(beach_id: i64, filename: &str) -> String {
    format!("beaches/{}/{}", beach_id, filename)
}

/// Upload a batch concurrently, best effort. A key that already exists or
/// an upload that fails is logged and skipped; the rest of the batch still
/// goes through. Returns the keys that were actually stored.
pub async fn upload_batch(
    store: &dyn ObjectStore,
    beach_id: i64,
    images: Vec<UploadImage>,
) -> Vec<String> {
    let uploads = images.into_iter().map(|image| async move {
        let key = object_key(beach_id, &image.filename);
        match store.upload(&key, image.data, &image.content_type).await {
            Ok(_) => Some(key),
            Err(AppError::Conflict(_)) => {
                tracing::warn!("Image '{}' already exists, skipping", key);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to upload '{}': {}", key, e);
                None
            }
        }
    });

    join_all(uploads).await.into_iter().flatten().collect()
}

/// Sign every key concurrently, dropping the ones that fail to sign.
async fn presign_all(store: &dyn ObjectStore, images: Vec<Image>) -> Vec<ImageDto> {
    let signed = images.into_iter().map(|image| async move {
        match store.presign_get(&image.path).await {
            Ok(url) => Some(ImageDto {
                id: image.id,
                beach_id: image.beach_id,
                url,
            }),
            Err(e) => {
                tracing::warn!("Failed to sign '{}': {}", image.path, e);
                None
            }
        }
    });

    join_all(signed).await.into_iter().flatten().collect()
}

/// Attaches uploaded images to beaches and resolves them back into signed
/// URLs for display. Runs after the owning transaction has committed, so
/// every step here is best effort.
pub struct AttachmentService {
    pool: PgPool,
    store: Arc<dyn ObjectStore>,
}

impl AttachmentService {
    pub fn new(pool: PgPool, store: Arc<dyn ObjectStore>) -> Self {
        Self { pool, store }
    }

    /// Store the batch and record one `images` row per stored object.
    /// Returns the keys that made it all the way through.
    pub async fn attach_batch(&self, beach_id: i64, images: Vec<UploadImage>) -> Vec<String> {
        let stored = upload_batch(self.store.as_ref(), beach_id, images).await;

        let mut attached = Vec::with_capacity(stored.len());
        for key in stored {
            let inserted = sqlx::query(
                r#"
                INSERT INTO images (beach_id, path) VALUES ($1, $2)
                "#,
            )
            .bind(beach_id)
            .bind(&key)
            .execute(&self.pool)
            .await;

            match inserted {
                Ok(_) => attached.push(key),
                Err(e) => {
                    tracing::error!("Failed to record image '{}': {:?}", key, e);
                    // The object is unreachable without its row, so drop it.
                    if let Err(e) = self.store.delete(&key).await {
                        tracing::warn!("Failed to delete orphaned object '{}': {}", key, e);
                    }
                }
            }
        }

        tracing::info!("Attached {} image(s) to beach {}", attached.len(), beach_id);
        attached
    }

    /// All images of a beach as signed URLs. An image whose signing fails
    /// is dropped from the response rather than failing the request.
    pub async fn list_display(&self, beach_id: i64) -> Result<Vec<ImageDto>> {
        let images = sqlx::query_as::<_, Image>(
            r#"
            SELECT id, beach_id, path, created_at
            FROM images
            WHERE beach_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(beach_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch images for beach {}: {:?}", beach_id, e);
            AppError::Database(e)
        })?;

        Ok(presign_all(self.store.as_ref(), images).await)
    }

}

/// Sign a single stored path for a listing card. Returns `None` when
/// signing fails, the card then renders without an image.
pub async fn sign_display_path(store: &dyn ObjectStore, path: &str) -> Option<String> {
    match store.presign_get(path).await {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Failed to sign '{}': {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::modules::storage::MemoryObjectStore;

    fn image(filename: &str) -> UploadImage {
        UploadImage {
            filename: filename.to_string(),
            content_type: "image/jpeg".to_string(),
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_object_key_scopes_by_beach() {
        assert_eq!(object_key(7, "cove.jpg"), "beaches/7/cove.jpg");
        assert_ne!(object_key(7, "cove.jpg"), object_key(8, "cove.jpg"));
    }

    #[tokio::test]
    async fn test_upload_batch_stores_everything() {
        let store = MemoryObjectStore::new();
        let keys = upload_batch(&store, 1, vec![image("a.jpg"), image("b.jpg")]).await;
        assert_eq!(keys, vec!["beaches/1/a.jpg", "beaches/1/b.jpg"]);
        assert_eq!(store.stored_keys().len(), 2);
    }

    #[tokio::test]
    async fn test_upload_batch_skips_collisions() {
        let store = MemoryObjectStore::new();
        store.seed("beaches/1/a.jpg");

        let keys = upload_batch(&store, 1, vec![image("a.jpg"), image("b.jpg")]).await;
        assert_eq!(keys, vec!["beaches/1/b.jpg"]);
    }

    #[tokio::test]
    async fn test_upload_batch_empty() {
        let store = MemoryObjectStore::new();
        let keys = upload_batch(&store, 1, Vec::new()).await;
        assert!(keys.is_empty());
    }

    #[tokio::test]
    async fn test_presign_all_drops_unsignable_images() {
        let store = MemoryObjectStore::new();
        store.seed("beaches/1/a.jpg");
        store.seed("beaches/1/b.jpg");
        store.break_key("beaches/1/b.jpg");

        let rows = vec![
            Image {
                id: 1,
                beach_id: 1,
                path: "beaches/1/a.jpg".to_string(),
                created_at: Utc::now(),
            },
            Image {
                id: 2,
                beach_id: 1,
                path: "beaches/1/b.jpg".to_string(),
                created_at: Utc::now(),
            },
        ];

        let dtos = presign_all(&store, rows).await;
        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].id, 1);
        assert!(dtos[0].url.contains("beaches/1/a.jpg"));
    }

    #[tokio::test]
    async fn test_sign_display_path_drops_failures() {
        let store = MemoryObjectStore::new();
        store.seed("beaches/1/a.jpg");

        let url = sign_display_path(&store, "beaches/1/a.jpg").await;
        assert!(url.is_some_and(|u| u.contains("beaches/1/a.jpg")));
        assert!(sign_display_path(&store, "beaches/1/missing.jpg")
            .await
            .is_none());
    }
}
