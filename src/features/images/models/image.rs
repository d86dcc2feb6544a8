use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored object attached to a beach. `path` is the object key inside
/// the bucket, never a URL.
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: i64,
    pub beach_id: i64,
    pub path: String,
    pub created_at: DateTime<Utc>,
}
