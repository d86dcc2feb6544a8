use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Displayable image: the signed URL is time-limited.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: i64,
    pub beach_id: i64,
    pub url: String,
}
