use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::users::models::User;

/// Response DTO for a user profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub is_admin: bool,
}

impl From<User> for ProfileDto {
    fn from(user: User) -> Self {
        let display_name = user.display_name();
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            display_name,
            is_admin: user.is_admin,
        }
    }
}
