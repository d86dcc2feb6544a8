use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity extracted from a validated bearer token.
///
/// The identity provider only vouches for who the caller is; whether they are
/// an admin is decided by the `users` table, looked up by `sub`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Subject id issued by the identity provider
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
