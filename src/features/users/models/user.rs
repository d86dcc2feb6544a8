use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a user profile.
///
/// Identity (credentials, sessions) lives with the external provider; this
/// row only carries the display name and the admin flag.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(first: &str, last: &str) -> User {
        User {
            id: "sub-1".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(sample("Ana", "Marin").display_name(), "Ana Marin");
    }

    #[test]
    fn test_display_name_trims_missing_parts() {
        assert_eq!(sample("Ana", "").display_name(), "Ana");
        assert_eq!(sample("", "").display_name(), "");
    }
}
