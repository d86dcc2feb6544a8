use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub rating: i32,
    pub beach_id: i64,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Review joined with the author's profile for display.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithAuthor {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub rating: i32,
    pub beach_id: i64,
    pub created_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
}

/// Arithmetic mean of ratings, 0.0 for an empty slice.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i64 = ratings.iter().map(|r| *r as i64).sum();
    sum as f64 / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[3, 5]), 4.0);
    }

    #[test]
    fn test_average_rating_empty() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn test_average_rating_single() {
        assert_eq!(average_rating(&[5]), 5.0);
    }
}
