use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reviews::models::{average_rating, Review, ReviewWithAuthor};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,

    #[validate(length(min = 2, message = "Description must be at least 2 characters"))]
    pub description: String,

    #[validate(range(min = 1, message = "Rating must be at least 1"))]
    pub rating: i32,
}

/// Echo of a freshly created review, before any author join.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReviewDto {
    pub id: i64,
    pub beach_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for CreatedReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            beach_id: review.beach_id,
            title: review.title,
            description: review.description,
            rating: review.rating,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i64,
    pub beach_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub rating: i32,
    pub reviewer_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewWithAuthor> for ReviewDto {
    fn from(review: ReviewWithAuthor) -> Self {
        let reviewer_name = format!("{} {}", review.first_name, review.last_name)
            .trim()
            .to_string();
        Self {
            id: review.id,
            beach_id: review.beach_id,
            title: review.title,
            description: review.description,
            rating: review.rating,
            reviewer_name,
            created_at: review.created_at,
        }
    }
}

/// Reviews for one beach together with the aggregate the listing pages
/// show next to them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListDto {
    pub reviews: Vec<ReviewDto>,
    pub avg_rating: f64,
    pub review_count: i64,
}

impl ReviewListDto {
    pub fn from_reviews(reviews: Vec<ReviewDto>) -> Self {
        let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
        let avg_rating = average_rating(&ratings);
        let review_count = reviews.len() as i64;
        Self {
            reviews,
            avg_rating,
            review_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_review_rejects_short_title() {
        let dto = CreateReviewDto {
            title: "x".to_string(),
            description: "Lovely water".to_string(),
            rating: 4,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_review_rejects_zero_rating() {
        let dto = CreateReviewDto {
            title: "Great".to_string(),
            description: "Lovely water".to_string(),
            rating: 0,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_review_accepts_valid_input() {
        let dto = CreateReviewDto {
            title: "Great".to_string(),
            description: "Lovely water".to_string(),
            rating: 5,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_reviewer_name_trims_missing_last_name() {
        let review = ReviewWithAuthor {
            id: 1,
            title: "Great".to_string(),
            description: None,
            rating: 5,
            beach_id: 2,
            created_at: Utc::now(),
            first_name: "Ana".to_string(),
            last_name: "".to_string(),
        };
        let dto = ReviewDto::from(review);
        assert_eq!(dto.reviewer_name, "Ana");
    }

    #[test]
    fn test_review_list_aggregates_ratings() {
        let make = |id: i64, rating: i32| ReviewDto {
            id,
            beach_id: 7,
            title: "Great".to_string(),
            description: None,
            rating,
            reviewer_name: "Ana".to_string(),
            created_at: Utc::now(),
        };
        let list = ReviewListDto::from_reviews(vec![make(1, 3), make(2, 5)]);
        assert_eq!(list.review_count, 2);
        assert_eq!(list.avg_rating, 4.0);
    }

    #[test]
    fn test_review_list_empty_has_zero_average() {
        let list = ReviewListDto::from_reviews(Vec::new());
        assert_eq!(list.review_count, 0);
        assert_eq!(list.avg_rating, 0.0);
    }
}
