pub mod review_handler;

pub use review_handler::{create_review, list_reviews};
