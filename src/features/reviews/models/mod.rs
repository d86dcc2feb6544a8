mod review;

pub use review::{average_rating, Review, ReviewWithAuthor};
