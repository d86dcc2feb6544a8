pub mod auth;
pub mod beaches;
pub mod catalog;
pub mod images;
pub mod reviews;
pub mod users;
