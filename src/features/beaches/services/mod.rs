mod moderation_service;
mod search_service;

pub use moderation_service::{characteristic_rows, ModerationService};
pub use search_service::{BeachFilter, SearchService};
