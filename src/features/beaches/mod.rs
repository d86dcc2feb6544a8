use std::sync::Arc;

use crate::features::users::services::UserService;

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

/// Shared state for the beach routes: the write side (moderation), the
/// read side (search) and the admin gate.
#[derive(Clone)]
pub struct BeachState {
    pub moderation: Arc<services::ModerationService>,
    pub search: Arc<services::SearchService>,
    pub users: Arc<UserService>,
}
