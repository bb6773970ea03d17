//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State cloned into every request.
///
/// Holds the single [`LinkService`] (and through it the registry) created
/// at startup.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self { link_service }
    }
}
