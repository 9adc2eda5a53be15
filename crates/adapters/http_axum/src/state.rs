//! Shared application state for axum handlers.

use std::sync::Arc;

use haikus_app::ports::HaikuRepository;
use haikus_app::services::haiku_service::HaikuService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be `Clone`.
pub struct AppState<HR> {
    /// Haiku CRUD service.
    pub haiku_service: Arc<HaikuService<HR>>,
}

impl<HR> Clone for AppState<HR> {
    fn clone(&self) -> Self {
        Self {
            haiku_service: Arc::clone(&self.haiku_service),
        }
    }
}

impl<HR> AppState<HR>
where
    HR: HaikuRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(haiku_service: HaikuService<HR>) -> Self {
        Self {
            haiku_service: Arc::new(haiku_service),
        }
    }
}
