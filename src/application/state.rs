// src/application/state.rs

use std::sync::Arc;

use crate::error::AppResult;
use crate::events::{register_logging_handlers, EventBus};
use crate::infrastructure::AppConfig;
use crate::integrations::LibraryApiClient;
use crate::repositories::{
    BookRepository, CategoryRepository, HttpBookRepository, HttpCategoryRepository,
};
use crate::services::LibraryService;

use super::session::CatalogSession;

/// Application context passed explicitly to whatever renders the UI.
/// All fields are Arc-wrapped so the context can be shared cheaply.
pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    pub library_service: Arc<LibraryService>,
}

impl AppState {
    /// Wire infrastructure, repositories and services against the REST backend
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());
        let client = Arc::new(LibraryApiClient::from_config(&config)?);

        // 2. REPOSITORIES
        let book_repo: Arc<dyn BookRepository> = Arc::new(HttpBookRepository::new(client.clone()));
        let category_repo: Arc<dyn CategoryRepository> =
            Arc::new(HttpCategoryRepository::new(client));

        // 3. SERVICES
        let library_service = Arc::new(LibraryService::new(
            book_repo,
            category_repo,
            event_bus.clone(),
        ));

        // 4. EVENT HANDLER REGISTRATION
        register_logging_handlers(&event_bus);

        Ok(Self {
            config,
            event_bus,
            library_service,
        })
    }

    /// Fresh, not yet loaded session for one user
    pub fn new_session(&self) -> CatalogSession {
        CatalogSession::new(self.config.flash_duration)
    }
}
