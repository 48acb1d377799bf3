// src/events/handlers/logging_handler.rs
//
// Writes every catalog event to the application log.

use crate::events::{BookCreated, CatalogLoadFailed, CatalogLoaded, EventBus};

pub fn register_logging_handlers(bus: &EventBus) {
    bus.subscribe::<CatalogLoaded, _>(|event| {
        log::info!(
            "Catalog loaded: {} books, {} categories",
            event.book_count,
            event.category_count
        );
    });

    bus.subscribe::<CatalogLoadFailed, _>(|event| {
        log::warn!("Could not load {}: {}", event.resource, event.reason);
    });

    bus.subscribe::<BookCreated, _>(|event| {
        log::info!("Book {} ({}) created with id {}", event.code, event.name, event.book_id);
    });
}
