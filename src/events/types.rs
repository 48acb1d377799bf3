// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted when both books and categories were fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_count: usize,
    pub category_count: usize,
}

impl CatalogLoaded {
    pub fn new(book_count: usize, category_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_count,
            category_count,
        }
    }
}

impl DomainEvent for CatalogLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogLoaded" }
}

/// Emitted when fetching books or categories failed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub resource: String, // "books" or "categories"
    pub reason: String,
}

impl CatalogLoadFailed {
    pub fn new(resource: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            resource,
            reason,
        }
    }
}

impl DomainEvent for CatalogLoadFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogLoadFailed" }
}

// ============================================================================
// BOOK EVENTS
// ============================================================================

/// Emitted after the backend accepted a new book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub book_id: String,
    pub code: String,
    pub name: String,
}

impl BookCreated {
    pub fn new(book_id: String, code: String, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            book_id,
            code,
            name,
        }
    }
}

impl DomainEvent for BookCreated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BookCreated" }
}
