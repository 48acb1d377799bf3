// src/lib.rs
// SkyGarden - Library inventory client
//
// Architecture:
// - Domain-centric: validation and list rules live in the domain, as pure functions
// - Event-driven: services publish what happened on the event bus
// - Explicit: per-user state is a session object, loading is request/response
// - The REST backend owns persistence; this crate never stores anything locally

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    catalog_rows,
    category_name,
    filter_and_sort,
    next_book_id,
    validate_book,
    validate_book_input,
    validate_book_input_today,
    // Book
    Book,
    BookField,
    // Catalog
    BookFilter,
    BookInput,
    BookRow,
    // Category
    Category,
    ValidationReport,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_logging_handlers, BookCreated, CatalogLoadFailed, CatalogLoaded, DomainEvent,
    EventBus, EventLogEntry,
};

// ============================================================================
// PUBLIC API - Infrastructure & Integrations
// ============================================================================

pub use infrastructure::AppConfig;
pub use integrations::LibraryApiClient;

// ============================================================================
// PUBLIC API - Repositories & Services
// ============================================================================

pub use repositories::{
    BookRepository, CategoryRepository, HttpBookRepository, HttpCategoryRepository,
};

pub use services::{CatalogLoad, LibraryService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    AppState, BookRowDto, CatalogSession, CategoryOptionDto, ErrorResponse, ErrorType,
    SubmitOutcome,
};
