// src/application/session.rs
//
// Presentation state for one user, held explicitly instead of in widgets.
//
// RULES:
// - All data reaches the session through a reload, never implicitly
// - Read failures leave a persistent banner
// - Write failures leave a flash message that expires on its own
// - `submit` takes `&mut self`, so one create request is in flight at most
// - Nothing is submitted unless the latest book load succeeded

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

use crate::domain::{catalog_rows, Book, BookFilter, BookInput, Category, ValidationReport};
use crate::error::AppError;
use crate::services::LibraryService;

use super::dto::{BookRowDto, CategoryOptionDto};
use super::error_handling::ErrorResponse;

pub const BOOKS_LOAD_FAILED: &str =
    "Could not load the book list. Check that the API server is running.";
pub const CATEGORIES_LOAD_FAILED: &str = "Could not load the category list.";
pub const BOOK_ADDED: &str = "Book added successfully!";
pub const BOOK_ADD_FAILED: &str = "An error occurred while adding the book!";
pub const NO_MATCHING_BOOKS: &str = "No matching books";
pub const BOOKS_NOT_LOADED: &str = "The book list is not loaded; new books cannot be checked against it";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Persistent banner text
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Failure,
}

/// A status line that disappears by itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
    expires_at: Instant,
}

impl FlashMessage {
    pub fn is_active(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent
    Invalid(ValidationReport),
    Created(Book),
    Failed(ErrorResponse),
}

#[derive(Debug)]
pub struct CatalogSession {
    books: Vec<Book>,
    books_loaded: bool,
    categories: Vec<Category>,
    filter: BookFilter,
    load_state: LoadState,
    flash: Option<FlashMessage>,
    flash_ttl: Duration,
}

impl CatalogSession {
    pub fn new(flash_ttl: Duration) -> Self {
        Self {
            books: Vec::new(),
            books_loaded: false,
            categories: Vec::new(),
            filter: BookFilter::default(),
            load_state: LoadState::Loading,
            flash: None,
            flash_ttl,
        }
    }

    // ========================================================================
    // LOADING
    // ========================================================================

    /// Fetch both collections; whatever succeeds is kept
    pub async fn reload(&mut self, service: &LibraryService) {
        let load = service.load_catalog().await;

        self.books_loaded = match load.books {
            Ok(books) => {
                self.books = books;
                true
            }
            Err(_) => false,
        };
        let categories_failed = match load.categories {
            Ok(categories) => {
                self.categories = categories;
                false
            }
            Err(_) => true,
        };

        self.load_state = if !self.books_loaded {
            LoadState::Failed(BOOKS_LOAD_FAILED.to_string())
        } else if categories_failed {
            LoadState::Failed(CATEGORIES_LOAD_FAILED.to_string())
        } else {
            LoadState::Ready
        };
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn banner(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Whether the latest reload fetched the book list
    pub fn books_loaded(&self) -> bool {
        self.books_loaded
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    // ========================================================================
    // SEARCH
    // ========================================================================

    pub fn filter(&self) -> &BookFilter {
        &self.filter
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.filter.name_query = query.into();
    }

    /// Empty string selects every category
    pub fn set_category_filter(&mut self, category_id: impl Into<String>) {
        self.filter.category_id = category_id.into();
    }

    /// Sorted, filtered and numbered table rows
    pub fn rows(&self) -> Vec<BookRowDto> {
        catalog_rows(&self.books, &self.categories, &self.filter)
            .into_iter()
            .map(BookRowDto::from)
            .collect()
    }

    pub fn category_options(&self) -> Vec<CategoryOptionDto> {
        self.categories.iter().map(CategoryOptionDto::from).collect()
    }

    /// Loaded fine but nothing passes the filter
    pub fn shows_no_results(&self) -> bool {
        self.load_state == LoadState::Ready && self.rows().is_empty()
    }

    // ========================================================================
    // ADD BOOK
    // ========================================================================

    /// Validate and create a book, then reload on success
    pub async fn submit(&mut self, service: &LibraryService, input: &BookInput) -> SubmitOutcome {
        self.submit_on(service, input, Local::now().date_naive()).await
    }

    pub async fn submit_on(
        &mut self,
        service: &LibraryService,
        input: &BookInput,
        today: NaiveDate,
    ) -> SubmitOutcome {
        // Uniqueness and the next id are only meaningful against the real list
        if !self.books_loaded {
            log::warn!("Refusing to add book {}: book list not loaded", input.code);
            self.set_flash(FlashKind::Failure, BOOK_ADD_FAILED);
            return SubmitOutcome::Failed(ErrorResponse::from_app_error(AppError::Network(
                BOOKS_NOT_LOADED.to_string(),
            )));
        }

        match service.add_book(input, &self.books, today).await {
            Ok(book) => {
                self.set_flash(FlashKind::Success, BOOK_ADDED);
                self.reload(service).await;
                SubmitOutcome::Created(book)
            }
            Err(AppError::Validation(report)) => {
                self.flash = None;
                SubmitOutcome::Invalid(report)
            }
            Err(e) => {
                self.set_flash(FlashKind::Failure, BOOK_ADD_FAILED);
                SubmitOutcome::Failed(ErrorResponse::from_app_error(e))
            }
        }
    }

    /// The flash message, if it has not expired at `now`
    pub fn flash(&self, now: Instant) -> Option<&FlashMessage> {
        self.flash.as_ref().filter(|flash| flash.is_active(now))
    }

    fn set_flash(&mut self, kind: FlashKind, text: &str) {
        self.flash = Some(FlashMessage {
            kind,
            text: text.to_string(),
            expires_at: Instant::now() + self.flash_ttl,
        });
    }
}
