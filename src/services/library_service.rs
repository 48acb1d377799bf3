// src/services/library_service.rs
use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    next_book_id, validate_book, validate_book_input, Book, BookInput, Category,
};
use crate::error::{AppError, AppResult};
use crate::events::{BookCreated, CatalogLoadFailed, CatalogLoaded, EventBus};
use crate::repositories::{BookRepository, CategoryRepository};

/// Outcome of loading both collections
///
/// Each side is independent: one failing never discards the other.
#[derive(Debug)]
pub struct CatalogLoad {
    pub books: AppResult<Vec<Book>>,
    pub categories: AppResult<Vec<Category>>,
}

pub struct LibraryService {
    book_repo: Arc<dyn BookRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    event_bus: Arc<EventBus>,
}

impl LibraryService {
    pub fn new(
        book_repo: Arc<dyn BookRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            book_repo,
            category_repo,
            event_bus,
        }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.book_repo.list_all().await
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.category_repo.list_all().await
    }

    /// Fetch books and categories concurrently
    pub async fn load_catalog(&self) -> CatalogLoad {
        let (books, categories) = tokio::join!(self.list_books(), self.list_categories());

        if let Err(e) = &books {
            self.event_bus
                .emit(CatalogLoadFailed::new("books".to_string(), e.to_string()));
        }
        if let Err(e) = &categories {
            self.event_bus
                .emit(CatalogLoadFailed::new("categories".to_string(), e.to_string()));
        }
        if let (Ok(b), Ok(c)) = (&books, &categories) {
            self.event_bus.emit(CatalogLoaded::new(b.len(), c.len()));
        }

        CatalogLoad { books, categories }
    }

    /// Validate and persist a new book, checked against `existing`
    ///
    /// Invalid input returns `AppError::Validation` without touching the backend.
    pub async fn add_book(&self, input: &BookInput, existing: &[Book], today: NaiveDate) -> AppResult<Book> {
        let report = validate_book_input(input, existing, today);
        if !report.is_valid() {
            log::debug!("Rejected book input: {}", report);
            return Err(AppError::Validation(report));
        }

        let book = Book::from_input(next_book_id(existing), input)?;
        validate_book(&book)?;

        let created = self.book_repo.create(&book).await?;

        self.event_bus.emit(BookCreated::new(
            created.id.clone(),
            created.code.clone(),
            created.name.clone(),
        ));

        Ok(created)
    }
}
