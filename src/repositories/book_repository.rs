// src/repositories/book_repository.rs
//
// Book persistence over the REST backend

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::book::Book;
use crate::error::AppResult;
use crate::integrations::LibraryApiClient;

const BOOKS_PATH: &str = "books";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Book>>;
    async fn create(&self, book: &Book) -> AppResult<Book>;
}

pub struct HttpBookRepository {
    client: Arc<LibraryApiClient>,
}

impl HttpBookRepository {
    pub fn new(client: Arc<LibraryApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookRepository for HttpBookRepository {
    async fn list_all(&self) -> AppResult<Vec<Book>> {
        self.client.get_json(BOOKS_PATH).await
    }

    async fn create(&self, book: &Book) -> AppResult<Book> {
        self.client.post_json(BOOKS_PATH, book).await
    }
}
