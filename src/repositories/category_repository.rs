// src/repositories/category_repository.rs
//
// Categories are read-only reference data

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::Category;
use crate::error::AppResult;
use crate::integrations::LibraryApiClient;

const CATEGORIES_PATH: &str = "categories";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_all(&self) -> AppResult<Vec<Category>>;
}

pub struct HttpCategoryRepository {
    client: Arc<LibraryApiClient>,
}

impl HttpCategoryRepository {
    pub fn new(client: Arc<LibraryApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRepository for HttpCategoryRepository {
    async fn list_all(&self) -> AppResult<Vec<Category>> {
        self.client.get_json(CATEGORIES_PATH).await
    }
}
