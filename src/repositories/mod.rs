// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - NO cross-repository calls

pub mod book_repository;
pub mod category_repository;

pub use book_repository::{BookRepository, HttpBookRepository};
pub use category_repository::{CategoryRepository, HttpCategoryRepository};

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
