pub mod entity;
pub mod invariants;

pub use entity::{next_book_id, Book, BookField, BookInput};
pub use invariants::{validate_book, validate_book_input, validate_book_input_today, ValidationReport};
