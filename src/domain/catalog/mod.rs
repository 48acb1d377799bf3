pub mod filter;

pub use filter::{catalog_rows, category_name, filter_and_sort, BookFilter, BookRow, UNKNOWN_CATEGORY};
