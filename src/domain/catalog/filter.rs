// src/domain/catalog/filter.rs
//
// Derives the displayed subset of the book collection.
// Pure functions over in-memory data; never fails.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::book::Book;
use crate::domain::category::Category;

/// Shown in place of a category name when the id resolves to nothing
pub const UNKNOWN_CATEGORY: &str = "N/A";

/// Search criteria from the search bar
/// An empty field matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub name_query: String,
    pub category_id: String,
}

impl BookFilter {
    pub fn new(name_query: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            name_query: name_query.into(),
            category_id: category_id.into(),
        }
    }

    /// Case-insensitive substring on the name AND exact category id
    pub fn matches(&self, book: &Book) -> bool {
        let name_ok = self.name_query.is_empty()
            || book
                .name
                .to_lowercase()
                .contains(&self.name_query.to_lowercase());
        let category_ok = self.category_id.is_empty() || book.category_id == self.category_id;

        name_ok && category_ok
    }
}

/// One numbered line of the book table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRow {
    /// 1-based position in the displayed list
    pub position: usize,
    pub book_id: String,
    pub code: String,
    pub name: String,
    pub category_name: String,
    pub import_date: NaiveDate,
    pub quantity: u32,
}

/// Books matching `filter`, ascending by quantity
///
/// The sort is stable: equal quantities keep their input order.
pub fn filter_and_sort(books: &[Book], filter: &BookFilter) -> Vec<Book> {
    let mut selected: Vec<Book> = books
        .iter()
        .filter(|book| filter.matches(book))
        .cloned()
        .collect();

    selected.sort_by_key(|book| book.quantity);
    selected
}

/// Resolve a category id to its display name
pub fn category_name<'a>(categories: &'a [Category], category_id: &str) -> &'a str {
    categories
        .iter()
        .find(|category| category.id == category_id)
        .map(|category| category.name.as_str())
        .unwrap_or(UNKNOWN_CATEGORY)
}

/// Filtered, sorted and numbered rows ready for display
pub fn catalog_rows(books: &[Book], categories: &[Category], filter: &BookFilter) -> Vec<BookRow> {
    filter_and_sort(books, filter)
        .into_iter()
        .enumerate()
        .map(|(idx, book)| BookRow {
            position: idx + 1,
            category_name: category_name(categories, &book.category_id).to_string(),
            book_id: book.id,
            code: book.code,
            name: book.name,
            import_date: book.import_date,
            quantity: book.quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, name: &str, category_id: &str, quantity: u32) -> Book {
        Book {
            id: id.to_string(),
            code: format!("BO-{:0>4}", id),
            name: name.to_string(),
            category_id: category_id.to_string(),
            import_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            quantity,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("1", "Dune", "1", 5),
            book("2", "Dune Messiah", "1", 2),
            book("3", "The Hobbit", "2", 5),
            book("4", "Clean Code", "3", 9),
        ]
    }

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_sort_is_stable_by_quantity() {
        let books = vec![book("a", "A", "1", 5), book("b", "B", "1", 2), book("c", "C", "1", 5)];
        let sorted = filter_and_sort(&books, &BookFilter::default());

        let quantities: Vec<u32> = sorted.iter().map(|b| b.quantity).collect();
        assert_eq!(quantities, vec![2, 5, 5]);
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_name_query_is_case_insensitive_substring() {
        let filter = BookFilter::new("dune", "");
        let result = filter_and_sort(&shelf(), &filter);
        assert_eq!(ids(&result), vec!["2", "1"]);

        let filter = BookFilter::new("MESSIAH", "");
        assert_eq!(ids(&filter_and_sort(&shelf(), &filter)), vec!["2"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = BookFilter::new("", "2");
        assert_eq!(ids(&filter_and_sort(&shelf(), &filter)), vec!["3"]);

        let filter = BookFilter::new("", "22");
        assert!(filter_and_sort(&shelf(), &filter).is_empty());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let filter = BookFilter::new("the", "1");
        assert!(filter_and_sort(&shelf(), &filter).is_empty());

        let filter = BookFilter::new("dune", "1");
        assert_eq!(filter_and_sort(&shelf(), &filter).len(), 2);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let result = filter_and_sort(&shelf(), &BookFilter::default());
        assert_eq!(ids(&result), vec!["2", "1", "3", "4"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = BookFilter::new("d", "1");
        let once = filter_and_sort(&shelf(), &filter);
        let twice = filter_and_sort(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_name_falls_back() {
        let categories = vec![Category::new("1", "Science Fiction")];
        assert_eq!(category_name(&categories, "1"), "Science Fiction");
        assert_eq!(category_name(&categories, "9"), UNKNOWN_CATEGORY);
        assert_eq!(category_name(&[], "1"), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_rows_are_numbered_after_sorting() {
        let categories = vec![Category::new("1", "Science Fiction"), Category::new("2", "Fantasy")];
        let rows = catalog_rows(&shelf(), &categories, &BookFilter::default());

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].name, "Dune Messiah");
        assert_eq!(rows[2].category_name, "Fantasy");
        assert_eq!(rows[3].category_name, UNKNOWN_CATEGORY);
        assert_eq!(rows[3].position, 4);
    }
}
