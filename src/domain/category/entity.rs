use serde::{Deserialize, Serialize};

/// A named classification referenced by books
/// Categories are read-only reference data served by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::Book;
    use crate::domain::catalog::{catalog_rows, BookFilter, UNKNOWN_CATEGORY};

    #[test]
    fn test_decode_categories_payload() {
        let payload = r#"[{"id": "1", "name": "Novel"}, {"id": "2", "name": "Poetry"}]"#;
        let categories: Vec<Category> = serde_json::from_str(payload).unwrap();
        assert_eq!(categories, vec![Category::new("1", "Novel"), Category::new("2", "Poetry")]);
    }

    #[test]
    fn test_book_without_category_renders_unknown() {
        let books: Vec<Book> = serde_json::from_str(
            r#"[{"id": "4", "code": "BO-0004", "name": "Orphan",
                 "importDate": "2024-03-03", "quantity": 2}]"#,
        )
        .unwrap();
        let categories = vec![Category::new("1", "Novel")];

        let rows = catalog_rows(&books, &categories, &BookFilter::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_name, UNKNOWN_CATEGORY);
    }
}
