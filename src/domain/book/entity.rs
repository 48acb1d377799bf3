use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A book held in the library inventory
/// Records are created once and never updated or deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Numeric identifier, carried as a string on the wire
    pub id: String,

    /// Inventory code, `BO-` followed by four digits
    pub code: String,

    /// Title of the book
    pub name: String,

    /// Reference into the category set; records without one show as "N/A"
    #[serde(default)]
    pub category_id: String,

    /// Day the book entered the inventory
    pub import_date: NaiveDate,

    /// Number of copies on hand
    pub quantity: u32,
}

/// Raw add-book form state, exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub code: String,
    pub name: String,
    pub category_id: String,
    pub import_date: String,
    pub quantity: String,
}

/// Fields of the add-book form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookField {
    Code,
    Name,
    CategoryId,
    ImportDate,
    Quantity,
}

impl Book {
    /// Build a book from form input that already passed validation
    ///
    /// Parsing is repeated here so the conversion never trusts the caller.
    pub fn from_input(id: String, input: &BookInput) -> DomainResult<Self> {
        let import_date = parse_import_date(&input.import_date).ok_or_else(|| {
            DomainError::InvariantViolation(format!(
                "Import date '{}' is not a valid date",
                input.import_date
            ))
        })?;

        let quantity = parse_quantity(&input.quantity).ok_or_else(|| {
            DomainError::InvariantViolation(format!(
                "Quantity '{}' is not a positive integer",
                input.quantity
            ))
        })?;

        Ok(Self {
            id,
            code: input.code.clone(),
            name: input.name.clone(),
            category_id: input.category_id.clone(),
            import_date,
            quantity,
        })
    }
}

/// Next identifier for a new book: highest numeric id plus one
///
/// Ids that are not numeric do not take part. Only safe for a single writer.
pub fn next_book_id(existing: &[Book]) -> String {
    let max_id = existing
        .iter()
        .filter_map(|book| book.id.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    max_id.saturating_add(1).to_string()
}

/// Parse an ISO calendar date (`YYYY-MM-DD`)
pub(crate) fn parse_import_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Parse a strictly positive integer quantity
pub(crate) fn parse_quantity(raw: &str) -> Option<u32> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => u32::try_from(value).ok(),
        _ => None,
    }
}

impl std::fmt::Display for BookField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookField::Code => write!(f, "code"),
            BookField::Name => write!(f, "name"),
            BookField::CategoryId => write!(f, "categoryId"),
            BookField::ImportDate => write!(f, "importDate"),
            BookField::Quantity => write!(f, "quantity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_id(id: &str) -> Book {
        Book {
            id: id.to_string(),
            code: "BO-0001".to_string(),
            name: "Dune".to_string(),
            category_id: "1".to_string(),
            import_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            quantity: 1,
        }
    }

    #[test]
    fn test_next_id_on_empty_collection() {
        assert_eq!(next_book_id(&[]), "1");
    }

    #[test]
    fn test_next_id_uses_numeric_maximum() {
        let books = vec![book_with_id("2"), book_with_id("10"), book_with_id("7")];
        assert_eq!(next_book_id(&books), "11");
    }

    #[test]
    fn test_next_id_ignores_non_numeric_ids() {
        let books = vec![book_with_id("a1b2"), book_with_id("3")];
        assert_eq!(next_book_id(&books), "4");
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("-3"), None);
        assert_eq!(parse_quantity("3.5"), None);
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("99999999999"), None);
    }

    #[test]
    fn test_from_input_builds_typed_record() {
        let input = BookInput {
            code: "BO-0042".to_string(),
            name: "Dune".to_string(),
            category_id: "1".to_string(),
            import_date: "2024-01-01".to_string(),
            quantity: "5".to_string(),
        };

        let book = Book::from_input("9".to_string(), &input).unwrap();
        assert_eq!(book.id, "9");
        assert_eq!(book.quantity, 5);
        assert_eq!(book.import_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(book_with_id("1")).unwrap();
        assert_eq!(json["categoryId"], "1");
        assert_eq!(json["importDate"], "2024-01-01");
        assert_eq!(json["quantity"], 1);
    }

    #[test]
    fn test_decode_books_payload() {
        let payload = r#"[
            {"id": "1", "code": "BO-0001", "name": "Dune", "categoryId": "2",
             "importDate": "2024-01-01", "quantity": 5},
            {"id": "2", "code": "BO-0002", "name": "Loose Leaf",
             "importDate": "2023-11-20", "quantity": 1}
        ]"#;

        let books: Vec<Book> = serde_json::from_str(payload).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].category_id, "2");
        assert_eq!(books[0].import_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(books[1].category_id, "");
        assert_eq!(books[1].quantity, 1);
    }
}
