// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{BookRow, Category};

/// Display format for import dates in the book table
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

// ============================================================================
// BOOK DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRowDto {
    pub position: usize,
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub import_date: String,
    pub quantity: u32,
}

impl From<BookRow> for BookRowDto {
    fn from(row: BookRow) -> Self {
        Self {
            position: row.position,
            id: row.book_id,
            code: row.code,
            name: row.name,
            category: row.category_name,
            import_date: row.import_date.format(DISPLAY_DATE_FORMAT).to_string(),
            quantity: row.quantity,
        }
    }
}

// ============================================================================
// CATEGORY DTOs
// ============================================================================

/// One entry of a category drop-down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOptionDto {
    pub value: String,
    pub label: String,
}

impl From<&Category> for CategoryOptionDto {
    fn from(category: &Category) -> Self {
        Self {
            value: category.id.clone(),
            label: category.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_row_date_is_day_month_year() {
        let row = BookRow {
            position: 1,
            book_id: "4".to_string(),
            code: "BO-0004".to_string(),
            name: "Emma".to_string(),
            category_name: "Novel".to_string(),
            import_date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            quantity: 2,
        };

        let dto = BookRowDto::from(row);
        assert_eq!(dto.import_date, "07/03/2024");
        assert_eq!(dto.category, "Novel");
    }
}
