use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::Serialize;

use super::entity::{parse_import_date, parse_quantity, Book, BookField, BookInput};
use crate::domain::{DomainError, DomainResult};

/// Longest accepted book name, in characters
pub const MAX_NAME_CHARS: usize = 100;

pub const MSG_CODE_FORMAT: &str = "Book code must follow the format BO-XXXX (e.g. BO-0001)";
pub const MSG_CODE_TAKEN: &str = "This book code already exists";
pub const MSG_NAME_EMPTY: &str = "Book name must not be empty";
pub const MSG_NAME_TOO_LONG: &str = "Book name must be at most 100 characters";
pub const MSG_CATEGORY_MISSING: &str = "Please select a category";
pub const MSG_DATE_MISSING: &str = "Please select an import date";
pub const MSG_DATE_INVALID: &str = "Import date must be a valid date (YYYY-MM-DD)";
pub const MSG_DATE_IN_FUTURE: &str = "Import date must not be later than today";
pub const MSG_QUANTITY: &str = "Quantity must be an integer greater than 0";

/// `\d` in the regex crate is Unicode-aware, so the digit class is spelled out
fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^BO-[0-9]{4}$").expect("book code pattern is valid"))
}

/// Outcome of validating an add-book form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<BookField, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: BookField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<BookField, String> {
        &self.errors
    }

    /// Record a failure; a later message for the same field replaces the earlier one
    fn set(&mut self, field: BookField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validates add-book form input against the current collection
///
/// Every field is checked; one field failing never hides another field's
/// error. `today` is the local calendar date used for the import-date rule.
pub fn validate_book_input(
    input: &BookInput,
    existing: &[Book],
    today: NaiveDate,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_code(&mut report, &input.code, existing);
    check_name(&mut report, &input.name);
    check_category(&mut report, &input.category_id);
    check_import_date(&mut report, &input.import_date, today);
    check_quantity(&mut report, &input.quantity);

    report
}

/// Same as [`validate_book_input`] with today's local date
pub fn validate_book_input_today(input: &BookInput, existing: &[Book]) -> ValidationReport {
    validate_book_input(input, existing, Local::now().date_naive())
}

/// Uniqueness is only looked at once the format matches
fn check_code(report: &mut ValidationReport, code: &str, existing: &[Book]) {
    if !code_pattern().is_match(code) {
        report.set(BookField::Code, MSG_CODE_FORMAT);
    } else if existing.iter().any(|book| book.code == code) {
        report.set(BookField::Code, MSG_CODE_TAKEN);
    }
}

/// Length runs first so the emptiness message has the final word
fn check_name(report: &mut ValidationReport, name: &str) {
    if name.chars().count() > MAX_NAME_CHARS {
        report.set(BookField::Name, MSG_NAME_TOO_LONG);
    }
    if name.trim().is_empty() {
        report.set(BookField::Name, MSG_NAME_EMPTY);
    }
}

/// Any selected value counts, whitespace included
fn check_category(report: &mut ValidationReport, category_id: &str) {
    if category_id.is_empty() {
        report.set(BookField::CategoryId, MSG_CATEGORY_MISSING);
    }
}

fn check_import_date(report: &mut ValidationReport, raw: &str, today: NaiveDate) {
    if raw.trim().is_empty() {
        report.set(BookField::ImportDate, MSG_DATE_MISSING);
        return;
    }

    match parse_import_date(raw) {
        None => report.set(BookField::ImportDate, MSG_DATE_INVALID),
        Some(date) if date > today => report.set(BookField::ImportDate, MSG_DATE_IN_FUTURE),
        Some(_) => {}
    }
}

fn check_quantity(report: &mut ValidationReport, raw: &str) {
    if parse_quantity(raw).is_none() {
        report.set(BookField::Quantity, MSG_QUANTITY);
    }
}

/// Validates the invariants of a stored Book record
pub fn validate_book(book: &Book) -> DomainResult<()> {
    if !code_pattern().is_match(&book.code) {
        return Err(DomainError::InvariantViolation(format!(
            "Book code '{}' does not match BO-XXXX",
            book.code
        )));
    }
    if book.name.trim().is_empty() || book.name.chars().count() > MAX_NAME_CHARS {
        return Err(DomainError::InvariantViolation(
            "Book name must be 1 to 100 characters".to_string(),
        ));
    }
    if book.category_id.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book category cannot be empty".to_string(),
        ));
    }
    if book.quantity == 0 {
        return Err(DomainError::InvariantViolation(
            "Book quantity must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Book domain:
///
/// 1. Code matches BO-XXXX and is unique within the collection
/// 2. Name is not blank and at most 100 characters
/// 3. Category is always set (an unknown id still displays as "N/A")
/// 4. Import date is never after the day it was entered
/// 5. Quantity is a positive integer
