//! Form field parsing helpers.
//!
//! Drafts carry numeric and date fields as the raw strings a form submits.
//! These helpers parse them while accumulating per-field errors, so one
//! submission reports every problem at once.

use chrono::NaiveDate;

use vettrack_core::{DomainError, FieldErrors, Money};

/// Parse a non-negative integer field ("50"). Pushes an error and returns
/// `None` on failure.
pub fn parse_count(errors: &mut FieldErrors, field: &str, input: &str) -> Option<u32> {
    let s = input.trim();
    if s.is_empty() {
        errors.push(field, "is required");
        return None;
    }
    match s.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(field, "must be a non-negative whole number");
            None
        }
    }
}

/// Parse a decimal money field ("15.99").
pub fn parse_money(errors: &mut FieldErrors, field: &str, input: &str) -> Option<Money> {
    match Money::parse(field, input) {
        Ok(m) => Some(m),
        Err(DomainError::Validation(fields)) => {
            for e in fields.errors() {
                errors.push(e.field.clone(), e.message.clone());
            }
            None
        }
        Err(_) => {
            errors.push(field, "must be a non-negative amount");
            None
        }
    }
}

/// Parse an ISO calendar date field ("2025-07-31").
pub fn parse_date(errors: &mut FieldErrors, field: &str, input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        errors.push(field, "is required");
        return None;
    }
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            errors.push(field, "must be a date in YYYY-MM-DD format");
            None
        }
    }
}
