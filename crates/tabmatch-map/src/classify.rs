//! Shape classifiers for single field values.
//!
//! All checks are textual. Dates are compared by their digits, not parsed as
//! calendar dates, so `2024-01-02` and `2024-1-2` are different dates here.

use std::sync::LazyLock;

use regex::Regex;

/// `YYYY[/-]M[/-]D` anywhere in the value; trailing time content is allowed.
static DATE_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}[/-][0-9]{1,2}[/-][0-9]{1,2}").expect("Invalid date shape regex")
});

/// True if the value contains a year-month-day date.
pub fn is_date_shaped(value: &str) -> bool {
    DATE_SHAPE_REGEX.is_match(value)
}

/// Comparison key for a date value: text before the first space, with `/`
/// and `-` removed.
pub fn date_key(value: &str) -> String {
    let date_part = value.split(' ').next().unwrap_or_default();
    date_part.replace(['/', '-'], "")
}

/// True if both values have the same [`date_key`].
pub fn dates_equal(left: &str, right: &str) -> bool {
    date_key(left) == date_key(right)
}

/// True if the value mixes at least one ASCII letter and one ASCII digit,
/// which is how identifiers and codes usually look (`A100`, `7B`, `INV-2024X`).
pub fn is_code_shaped(value: &str) -> bool {
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    has_letter && has_digit
}

/// Parses a finite floating-point number, ignoring surrounding whitespace.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

/// True if both values are numbers with exactly the same value.
pub fn numeric_equal(left: &str, right: &str) -> bool {
    match (parse_number(left), parse_number(right)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_shape_accepts_both_separators() {
        assert!(is_date_shaped("2024-01-02"));
        assert!(is_date_shaped("2024/1/2"));
        assert!(is_date_shaped("2024-1/02"));
        assert!(is_date_shaped("2024-01-02 10:00:00"));
        assert!(is_date_shaped("on 2024/12/31"));
    }

    #[test]
    fn date_shape_rejects_other_layouts() {
        assert!(!is_date_shaped("02-01-2024"));
        assert!(!is_date_shaped("20240102"));
        assert!(!is_date_shaped("2024.01.02"));
        assert!(!is_date_shaped("2024-01"));
        assert!(!is_date_shaped(""));
    }

    #[test]
    fn dates_equal_ignores_separators_and_time() {
        assert!(dates_equal("2024-01-02", "2024/01/02"));
        assert!(dates_equal("2024-01-02 10:00", "2024/01/02 23:59"));
        assert!(!dates_equal("2024-01-02", "2024-01-03"));
    }

    #[test]
    fn dates_equal_is_textual() {
        assert!(!dates_equal("2024-01-02", "2024-1-2"));
        // Different dates can collapse to the same digits.
        assert!(dates_equal("2024-1-12", "2024-11-2"));
    }

    #[test]
    fn code_shape_needs_letter_and_digit() {
        assert!(is_code_shaped("A100"));
        assert!(is_code_shaped("100A"));
        assert!(is_code_shaped("INV-2024-x"));
        assert!(!is_code_shaped("Alice"));
        assert!(!is_code_shaped("2024"));
        assert!(!is_code_shaped(""));
    }

    #[test]
    fn numbers_parse_and_compare_by_value() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert!(numeric_equal("100", "100.0"));
        assert!(numeric_equal("1e2", "100"));
        assert!(!numeric_equal("100", "100.1"));
        assert!(!numeric_equal("100", ""));
    }
}
