//! # Field Validation
//!
//! Every validated entity funnels its constructor and setters through these
//! rules, so a value is checked the same way whether it arrives from code,
//! from a console prompt or from a stored document.
//!
//! Typed rules (`non_empty`, `int_in_range`, ...) check the domain of a value
//! whose kind is already known. Dynamic rules (`text`, `integer`, `number`)
//! check the *kind* of an untyped [`Value`] first; a boolean is never accepted
//! where a number is expected.

use chrono::Datelike;
use serde_json::Value;

use crate::error::ValidationError;

static NULL: Value = Value::Null;

/// Entities that can be built from, and patched by, an untyped keyed record.
///
/// `set_field` validates before committing: on error the entity is unchanged.
pub trait FieldRecord: Sized {
    fn from_fields(record: &Value) -> Result<Self, ValidationError>;

    fn set_field(&mut self, name: &str, value: &Value) -> Result<(), ValidationError>;
}

pub fn current_year() -> i64 {
    i64::from(chrono::Local::now().year())
}

/// Accepts any text that is non-empty after trimming. The value is kept as given.
pub fn non_empty(field: &'static str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::range(field, format!("{field} cannot be empty")));
    }
    Ok(value)
}

/// Non-empty text that is also usable as a single file name component.
pub fn file_stem(field: &'static str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = non_empty(field, value)?;
    let dots = matches!(value.trim(), "." | "..");
    if dots || value.contains(['/', '\\', '\0']) {
        return Err(ValidationError::range(
            field,
            format!("{field} cannot contain path separators or be '.' or '..'"),
        ));
    }
    Ok(value)
}

pub fn int_in_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<i64, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::range(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

pub fn non_negative_int(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::range(field, format!("{field} cannot be negative")));
    }
    Ok(value)
}

pub fn number_in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::kind(field, "a finite number"));
    }
    if value < min || value > max {
        return Err(ValidationError::range(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

pub fn non_negative_number(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::kind(field, "a finite number"));
    }
    if value < 0.0 {
        return Err(ValidationError::range(field, format!("{field} cannot be negative")));
    }
    Ok(value)
}

/// A calendar year: not negative and at most one year past the current one.
pub fn year(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    non_negative_int(field, value)?;
    if value > current_year() + 1 {
        return Err(ValidationError::range(field, format!("{field} cannot be in the future")));
    }
    Ok(value)
}

/// Looks up `key` in a keyed record. A missing key reads as `null`.
pub fn entry<'a>(record: &'a Value, key: &str) -> Result<&'a Value, ValidationError> {
    match record {
        Value::Object(map) => Ok(map.get(key).unwrap_or(&NULL)),
        _ => Err(ValidationError::kind("Record", "an object")),
    }
}

pub fn text<'a>(field: &'static str, value: &'a Value) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::kind(field, "a string"))
}

pub fn integer(field: &'static str, value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| ValidationError::kind(field, "an integer")),
        _ => Err(ValidationError::kind(field, "an integer")),
    }
}

pub fn number(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ValidationError::kind(field, "a number")),
        _ => Err(ValidationError::kind(field, "a number")),
    }
}

pub fn list<'a>(field: &'static str, value: &'a Value) -> Result<&'a [Value], ValidationError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ValidationError::kind(field, "a list"))
}

/// Parses prompt or CSV text as an integer; unparsable text is a kind mismatch.
pub fn parse_int(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::kind(field, "an integer"))
}

pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::kind(field, "a number")),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty_keeps_original_text() {
        assert_eq!(non_empty("Title", "  Dune ").unwrap(), "  Dune ");
        let err = non_empty("Title", "   ").unwrap_err();
        assert!(err.is_range_or_emptiness());
        assert_eq!(err.to_string(), "Title cannot be empty");
    }

    #[test]
    fn test_file_stem_rejects_paths() {
        assert_eq!(file_stem("Student ID", "s-1").unwrap(), "s-1");
        assert_eq!(file_stem("Student ID", "a..b").unwrap(), "a..b");
        for bad in ["../escaped", "a/b", "a\\b", "..", ".", " .. "] {
            let err = file_stem("Student ID", bad).unwrap_err();
            assert!(err.is_range_or_emptiness(), "{bad}");
        }
        assert_eq!(file_stem("Student ID", "").unwrap_err().to_string(), "Student ID cannot be empty");
    }

    #[test]
    fn test_int_in_range_is_inclusive() {
        assert_eq!(int_in_range("Age", 16, 16, 100), Ok(16));
        assert_eq!(int_in_range("Age", 100, 16, 100), Ok(100));
        assert!(int_in_range("Age", 15, 16, 100).unwrap_err().is_range_or_emptiness());
        assert!(int_in_range("Age", 101, 16, 100).is_err());
    }

    #[test]
    fn test_number_rules() {
        assert_eq!(number_in_range("Score", 0.0, 0.0, 100.0), Ok(0.0));
        assert!(number_in_range("Score", 100.5, 0.0, 100.0).is_err());
        assert!(number_in_range("Score", f64::NAN, 0.0, 100.0).unwrap_err().is_kind_mismatch());
        assert!(non_negative_number("Fee", -0.01).unwrap_err().is_range_or_emptiness());
    }

    #[test]
    fn test_year_bounds() {
        let now = current_year();
        assert_eq!(year("Year", 0), Ok(0));
        assert_eq!(year("Year", now + 1), Ok(now + 1));
        assert_eq!(
            year("Year", now + 2).unwrap_err().to_string(),
            "Year cannot be in the future"
        );
        assert_eq!(year("Year", -1).unwrap_err().to_string(), "Year cannot be negative");
    }

    #[test]
    fn test_dynamic_kinds() {
        assert_eq!(text("Title", &json!("Dune")), Ok("Dune"));
        assert!(text("Title", &json!(12)).unwrap_err().is_kind_mismatch());

        assert_eq!(integer("Age", &json!(30)), Ok(30));
        assert!(integer("Age", &json!(true)).unwrap_err().is_kind_mismatch());
        assert!(integer("Age", &json!(30.5)).unwrap_err().is_kind_mismatch());
        assert!(integer("Age", &json!("30")).unwrap_err().is_kind_mismatch());

        assert_eq!(number("Score", &json!(75)), Ok(75.0));
        assert_eq!(number("Score", &json!(75.5)), Ok(75.5));
        assert!(number("Score", &json!(false)).unwrap_err().is_kind_mismatch());
    }

    #[test]
    fn test_entry_reads_missing_as_null() {
        let record = json!({ "title": "Dune" });
        assert_eq!(entry(&record, "title"), Ok(&json!("Dune")));
        assert_eq!(entry(&record, "author"), Ok(&Value::Null));
        assert!(entry(&json!([1, 2]), "title").unwrap_err().is_kind_mismatch());
    }

    #[test]
    fn test_parse_text_input() {
        assert_eq!(parse_int("Year", " 1965 "), Ok(1965));
        assert!(parse_int("Year", "nineteen").unwrap_err().is_kind_mismatch());
        assert_eq!(parse_number("Score", "42.5"), Ok(42.5));
        assert!(parse_number("Score", "inf").unwrap_err().is_kind_mismatch());
    }
}
