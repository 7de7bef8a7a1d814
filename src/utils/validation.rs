use crate::utils::error::{QuizError, Result};
use std::fmt::Display;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that `value` is non-empty and at most `max_chars` characters.
///
/// `label` is the capitalised name used in the message, e.g. "Title".
pub fn validate_text(field_name: &str, label: &str, value: &str, max_chars: usize) -> Result<()> {
    if value.is_empty() {
        return Err(QuizError::validation(
            field_name,
            format!("{} cannot be empty", label),
        ));
    }

    if value.chars().count() > max_chars {
        return Err(QuizError::validation(
            field_name,
            format!("{} cannot be longer than {} characters", label, max_chars),
        ));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    label: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(QuizError::validation(
            field_name,
            format!("{} must be between {} and {}", label, min, max),
        ));
    }
    Ok(())
}

pub fn validate_at_least<T: PartialOrd + Display + Copy>(
    field_name: &str,
    label: &str,
    value: T,
    min_value: T,
) -> Result<()> {
    if value < min_value {
        return Err(QuizError::validation(
            field_name,
            format!("{} must be at least {}", label, min_value),
        ));
    }
    Ok(())
}

pub fn validate_max_count(field_name: &str, count: usize, max_count: usize) -> Result<()> {
    if count > max_count {
        return Err(QuizError::validation(
            field_name,
            format!("Cannot select more than {} choices", max_count),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        assert!(validate_text("title", "Title", "q1", 200).is_ok());
        assert!(validate_text("title", "Title", &"a".repeat(200), 200).is_ok());

        let err = validate_text("title", "Title", "", 200).unwrap_err();
        assert_eq!(err.to_string(), "Title cannot be empty");

        let err = validate_text("title", "Title", &"a".repeat(201), 200).unwrap_err();
        assert_eq!(err.to_string(), "Title cannot be longer than 200 characters");
    }

    #[test]
    fn test_validate_text_counts_chars_not_bytes() {
        // 4 chars, 6 bytes
        assert!(validate_text("text", "Text", "Opçã", 4).is_ok());
        assert!(validate_text("text", "Text", "Opçã", 3).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("points", "Points", 1, 1, 100).is_ok());
        assert!(validate_range("points", "Points", 100, 1, 100).is_ok());
        assert!(validate_range("points", "Points", 0, 1, 100).is_err());

        let err = validate_range("points", "Points", 101, 1, 100).unwrap_err();
        assert_eq!(err.to_string(), "Points must be between 1 and 100");
    }

    #[test]
    fn test_validate_at_least() {
        assert!(validate_at_least("max_selections", "Max selections", 1, 1).is_ok());
        assert!(validate_at_least("max_selections", "Max selections", 0, 1).is_err());
    }

    #[test]
    fn test_validate_max_count() {
        assert!(validate_max_count("choice_ids", 2, 2).is_ok());
        let err = validate_max_count("choice_ids", 3, 2).unwrap_err();
        assert_eq!(err.to_string(), "Cannot select more than 2 choices");
    }
}
