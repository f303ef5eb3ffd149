//! Pure validation rules applied by every mutation.
//!
//! Each rule either returns the cleaned value or a [`StoreError::Validation`].
//! Both the repositories and any caller constructing payloads directly go
//! through these same functions, so there is a single validation path.

use crate::types::{StoreError, StoreResult};

/// Trim the value and fail if nothing remains.
pub fn not_empty(value: &str, field: &str) -> StoreResult<String> {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return Err(StoreError::validation(format!("{field} cannot be empty")));
    }
    Ok(cleaned.to_string())
}

/// Fail if the value exceeds `max` characters.
pub fn max_length(value: &str, max: usize, field: &str) -> StoreResult<()> {
    let len = value.chars().count();
    if len > max {
        return Err(StoreError::validation(format!(
            "{field} too long (max {max} characters, got {len})"
        )));
    }
    Ok(())
}

/// Fail if the value is not a positive integer.
pub fn positive_integer(value: i64, field: &str) -> StoreResult<i64> {
    if value <= 0 {
        return Err(StoreError::validation(format!(
            "{field} must be a positive integer"
        )));
    }
    Ok(value)
}

/// Validate and clean a chat title: trimmed, 1..=max characters.
pub fn chat_title(title: &str, max: usize) -> StoreResult<String> {
    let cleaned = not_empty(title, "title")?;
    max_length(&cleaned, max, "title")?;
    Ok(cleaned)
}

/// Validate and clean a message text: trimmed, 1..=max characters.
pub fn message_text(text: &str, max: usize) -> StoreResult<String> {
    let cleaned = not_empty(text, "text")?;
    max_length(&cleaned, max, "text")?;
    Ok(cleaned)
}

/// Validate a chat id reference.
pub fn chat_id(id: i64) -> StoreResult<i64> {
    positive_integer(id, "chat_id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_empty_trims() {
        assert_eq!(not_empty("  hello  ", "field").unwrap(), "hello");
        assert!(not_empty("", "field").is_err());
        assert!(not_empty("   ", "field").is_err());
        assert!(not_empty("\t\n", "field").is_err());
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        // 10 cyrillic characters, 20 bytes in utf-8
        let value = "приветмир!";
        assert!(max_length(value, 10, "field").is_ok());
        assert!(max_length(value, 9, "field").is_err());
    }

    #[test]
    fn positive_integer_bounds() {
        assert_eq!(positive_integer(1, "chat_id").unwrap(), 1);
        assert!(positive_integer(0, "chat_id").is_err());
        assert!(positive_integer(-5, "chat_id").is_err());
    }

    #[test]
    fn chat_title_composes_rules() {
        assert_eq!(chat_title("  My Chat  ", 200).unwrap(), "My Chat");
        assert!(chat_title("  ", 200).is_err());

        let too_long = "a".repeat(201);
        assert!(chat_title(&too_long, 200).is_err());

        // Exactly at the bound, after trimming
        let at_bound = format!("  {}  ", "a".repeat(200));
        assert_eq!(chat_title(&at_bound, 200).unwrap().chars().count(), 200);
    }

    #[test]
    fn message_text_composes_rules() {
        assert_eq!(message_text("  hi  ", 5000).unwrap(), "hi");
        assert!(message_text("", 5000).is_err());

        let too_long = "x".repeat(5001);
        assert!(message_text(&too_long, 5000).is_err());
    }
}
