//! Field validators used with `#[validate(custom(...))]`.
//!
//! Kept here so request DTOs in any crate report identical error codes.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Error code reported for empty or whitespace-only text.
pub const CODE_BLANK: &str = "blank";

/// Error code reported for text containing a NUL character, which
/// PostgreSQL `TEXT` columns cannot store.
pub const CODE_NUL: &str = "nul_character";

/// Error code reported when a referenced category does not exist.
pub const CODE_UNKNOWN_CATEGORY: &str = "unknown_category";

fn nul_error() -> ValidationError {
    ValidationError::new(CODE_NUL).with_message(Cow::Borrowed("must not contain NUL characters"))
}

/// Reject text containing a NUL character.
pub fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        Err(nul_error())
    } else {
        Ok(())
    }
}

/// Reject empty, whitespace-only, or NUL-bearing text.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    no_nul(value)?;
    if value.trim().is_empty() {
        Err(ValidationError::new(CODE_BLANK).with_message(Cow::Borrowed("must not be blank")))
    } else {
        Ok(())
    }
}

/// Reject a tag list containing an empty, whitespace-only, or NUL-bearing tag.
pub fn non_blank_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.iter().any(|tag| tag.contains('\0')) {
        return Err(nul_error());
    }
    if tags.iter().any(|tag| tag.trim().is_empty()) {
        Err(ValidationError::new(CODE_BLANK).with_message(Cow::Borrowed("tags must not be blank")))
    } else {
        Ok(())
    }
}

/// Build a single-field error set, for checks that need storage access and
/// therefore cannot run inside the derive.
pub fn field_error(field: &'static str, code: &'static str, message: String) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code).with_message(Cow::Owned(message)));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_accepts_text() {
        assert!(non_blank("Studio").is_ok());
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        let err = non_blank("  \t").unwrap_err();
        assert_eq!(err.code, CODE_BLANK);
    }

    #[test]
    fn nul_is_rejected_everywhere() {
        assert_eq!(no_nul("x\0y").unwrap_err().code, CODE_NUL);
        assert!(no_nul("plain").is_ok());
        assert_eq!(non_blank("x\0y").unwrap_err().code, CODE_NUL);
        let tags = vec!["AI".to_string(), "a\0b".to_string()];
        assert_eq!(non_blank_tags(&tags).unwrap_err().code, CODE_NUL);
    }

    #[test]
    fn tags_reject_blank_entry() {
        let tags = vec!["AI".to_string(), " ".to_string()];
        assert!(non_blank_tags(&tags).is_err());
    }

    #[test]
    fn tags_allow_duplicates_and_empty_list() {
        assert!(non_blank_tags(&[]).is_ok());
        let tags = vec!["AI".to_string(), "AI".to_string()];
        assert!(non_blank_tags(&tags).is_ok());
    }

    #[test]
    fn field_error_names_field() {
        let errors = field_error("category_id", CODE_UNKNOWN_CATEGORY, "no category 9".into());
        let fields = errors.field_errors();
        assert_eq!(fields["category_id"][0].code, CODE_UNKNOWN_CATEGORY);
    }
}
