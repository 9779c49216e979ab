//! Field validation: row content must be inert text.

/// Longest accepted field, in bytes.
pub const MAX_FIELD_LEN: usize = 1024;

/// Error returned when a field's content is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldValidationError {
    /// Control characters (tab excepted) or shell metacharacters.
    #[error("invalid character in field")]
    InvalidCharacter,

    /// `../` or `..\` inside a value.
    #[error("invalid character in path")]
    PathTraversal,

    #[error("field too long: maximum length is 1KB")]
    TooLong,
}

/// Validate every field of one row.
pub fn validate_fields<S: AsRef<str>>(fields: &[S]) -> Result<(), FieldValidationError> {
    fields.iter().try_for_each(|f| validate_field(f.as_ref()))
}

fn validate_field(field: &str) -> Result<(), FieldValidationError> {
    if field.chars().any(|c| c.is_control() && c != '\t') {
        return Err(FieldValidationError::InvalidCharacter);
    }

    if field.contains('$') || field.contains('`') {
        return Err(FieldValidationError::InvalidCharacter);
    }

    if field.contains("../") || field.contains("..\\") {
        return Err(FieldValidationError::PathTraversal);
    }

    if field.len() > MAX_FIELD_LEN {
        return Err(FieldValidationError::TooLong);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_pass() {
        assert!(validate_fields(&["Travis County, TX", "1.9%", "tax_policies_2023.pdf"]).is_ok());
        assert!(validate_fields(&["São Paulo, BR", "2,1%"]).is_ok());
    }

    #[test]
    fn traversal_in_value_blocked() {
        assert_eq!(
            validate_fields(&["../../../etc/passwd", "1.0%"]),
            Err(FieldValidationError::PathTraversal)
        );
        assert_eq!(
            validate_fields(&["..\\windows", "1.0%"]),
            Err(FieldValidationError::PathTraversal)
        );
    }

    #[test]
    fn shell_metacharacters_blocked() {
        let err = validate_fields(&["$(rm -rf /)"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid character in field");
        assert!(validate_fields(&["`id`"]).is_err());
    }

    #[test]
    fn control_characters_blocked() {
        assert_eq!(
            validate_fields(&["Travis\x00County"]),
            Err(FieldValidationError::InvalidCharacter)
        );
        assert!(validate_fields(&["line\nbreak"]).is_err());
        assert!(validate_fields(&["tab\tseparated"]).is_ok());
    }

    #[test]
    fn oversized_field_blocked() {
        let long = "a".repeat(MAX_FIELD_LEN + 1);
        assert_eq!(validate_fields(&[long]), Err(FieldValidationError::TooLong));

        let exact = "a".repeat(MAX_FIELD_LEN);
        assert!(validate_fields(&[exact]).is_ok());
    }
}
