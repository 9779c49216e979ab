//! Path validation: data sources must stay inside the data directory.
//!
//! A source identifier is accepted only when it is a relative path to a
//! visible `.csv` file with no traversal, no shell metacharacters, and no
//! URL scheme.

use std::path::{Component, Path};

/// Error returned when a source identifier is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathValidationError {
    #[error("must use relative path to data directory")]
    Absolute,

    #[error("invalid file extension: must be .csv")]
    Extension,

    #[error("invalid path: directory traversal not allowed")]
    PathTraversal,

    /// Shell metacharacters or control characters in the identifier.
    #[error("invalid character in field")]
    InvalidCharacter,

    #[error("invalid filename: hidden files not allowed")]
    HiddenFile,

    #[error("invalid path: URLs not allowed")]
    Url,
}

/// Validate a data source identifier.
///
/// Checks, in order:
/// 1. Not absolute (including Windows drive and UNC forms)
/// 2. `.csv` extension
/// 3. No `..` component
/// 4. No `$` or backtick
/// 5. File name does not start with `.`
/// 6. No `://`
/// 7. No control characters
pub fn validate_source_path(path: &str) -> Result<(), PathValidationError> {
    let normalized = path.replace('\\', "/");
    let input_path = Path::new(&normalized);

    if input_path.is_absolute() || normalized.starts_with('/') || has_drive_prefix(&normalized) {
        return Err(PathValidationError::Absolute);
    }

    if input_path.extension().and_then(|e| e.to_str()) != Some("csv") {
        return Err(PathValidationError::Extension);
    }

    if input_path
        .components()
        .any(|c| matches!(c, Component::ParentDir))
        || normalized.split('/').any(|part| part == "..")
    {
        return Err(PathValidationError::PathTraversal);
    }

    if normalized.contains('$') || normalized.contains('`') {
        return Err(PathValidationError::InvalidCharacter);
    }

    let base = normalized.rsplit('/').next().unwrap_or_default();
    if base.starts_with('.') {
        return Err(PathValidationError::HiddenFile);
    }

    if normalized.contains("://") {
        return Err(PathValidationError::Url);
    }

    if normalized.chars().any(char::is_control) {
        return Err(PathValidationError::InvalidCharacter);
    }

    Ok(())
}

/// `C:/...` style prefixes are absolute on Windows even when `Path` disagrees.
fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
