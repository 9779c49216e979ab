//! Security module for Roamer: validation of data source identifiers and content.
//!
//! Provides:
//! - **Path validation**: data files must be relative, visible `.csv` files under the data directory
//! - **Field validation**: row content must be free of control characters, shell metacharacters,
//!   traversal sequences, and oversized values

pub mod field;
pub mod path;

pub use field::{validate_fields, FieldValidationError, MAX_FIELD_LEN};
pub use path::{validate_source_path, PathValidationError};
