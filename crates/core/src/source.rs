//! DataSource trait: where facts come from.
//!
//! A DataSource turns a data identifier plus a category tag into validated
//! facts. Implementations are responsible for refusing hostile identifiers
//! and hostile content; the record store trusts what it receives.

use crate::error::SourceError;
use crate::fact::{Category, Fact};

/// The core DataSource trait.
///
/// Implementations: CSV files under a data directory (`roamer-store`).
pub trait DataSource: Send + Sync {
    /// A human-readable name for this source kind (e.g., "csv").
    fn name(&self) -> &str;

    /// Load every fact the identifier names, tagged with `category`.
    ///
    /// Fails as a whole: a single bad row rejects the entire source.
    fn load(&self, id: &str, category: &Category) -> Result<Vec<Fact>, SourceError>;
}
