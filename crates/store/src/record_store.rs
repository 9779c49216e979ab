//! Record store: the immutable, ordered fact collection.
//!
//! Store order is load order: sources in the order they were configured,
//! rows in file order. Location resolution and aggregation both depend on it.

use roamer_core::error::SourceError;
use roamer_core::fact::{Category, Fact};
use roamer_core::source::DataSource;
use tracing::{info, warn};

/// One configured source: which file, and what its rows are about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub category: Category,
    pub path: String,
}

impl SourceSpec {
    pub fn new(category: Category, path: impl Into<String>) -> Self {
        Self {
            category,
            path: path.into(),
        }
    }
}

/// A source that failed to load. The remaining sources still load.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub path: String,
    pub error: SourceError,
}

/// The outcome of loading every configured source.
#[derive(Debug)]
pub struct LoadReport {
    pub store: RecordStore,
    pub failures: Vec<SourceFailure>,
}

/// Errors that stop the store from being built at all.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No records loaded from {attempted} source(s)")]
    NoRecords { attempted: usize },
}

/// Immutable collection of facts in load order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    facts: Vec<Fact>,
}

impl RecordStore {
    pub fn new(facts: Vec<Fact>) -> Self {
        Self { facts }
    }

    /// Load every source through `data_source`.
    ///
    /// A failing source is logged and skipped. Ending up with no facts at
    /// all is fatal.
    pub fn load(
        data_source: &dyn DataSource,
        sources: &[SourceSpec],
    ) -> Result<LoadReport, StoreError> {
        let mut facts = Vec::new();
        let mut failures = Vec::new();

        for spec in sources {
            match data_source.load(&spec.path, &spec.category) {
                Ok(loaded) => facts.extend(loaded),
                Err(error) => {
                    warn!(
                        source = %spec.path,
                        kind = data_source.name(),
                        malformed = error.is_malformed(),
                        error = %error,
                        "Skipping data source"
                    );
                    failures.push(SourceFailure {
                        path: spec.path.clone(),
                        error,
                    });
                }
            }
        }

        if facts.is_empty() {
            return Err(StoreError::NoRecords {
                attempted: sources.len(),
            });
        }

        let store = Self::new(facts);
        info!(
            facts = store.len(),
            locations = store.locations().len(),
            failed_sources = failures.len(),
            "Record store ready"
        );
        Ok(LoadReport { store, failures })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Facts about exactly `location`, in store order.
    pub fn facts_for<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a Fact> {
        self.facts.iter().filter(move |f| f.location == location)
    }

    /// Whether any fact names exactly `location`.
    pub fn contains_location(&self, location: &str) -> bool {
        self.facts.iter().any(|f| f.location == location)
    }

    /// Distinct locations in first-seen store order.
    pub fn locations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for fact in &self.facts {
            if !seen.contains(&fact.location.as_str()) {
                seen.push(&fact.location);
            }
        }
        seen
    }
}

impl FromIterator<Fact> for RecordStore {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
