//! Fact storage for Roamer.
//!
//! The [`RecordStore`] is filled once at startup from one or more data
//! sources and is read-only afterwards, so it can be shared freely between
//! sessions behind an `Arc`.

pub mod csv_source;
pub mod record_store;

pub use csv_source::CsvSource;
pub use record_store::{LoadReport, RecordStore, SourceFailure, SourceSpec, StoreError};
