pub mod config_cmd;
pub mod locations;
pub mod query;

use roamer_config::AppConfig;
use roamer_store::{CsvSource, RecordStore, SourceSpec};
use tracing::debug;

/// Load every configured source, printing a warning for each one skipped.
pub fn load_store(config: &AppConfig) -> Result<RecordStore, Box<dyn std::error::Error>> {
    debug!(data_dir = %config.data_dir, sources = config.sources.len(), "Loading data sources");
    let source = CsvSource::new(&config.data_dir);
    let specs: Vec<SourceSpec> = config
        .sources
        .iter()
        .map(|s| SourceSpec::new(s.category(), &s.path))
        .collect();

    let report = RecordStore::load(&source, &specs)?;
    for failure in &report.failures {
        println!("Warning: Error loading {}: {}", failure.path, failure.error);
    }
    Ok(report.store)
}
