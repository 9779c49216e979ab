//! `roamer locations` - list what the data covers.

use roamer_config::AppConfig;

pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::load_store(config)?;
    let locations = store.locations();

    println!("{} locations ({} facts):", locations.len(), store.len());
    for location in locations {
        let categories: Vec<_> = store
            .facts_for(location)
            .map(|f| f.category.to_string())
            .collect();
        println!("  - {location} [{}]", categories.join(", "));
    }
    Ok(())
}
