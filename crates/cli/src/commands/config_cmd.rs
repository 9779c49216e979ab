//! `roamer config` - print the effective configuration.

use roamer_config::AppConfig;
use std::path::Path;

pub fn show(config: &AppConfig, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| AppConfig::config_dir().join("config.toml"));
    println!("# Config file: {}", path.display());
    println!(
        "# Augmentation: {}",
        if config.augmentation_available() {
            "available"
        } else {
            "off (basic mode)"
        }
    );
    println!();
    print!("{}", config.to_toml());
    Ok(())
}
