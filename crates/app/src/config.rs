//! Application configuration loading

use bevy::prelude::*;
use livery_config::{ConfigError, ViewerConfig};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "LIVERY_CONFIG";

/// Where the running configuration came from, logged once the logger is up
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum ConfigOrigin {
    Defaults,
    File(String),
    /// The file could not be used; defaults are running instead
    Fallback { path: String, error: String },
}

/// Load the viewer configuration named by `LIVERY_CONFIG`, or the defaults
pub fn from_env() -> (ViewerConfig, ConfigOrigin) {
    load(std::env::var(CONFIG_ENV).ok())
}

fn load(path: Option<String>) -> (ViewerConfig, ConfigOrigin) {
    let Some(path) = path else {
        return (ViewerConfig::default(), ConfigOrigin::Defaults);
    };

    match ViewerConfig::from_json_file(&path) {
        Ok(config) => (config, ConfigOrigin::File(path)),
        Err(err) => fallback(path, err),
    }
}

fn fallback(path: String, err: ConfigError) -> (ViewerConfig, ConfigOrigin) {
    (
        ViewerConfig::default(),
        ConfigOrigin::Fallback {
            path,
            error: err.to_string(),
        },
    )
}

/// Startup system reporting the configuration source
pub fn log_config_origin(origin: Res<ConfigOrigin>, config: Res<ViewerConfig>) {
    match origin.as_ref() {
        ConfigOrigin::Defaults => info!("Using default configuration"),
        ConfigOrigin::File(path) => info!("Loaded configuration from {}", path),
        ConfigOrigin::Fallback { path, error } => {
            warn!("Ignoring {} ({}), using default configuration", path, error)
        }
    }
    info!("Car model: {}", config.model.path);
}
