// Configuration module for medloc
// Reads from environment variables with sensible defaults

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Marker interface that identifies a request type (MEDLOC_REQUEST_INTERFACE)
    pub request_interface: String,

    /// Generic interface that identifies a handler (MEDLOC_HANDLER_INTERFACE)
    pub handler_interface: String,

    /// Extension candidate file names must end with (MEDLOC_SOURCE_EXTENSION)
    pub source_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_interface: "IRequest".to_string(),
            handler_interface: "IRequestHandler".to_string(),
            source_extension: ".cs".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("MEDLOC_REQUEST_INTERFACE") {
            let trimmed = val.trim();
            if trimmed.is_empty() {
                eprintln!(
                    "medloc: Warning: empty MEDLOC_REQUEST_INTERFACE, using default: {}",
                    config.request_interface
                );
            } else {
                config.request_interface = trimmed.to_string();
            }
        }

        if let Ok(val) = env::var("MEDLOC_HANDLER_INTERFACE") {
            let trimmed = val.trim();
            if trimmed.is_empty() {
                eprintln!(
                    "medloc: Warning: empty MEDLOC_HANDLER_INTERFACE, using default: {}",
                    config.handler_interface
                );
            } else {
                config.handler_interface = trimmed.to_string();
            }
        }

        if let Ok(val) = env::var("MEDLOC_SOURCE_EXTENSION") {
            let trimmed = val.trim();
            if trimmed.is_empty() {
                eprintln!(
                    "medloc: Warning: empty MEDLOC_SOURCE_EXTENSION, using default: {}",
                    config.source_extension
                );
            } else {
                config.source_extension = trimmed.to_string();
            }
        }

        config
    }

    /// Get the global configuration instance
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.request_interface, "IRequest");
        assert_eq!(config.handler_interface, "IRequestHandler");
        assert_eq!(config.source_extension, ".cs");
    }
}
