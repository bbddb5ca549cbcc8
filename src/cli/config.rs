//! Configuration loading
//!
//! The configuration file is a single JSON object; every field is optional
//! and falls back to the `HttpServerConfig` default.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::http_server::HttpServerConfig;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{CliError, CliResult};

/// Load configuration from `path`, or defaults when no path is given
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let (config, source) = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
            })?;
            let config: HttpServerConfig = serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;
            (config, path.display().to_string())
        }
        None => (HttpServerConfig::default(), "defaults".to_string()),
    };

    validate_config(&config)?;

    log_event_with_fields(
        Event::ConfigLoaded,
        &[("port", config.port.to_string().as_str()), ("source", source.as_str())],
    );
    Ok(config)
}

/// Reject configurations the server cannot honour
pub fn validate_config(config: &HttpServerConfig) -> CliResult<()> {
    if config.port == 0 {
        return Err(CliError::config_error("port must be > 0"));
    }

    if config.host.trim().is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }

    let unknown = config.unknown_collections();
    if !unknown.is_empty() {
        return Err(CliError::config_error(format!(
            "Unknown collections: {}",
            unknown.join(", ")
        )));
    }

    let mut seen = HashSet::new();
    for name in &config.collections {
        if !seen.insert(name.as_str()) {
            return Err(CliError::config_error(format!(
                "Collection listed twice: {}",
                name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), HttpServerConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let file = config_file(r#"{"port": 9000, "seed_demo_data": true}"#);
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.seed_demo_data);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.json").as_path())).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::ConfigError);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let file = config_file("{port: 80");
        let err = load_config(Some(file.path())).unwrap_err();
        assert_eq!(err.code(), CliErrorCode::ConfigError);
        assert!(err.message().starts_with("Invalid config JSON"));
    }

    #[test]
    fn test_validation_failures() {
        let zero_port = HttpServerConfig::with_port(0);
        assert!(validate_config(&zero_port).is_err());

        let unknown = HttpServerConfig {
            collections: vec!["widgets".to_string()],
            ..Default::default()
        };
        let err = validate_config(&unknown).unwrap_err();
        assert_eq!(err.message(), "Unknown collections: widgets");

        let duplicate = HttpServerConfig {
            collections: vec!["items".to_string(), "items".to_string()],
            ..Default::default()
        };
        assert!(validate_config(&duplicate).is_err());
    }
}
