//! Configuration loading from disk and the process environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::HostConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("PORT `{0}` is not a valid port number")]
    InvalidPort(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML document without validating it.
pub fn parse_config(content: &str) -> Result<HostConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HostConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply the deployment environment on top of a loaded config.
///
/// `PORT` replaces the port of `listener.bind_address`; `FUNCTION_TARGET`
/// sets `functions.target`. `lookup` is usually `|k| std::env::var(k).ok()`.
pub fn apply_env_overrides<F>(config: &mut HostConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        config.listener.bind_address = match config.listener.bind_address.parse::<SocketAddr>() {
            Ok(mut addr) => {
                addr.set_port(port);
                addr.to_string()
            }
            Err(_) => format!("0.0.0.0:{port}"),
        };
    }

    if let Some(target) = lookup("FUNCTION_TARGET").filter(|t| !t.is_empty()) {
        config.functions.target = Some(target);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_port_override_keeps_host() {
        let mut config = HostConfig::default();
        config.listener.bind_address = "127.0.0.1:3000".into();
        apply_env_overrides(&mut config, env(&[("PORT", "9000")])).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port() {
        let mut config = HostConfig::default();
        let err = apply_env_overrides(&mut config, env(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "http"));
    }

    #[test]
    fn test_target_override() {
        let mut config = HostConfig::default();
        apply_env_overrides(&mut config, env(&[("FUNCTION_TARGET", "helloEnv")])).unwrap();
        assert_eq!(config.functions.target.as_deref(), Some("helloEnv"));

        apply_env_overrides(&mut config, env(&[("FUNCTION_TARGET", "")])).unwrap();
        assert_eq!(config.functions.target.as_deref(), Some("helloEnv"));
    }

    #[test]
    fn test_no_env_is_noop() {
        let mut config = HostConfig::default();
        apply_env_overrides(&mut config, env(&[])).unwrap();
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/http-functions.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_reports_validation_errors() {
        let path = std::env::temp_dir().join(format!(
            "http-functions-invalid-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[timeouts]\nrequest_secs = 0\n").unwrap();
        let err = load_config(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert_eq!(
            err.to_string(),
            "Validation failed: timeouts.request_secs must be greater than zero"
        );
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(parse_config("[listener"), Err(ConfigError::Parse(_))));
    }
}
