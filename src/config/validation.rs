//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the target names a deployable function
//! - Validate value ranges (timeouts > 0, body limit > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HostConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::HostConfig;
use crate::functions::FUNCTION_NAMES;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("functions.target `{0}` is not a known function")]
    UnknownTarget(String),

    #[error("functions.env_var must not be empty")]
    EmptyEnvVar,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,
}

/// Check every semantic constraint, collecting all failures.
pub fn validate_config(config: &HostConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Some(target) = &config.functions.target {
        if !FUNCTION_NAMES.contains(&target.as_str()) {
            errors.push(ValidationError::UnknownTarget(target.clone()));
        }
    }

    if config.functions.env_var.is_empty() {
        errors.push(ValidationError::EmptyEnvVar);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&HostConfig::default()), Ok(()));
    }

    #[test]
    fn test_known_target_is_valid() {
        let mut config = HostConfig::default();
        config.functions.target = Some("helloHttp".into());
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = HostConfig::default();
        config.listener.bind_address = "localhost".into();
        config.functions.target = Some("helloWorld".into());
        config.functions.env_var = String::new();
        config.timeouts.request_secs = 0;
        config.security.max_body_size = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("localhost".into()),
                ValidationError::UnknownTarget("helloWorld".into()),
                ValidationError::EmptyEnvVar,
                ValidationError::ZeroRequestTimeout,
                ValidationError::ZeroBodyLimit,
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::UnknownTarget("nope".into());
        assert_eq!(err.to_string(), "functions.target `nope` is not a known function");
    }
}
