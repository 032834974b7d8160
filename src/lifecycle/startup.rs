//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file, then environment, then command line)
//! - Validate the final configuration
//! - Read the echoed environment value once and build the functions
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The process environment is only read here, never during a request

use std::path::Path;

use crate::config::{
    apply_env_overrides, load_config, validate_config, ConfigError, HostConfig,
};
use crate::functions::Registry;

/// Command-line values that win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub target: Option<String>,
}

/// Resolve the effective configuration.
///
/// Without a file, defaults are used. `lookup` reads the environment.
pub fn resolve_config<F>(
    path: Option<&Path>,
    overrides: &Overrides,
    lookup: F,
) -> Result<HostConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => HostConfig::default(),
    };

    apply_env_overrides(&mut config, &lookup)?;

    if let Some(bind) = &overrides.bind_address {
        config.listener.bind_address = bind.clone();
    }
    if let Some(target) = &overrides.target {
        config.functions.target = Some(target.clone());
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Build every function, injecting the configured environment value.
pub fn build_registry<F>(config: &HostConfig, lookup: F) -> Registry
where
    F: Fn(&str) -> Option<String>,
{
    let env_value = lookup(&config.functions.env_var);
    if env_value.is_none() {
        tracing::warn!(
            env_var = %config.functions.env_var,
            placeholder = %config.functions.missing_env_placeholder,
            "Environment variable unset, helloEnv will render the placeholder"
        );
    }
    Registry::from_config(&config.functions, env_value)
}
