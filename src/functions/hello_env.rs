//! `helloEnv`: greets by name and echoes one environment value.
//!
//! The environment value is captured once, when the function is built,
//! so invocations never touch the process environment.

use std::borrow::Cow;

use super::escape::escape_html;
use super::{Function, FunctionRequest, Reply, DEFAULT_NAME};

pub const NAME: &str = "helloEnv";

/// Rendered in place of the environment value when it is unset.
pub const DEFAULT_MISSING_PLACEHOLDER: &str = "undefined";

#[derive(Debug, Clone)]
pub struct HelloEnv {
    env_value: Option<String>,
    missing_placeholder: String,
}

impl HelloEnv {
    pub fn new(env_value: Option<String>) -> Self {
        Self {
            env_value,
            missing_placeholder: DEFAULT_MISSING_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_missing_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.missing_placeholder = placeholder.into();
        self
    }

    /// Query `name` first, then body field `name`. Empty values are skipped.
    fn resolve_name<'a>(req: &'a FunctionRequest) -> Cow<'a, str> {
        if let Some(name) = req.query("name").filter(|n| !n.is_empty()) {
            return name.into();
        }
        req.body()
            .field("name")
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_NAME.into())
    }
}

impl Function for HelloEnv {
    fn name(&self) -> &'static str {
        NAME
    }

    fn call(&self, req: &FunctionRequest) -> Reply {
        let name = Self::resolve_name(req);
        let env = self
            .env_value
            .as_deref()
            .unwrap_or(self.missing_placeholder.as_str());

        Reply::ok(format!(
            "<h3>Hello {}!<h3><h1>Env Variable: {}</h1>",
            escape_html(&name),
            escape_html(env),
        ))
    }
}
