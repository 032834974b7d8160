//! The deployable functions and the contract they share.
//!
//! # Data Flow
//! ```text
//! host (http/) parses the wire request
//!     → FunctionRequest (method, lower-cased headers, query, body)
//!     → Function::call (pure, synchronous)
//!     → Reply (one status + one body)
//!     → host writes the response
//! ```
//!
//! # Design Decisions
//! - Functions return their reply instead of writing to a sink, so exactly
//!   one status/body pair per invocation holds by construction
//! - Missing or malformed input degrades to defaults; nothing here fails
//! - Configuration (the echoed environment value) is injected when the
//!   function is built, never read during a call

pub mod escape;
pub mod hello_content;
pub mod hello_env;
pub mod hello_get;
pub mod hello_http;
pub mod reply;
pub mod request;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use escape::escape_html;
pub use hello_content::{ContentType, HelloContent};
pub use hello_env::HelloEnv;
pub use hello_get::HelloGet;
pub use hello_http::HelloHttp;
pub use reply::{Reply, ReplyBody};
pub use request::{FunctionRequest, RequestBody};

use crate::config::FunctionsConfig;

/// Name greeted when the request supplies none.
pub const DEFAULT_NAME: &str = "World";

/// Every function name the registry can serve.
pub const FUNCTION_NAMES: [&str; 4] = [
    hello_env::NAME,
    hello_http::NAME,
    hello_content::NAME,
    hello_get::NAME,
];

/// A single-request transform.
pub trait Function: Send + Sync + std::fmt::Debug {
    /// Name the function is deployed under.
    fn name(&self) -> &'static str;

    /// Map one request to its reply.
    fn call(&self, req: &FunctionRequest) -> Reply;
}

/// Functions keyed by deployed name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    functions: BTreeMap<&'static str, Arc<dyn Function>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full set of functions from configuration.
    ///
    /// `env_value` is the already-read value of the configured environment
    /// variable; `None` when unset.
    pub fn from_config(config: &FunctionsConfig, env_value: Option<String>) -> Self {
        let hello_env = HelloEnv::new(env_value)
            .with_missing_placeholder(config.missing_env_placeholder.clone());

        Self::new()
            .with(hello_env)
            .with(HelloHttp)
            .with(HelloContent)
            .with(HelloGet)
    }

    /// Register a function, replacing any with the same name.
    pub fn with(mut self, function: impl Function + 'static) -> Self {
        self.functions.insert(function.name(), Arc::new(function));
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.functions.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
