//! Example HTTP functions and a local host to run them.

pub mod config;
pub mod functions;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::HostConfig;
pub use functions::{Function, FunctionRequest, Registry, Reply};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
