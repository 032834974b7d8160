//! HTTP functions host.
//!
//! Runs the example functions locally, the way a serverless platform
//! would: one process, every function reachable by name, optionally one
//! "target" function served at `/`.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http::server (request ID, trace, limits)   │
//!                             │        │                                     │
//!                             │        ▼                                     │
//!                             │   http::request  → FunctionRequest           │
//!                             │        │                                     │
//!                             │        ▼                                     │
//!                             │   functions::{helloEnv, helloHttp,           │
//!                             │               helloContent, helloGet}        │
//!                             │        │                                     │
//!     Client Response         │        ▼                                     │
//!     ◀───────────────────────┼── http::response (Reply → HTTP)              │
//!                             │                                              │
//!                             │   config · observability · lifecycle         │
//!                             └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use http_functions::lifecycle::{build_registry, resolve_config, Overrides, Shutdown};
use http_functions::observability::init_logging;
use http_functions::HttpServer;

/// Serve the example HTTP functions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding config and PORT
    #[arg(short, long)]
    bind: Option<String>,

    /// Function served at `/`, overriding config and FUNCTION_TARGET
    #[arg(short, long)]
    target: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env = |key: &str| std::env::var(key).ok();
    let overrides = Overrides {
        bind_address: args.bind,
        target: args.target,
    };
    let config = resolve_config(args.config.as_deref(), &overrides, env)?;

    init_logging(&config.observability);

    tracing::info!("http-functions v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        target = ?config.functions.target,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        "Configuration loaded"
    );

    let registry = build_registry(&config, env);
    tracing::info!(
        functions = ?registry.names().collect::<Vec<_>>(),
        "Functions deployed"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    HttpServer::new(config, registry)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
