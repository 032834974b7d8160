//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the function endpoints
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Bind server to listener
//! - Dispatch each request to exactly one function

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, Path, State},
    http::{HeaderMap, Method, Request, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::HostConfig;
use crate::functions::Registry;
use crate::http::request::{function_request, request_id, MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::HostError;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub target: Option<String>,
}

/// HTTP server hosting the functions.
pub struct HttpServer {
    router: Router,
    config: HostConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `registry` with the given configuration.
    pub fn new(config: HostConfig, registry: Registry) -> Self {
        let state = AppState {
            registry: Arc::new(registry),
            target: config.functions.target.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &HostConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(invoke_target))
            .route("/{function}", any(invoke_named))
            .route("/{function}/{*rest}", any(invoke_named))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The configured router, for driving without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            target = ?self.config.functions.target,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }
}

fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request),
        method = %request.method(),
        uri = %request.uri(),
    )
}

/// `ANY /{function}[/{*rest}]`
async fn invoke_named(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, HostError> {
    let name = params.get("function").map(String::as_str).unwrap_or_default();
    invoke(&state, name, &method, &uri, &headers, &body)
}

/// `ANY /`: the configured target, if any.
async fn invoke_target(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, HostError> {
    let name = state.target.clone().ok_or(HostError::NoTarget)?;
    invoke(&state, &name, &method, &uri, &headers, &body)
}

fn invoke(
    state: &AppState,
    name: &str,
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Response, HostError> {
    let Some(function) = state.registry.get(name) else {
        tracing::warn!(function = %name, "Unknown function");
        return Err(HostError::UnknownFunction(name.to_string()));
    };

    let req = function_request(method, uri, headers, body);
    let reply = function.call(&req);

    tracing::debug!(
        function = function.name(),
        method = %method,
        status = reply.status,
        "Function invoked"
    );

    Ok(reply.into_response())
}
