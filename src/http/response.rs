//! Response handling and transformation.
//!
//! # Responsibilities
//! - Turn a function `Reply` into an HTTP response
//! - Map host-level failures (unknown function) to status codes
//!
//! # Design Decisions
//! - Text replies are served as HTML, matching how the functions build them
//! - Out-of-range status codes become 500 rather than panicking

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::functions::{Reply, ReplyBody};

pub const HTML_UTF8: &str = "text/html; charset=utf-8";

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self.body {
            ReplyBody::Text(text) => (status, [(header::CONTENT_TYPE, HTML_UTF8)], text).into_response(),
            ReplyBody::Json(value) => (status, Json(value)).into_response(),
        }
    }
}

/// Failures of the host itself, before any function runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("function `{0}` is not deployed")]
    UnknownFunction(String),

    #[error("no target function is configured")]
    NoTarget,
}

impl IntoResponse for HostError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}
