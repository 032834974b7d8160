//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4) when the caller sent none
//! - Parse the wire request into the `FunctionRequest` view
//! - Parse the body according to its declared media type
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Body parsing uses the media type without parameters, case-insensitively;
//!   the raw header is still passed through for functions to inspect
//! - Malformed bodies become `RequestBody::Empty` instead of errors

use axum::http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, Method, Request, Uri};
use serde_json::{Map, Value};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::functions::{FunctionRequest, RequestBody};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates a fresh UUID v4 request ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Read the request ID header, if present and printable.
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Build the function-facing view of a wire request.
pub fn function_request(method: &Method, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> FunctionRequest {
    let mut req = FunctionRequest::new(method.as_str());

    for (name, value) in headers {
        // Non-UTF-8 header values are not representable in the view.
        if let Ok(value) = value.to_str() {
            req = req.with_header(name.as_str(), value);
        }
    }

    if let Some(query) = uri.query() {
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            req = req.with_query(name, value);
        }
    }

    let essence = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(media_type);

    req.with_body(parse_body(essence.as_deref(), body))
}

/// Media type without parameters, lower-cased: `Text/Plain; charset=utf-8`
/// becomes `text/plain`.
pub fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Parse a body for the given media type.
pub fn parse_body(media_type: Option<&str>, body: &[u8]) -> RequestBody {
    if body.is_empty() {
        return RequestBody::Empty;
    }

    match media_type {
        Some("application/json") => match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => RequestBody::Fields(fields),
            Ok(_) => RequestBody::Empty,
            Err(e) => {
                tracing::debug!(error = %e, "Discarding malformed JSON body");
                RequestBody::Empty
            }
        },
        Some("application/x-www-form-urlencoded") => {
            let fields: Map<String, Value> = url::form_urlencoded::parse(body)
                .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
                .collect();
            RequestBody::Fields(fields)
        }
        Some("text/plain") => RequestBody::Text(String::from_utf8_lossy(body).into_owned()),
        _ => RequestBody::Bytes(body.to_vec()),
    }
}
