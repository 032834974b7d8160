//! Read-only request view handed to every function.
//!
//! The host parses the wire request once; functions only ever see this
//! shape. Header names are lower-cased on insertion so lookups are
//! case-insensitive.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::{Map, Value};

/// Request body, shaped by the declared content type.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body, or a body the host could not parse.
    #[default]
    Empty,
    /// Key-value mapping (JSON object or url-encoded form).
    Fields(Map<String, Value>),
    /// Raw bytes.
    Bytes(Vec<u8>),
    /// Plain text.
    Text(String),
}

impl RequestBody {
    /// Look up a named field as text.
    ///
    /// Only `Fields` bodies carry fields. Strings are returned as-is.
    /// `null`, `false` and numeric zero are absent; other numbers and
    /// `true` render as their JSON text, arrays too, and objects as
    /// `[object Object]`.
    pub fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let RequestBody::Fields(fields) = self else {
            return None;
        };
        match fields.get(name)? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Object(_) => Some(Cow::Borrowed("[object Object]")),
            other => Some(Cow::Owned(other.to_string())),
        }
    }

    /// The body as text. Bytes are decoded as UTF-8, lossily.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            RequestBody::Text(s) => Some(Cow::Borrowed(s.as_str())),
            RequestBody::Bytes(b) => Some(String::from_utf8_lossy(b)),
            RequestBody::Empty | RequestBody::Fields(_) => None,
        }
    }
}

#[cfg(test)]
impl RequestBody {
    /// `Fields` body from a `json!` object literal.
    pub(crate) fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => RequestBody::Fields(map),
            other => panic!("expected a JSON object, got {other}"),
        }
    }
}

/// A single incoming invocation.
#[derive(Debug, Clone)]
pub struct FunctionRequest {
    method: String,
    headers: HashMap<String, String>,
    query: HashMap<String, String>,
    body: RequestBody,
}

impl FunctionRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            headers: HashMap::new(),
            query: HashMap::new(),
            body: RequestBody::Empty,
        }
    }

    /// Add a header. Names are stored lower-cased; a repeated name replaces
    /// the earlier value.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Header value by name, case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}
