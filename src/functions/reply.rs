//! The single status + body pair a function produces.

use serde_json::Value;

/// Reply body.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    /// Markup or plain text; served as HTML.
    Text(String),
    /// Structured value; served as JSON.
    Json(Value),
}

/// Terminal result of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: ReplyBody,
}

impl Reply {
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: ReplyBody::Text(body.into()),
        }
    }

    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: ReplyBody::Json(body),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::text(200, body)
    }

    /// Text body, if this is a text reply.
    pub fn as_text(&self) -> Option<&str> {
        match &self.body {
            ReplyBody::Text(s) => Some(s),
            ReplyBody::Json(_) => None,
        }
    }
}
