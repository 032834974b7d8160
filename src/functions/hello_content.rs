//! `helloContent`: reads the name from the body according to its declared
//! content type.
//!
//! # Dispatch
//! | content-type                        | name taken from          |
//! |-------------------------------------|--------------------------|
//! | `application/json`                  | field `name`             |
//! | `application/octet-stream`          | raw bytes, as text       |
//! | `text/plain`                        | body text                |
//! | `application/x-www-form-urlencoded` | field `name`             |
//! | anything else                       | nothing (default greets) |
//!
//! The header is matched exactly and case-sensitively; parameters such as
//! `; charset=utf-8` make the type unrecognized.

use std::borrow::Cow;

use super::escape::escape_html;
use super::{Function, FunctionRequest, Reply, RequestBody, DEFAULT_NAME};

pub const NAME: &str = "helloContent";

/// Content types this function knows how to read a name from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    OctetStream,
    PlainText,
    FormUrlEncoded,
    Unrecognized,
}

impl ContentType {
    pub fn from_header(value: Option<&str>) -> Self {
        match value {
            Some("application/json") => ContentType::Json,
            Some("application/octet-stream") => ContentType::OctetStream,
            Some("text/plain") => ContentType::PlainText,
            Some("application/x-www-form-urlencoded") => ContentType::FormUrlEncoded,
            _ => ContentType::Unrecognized,
        }
    }

    /// Pull the name candidate out of `body` for this content type.
    pub fn extract_name<'a>(&self, body: &'a RequestBody) -> Option<Cow<'a, str>> {
        match self {
            ContentType::Json | ContentType::FormUrlEncoded => body.field("name"),
            ContentType::OctetStream | ContentType::PlainText => body.as_text(),
            ContentType::Unrecognized => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HelloContent;

impl Function for HelloContent {
    fn name(&self) -> &'static str {
        NAME
    }

    fn call(&self, req: &FunctionRequest) -> Reply {
        let content_type = ContentType::from_header(req.header("content-type"));
        let name = content_type
            .extract_name(req.body())
            .filter(|n| !n.is_empty())
            .unwrap_or(Cow::Borrowed(DEFAULT_NAME));

        Reply::ok(format!("Hello {}!", escape_html(&name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(content_type: Option<&str>, body: RequestBody) -> Reply {
        let mut req = FunctionRequest::new("POST").with_body(body);
        if let Some(ct) = content_type {
            req = req.with_header("content-type", ct);
        }
        HelloContent.call(&req)
    }

    #[test]
    fn test_json() {
        let reply = call(Some("application/json"), RequestBody::from_json(json!({"name": "John"})));
        assert_eq!(reply, Reply::text(200, "Hello John!"));
    }

    #[test]
    fn test_octet_stream() {
        let reply = call(
            Some("application/octet-stream"),
            RequestBody::Bytes(b"John".to_vec()),
        );
        assert_eq!(reply, Reply::text(200, "Hello John!"));
    }

    #[test]
    fn test_plain_text() {
        let reply = call(Some("text/plain"), RequestBody::Text("John".into()));
        assert_eq!(reply, Reply::text(200, "Hello John!"));
    }

    #[test]
    fn test_form() {
        let reply = call(
            Some("application/x-www-form-urlencoded"),
            RequestBody::from_json(json!({"name": "John"})),
        );
        assert_eq!(reply, Reply::text(200, "Hello John!"));
    }

    #[test]
    fn test_unrecognized_or_missing_type() {
        assert_eq!(call(None, RequestBody::Empty), Reply::text(200, "Hello World!"));
        assert_eq!(
            call(Some("text/html"), RequestBody::Text("John".into())),
            Reply::text(200, "Hello World!")
        );
        assert_eq!(
            call(Some("Application/JSON"), RequestBody::from_json(json!({"name": "John"}))),
            Reply::text(200, "Hello World!")
        );
        assert_eq!(
            call(Some("application/json; charset=utf-8"), RequestBody::from_json(json!({"name": "John"}))),
            Reply::text(200, "Hello World!")
        );
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(
            call(Some("text/plain"), RequestBody::Text(String::new())),
            Reply::text(200, "Hello World!")
        );
        assert_eq!(
            call(Some("application/json"), RequestBody::from_json(json!({"name": ""}))),
            Reply::text(200, "Hello World!")
        );
    }

    #[test]
    fn test_body_shape_mismatch_falls_back() {
        assert_eq!(
            call(Some("application/json"), RequestBody::Text("John".into())),
            Reply::text(200, "Hello World!")
        );
        assert_eq!(
            call(Some("text/plain"), RequestBody::from_json(json!({"name": "<script>alert(1)</script>"}))),
            Reply::text(200, "Hello World!")
        );
    }

    #[test]
    fn test_escapes_xss() {
        let reply = call(
            Some("text/plain"),
            RequestBody::Text("<script>alert(1)</script>".into()),
        );
        let text = reply.as_text().unwrap();
        assert!(!text.contains("<script>"));
        assert_eq!(text, "Hello &lt;script&gt;alert(1)&lt;/script&gt;!");
    }

    #[test]
    fn test_non_string_json_name() {
        let reply = call(Some("application/json"), RequestBody::from_json(json!({"name": 7})));
        assert_eq!(reply.as_text(), Some("Hello 7!"));
    }

    #[test]
    fn test_falsy_json_name_falls_back() {
        for name in [json!(false), json!(0), json!(null)] {
            let reply = call(Some("application/json"), RequestBody::from_json(json!({"name": name})));
            assert_eq!(reply, Reply::text(200, "Hello World!"), "{name}");
        }
    }

    #[test]
    fn test_object_json_name() {
        let reply = call(
            Some("application/json"),
            RequestBody::from_json(json!({"name": {"a": 1}})),
        );
        assert_eq!(reply.as_text(), Some("Hello [object Object]!"));
    }
}
