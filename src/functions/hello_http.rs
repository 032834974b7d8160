//! `helloHttp`: answers GET, forbids PUT, rejects everything else.

use serde_json::json;

use super::{Function, FunctionRequest, Reply};

pub const NAME: &str = "helloHttp";

#[derive(Debug, Default, Clone, Copy)]
pub struct HelloHttp;

impl Function for HelloHttp {
    fn name(&self) -> &'static str {
        NAME
    }

    fn call(&self, req: &FunctionRequest) -> Reply {
        match req.method() {
            "GET" => Reply::ok("Hello Http World!"),
            "PUT" => Reply::text(403, "Forbidden!"),
            _ => Reply::json(405, json!({ "error": "Something blew up!" })),
        }
    }
}
