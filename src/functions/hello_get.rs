//! `helloGet`: a fixed greeting regardless of method or input.

use super::{Function, FunctionRequest, Reply};

pub const NAME: &str = "helloGet";

#[derive(Debug, Default, Clone, Copy)]
pub struct HelloGet;

impl Function for HelloGet {
    fn name(&self) -> &'static str {
        NAME
    }

    fn call(&self, _req: &FunctionRequest) -> Reply {
        Reply::ok("Hello GET World!")
    }
}
