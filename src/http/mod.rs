//! HTTP hosting subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, function dispatch by path)
//!     → request.rs (request ID, parse into FunctionRequest)
//!     → functions::Function::call
//!     → response.rs (Reply → HTTP response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::HostError;
pub use server::HttpServer;
