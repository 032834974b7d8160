//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Host and functions produce:
//!     → logging.rs (structured log events)
//!     → tower_http TraceLayer (per-request spans)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through every log line of a request

pub mod logging;

pub use logging::init_logging;
