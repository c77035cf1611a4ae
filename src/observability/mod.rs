//! Observability for eventdesk
//!
//! Structured JSON logging: one line per event, explicit severity,
//! synchronous writes, deterministic field ordering.

mod logger;

pub use logger::{Logger, Severity};
