//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//! - console rendering lives with the CLI views

mod json;

pub use json::JsonEventSink;
