//! # verity-observability
//!
//! Structured tracing for the verification cascade: subscriber setup driven
//! by `VERITY_LOG`, span macros per operation, and structured log events.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
