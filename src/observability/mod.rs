//! # Observability
//!
//! Structured logging for the directory service.

pub mod logger;

pub use logger::{Logger, Severity};
