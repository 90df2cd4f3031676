#![forbid(unsafe_code)]

//! Biosignature evolution runtime.
//!
//! Wraps the engine with layered configuration, tracing setup, seeded
//! reproducible runs, run records, replay, and run summaries.
//!
//! No mutation logic lives here; it is all delegated to the engine.

pub mod error;
pub mod config;
pub mod logging;
pub mod record;
pub mod run;
pub mod replay;
pub mod summary;

pub use error::{RuntimeError, RuntimeResult};
