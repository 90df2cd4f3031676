//! Engine error type.
//!
//! The simulate path never fails; these cover typed parsing and
//! result validation only.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown environment {0:?}")]
    UnknownEnvironment(String),

    #[error("invariant violation: [{check}] {detail}")]
    InvariantViolation { check: &'static str, detail: String },
}
