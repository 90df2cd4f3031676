//! Runtime error types.

use std::path::PathBuf;

use biosig_engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Years must be a finite number, got {0}")]
    NonFiniteYears(f64),

    #[error("Bad run record {path}: {reason}")]
    BadRecord { path: PathBuf, reason: String },

    #[error("Engine version mismatch: record has {found}, runtime has {expected}")]
    EngineVersion { expected: u32, found: u32 },

    #[error("Hash mismatch: recorded {recorded}, recomputed {recomputed}")]
    HashMismatch { recorded: String, recomputed: String },
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
