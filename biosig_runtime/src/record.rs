//! Run records — seeded runs persisted with their canonical hash.
//!
//! A record carries everything needed to reproduce the run (engine
//! version, environment, years, seed, input) plus the result and the
//! SHA-256 of its canonical serialization.
//!
//! File name: `run_<seed as 16 hex digits>.json`.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use biosig_engine::hashing::canonical_hash;
use biosig_engine::{SimulationResult, ENGINE_VERSION};

use crate::error::{RuntimeError, RuntimeResult};

/// Run record on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunRecord {
    /// Engine version that produced the result.
    pub engine_version: u32,
    pub environment: String,
    pub years: f64,
    pub seed: u64,
    pub original_sequence: String,
    pub result: SimulationResult,
    /// SHA-256 of the canonical run serialization.
    pub hash: String,
}

impl RunRecord {
    /// Build a record for a finished run, computing its canonical hash.
    pub fn new(
        environment: &str,
        years: f64,
        seed: u64,
        original_sequence: &str,
        result: SimulationResult,
    ) -> Self {
        let hash = canonical_hash(environment, years, seed, original_sequence, &result);
        Self {
            engine_version: ENGINE_VERSION,
            environment: environment.to_string(),
            years,
            seed,
            original_sequence: original_sequence.to_string(),
            result,
            hash,
        }
    }

    /// Recompute the canonical hash from the record's content.
    pub fn recompute_hash(&self) -> String {
        canonical_hash(
            &self.environment,
            self.years,
            self.seed,
            &self.original_sequence,
            &self.result,
        )
    }
}

pub fn record_file_name(seed: u64) -> String {
    format!("run_{:016x}.json", seed)
}

/// Save a record into `dir`, overwriting any record with the same seed.
pub fn save_record(dir: &Path, record: &RunRecord) -> RuntimeResult<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(record_file_name(record.seed));
    let content = serde_json::to_string_pretty(record)?;

    let mut file = File::create(&path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    Ok(path)
}

/// Load a record from an explicit path.
pub fn load_record(path: &Path) -> RuntimeResult<RunRecord> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| RuntimeError::BadRecord {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the record for `seed` in `dir`. `None` if no such file exists.
pub fn load_record_for_seed(dir: &Path, seed: u64) -> RuntimeResult<Option<RunRecord>> {
    let path = dir.join(record_file_name(seed));
    if !path.exists() {
        return Ok(None);
    }
    load_record(&path).map(Some)
}

/// List record files in `dir`, sorted by file name.
pub fn list_records(dir: &Path) -> RuntimeResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let is_record = name
            .to_string_lossy()
            .strip_prefix("run_")
            .and_then(|s| s.strip_suffix(".json"))
            .is_some_and(|hex| u64::from_str_radix(hex, 16).is_ok());
        if is_record {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Verify a record's stored hash against its content.
/// Returns true if the hash matches the canonical serialization.
pub fn verify_record_hash(record: &RunRecord) -> bool {
    record.recompute_hash() == record.hash
}
