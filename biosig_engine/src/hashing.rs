//! Canonical hashing of a simulation run.
//!
//! Deterministic canonical serialization + SHA-256 hashing.
//!
//! Rules:
//!   - Field order fixed: engine_version, environment, years, seed,
//!     original_sequence, evolved_sequence, changes
//!   - Changes in ascending position, fields in fixed order; `causes`
//!     holds cause keys in trigger order
//!   - UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::SimulationResult;
use crate::ENGINE_VERSION;

/// Canonical serialization of a run to UTF-8 JSON bytes.
pub fn canonical_serialize(
    environment: &str,
    years: f64,
    seed: u64,
    original: &str,
    result: &SimulationResult,
) -> Vec<u8> {
    let obj = build_canonical_value(environment, years, seed, original, result);
    // Value → string cannot fail: keys are strings and non-finite
    // floats are mapped to null by serde_json::Value.
    obj.to_string().into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(
    environment: &str,
    years: f64,
    seed: u64,
    original: &str,
    result: &SimulationResult,
) -> String {
    hex_digest(&canonical_serialize(environment, years, seed, original, result))
}

/// Lowercase hex SHA-256 of arbitrary bytes.
pub fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn build_canonical_value(
    environment: &str,
    years: f64,
    seed: u64,
    original: &str,
    result: &SimulationResult,
) -> Value {
    let mut changes = result.changes.clone();
    changes.sort_by_key(|c| c.position);

    let changes_list: Vec<Value> = changes
        .iter()
        .map(|c| {
            let mut m = Map::new();
            m.insert("position".to_string(), Value::from(c.position as u64));
            m.insert(
                "original_residue".to_string(),
                Value::String(c.original_residue.to_string()),
            );
            m.insert(
                "evolved_residue".to_string(),
                Value::String(c.evolved_residue.to_string()),
            );
            m.insert("reason".to_string(), Value::String(c.reason.clone()));
            m.insert(
                "causes".to_string(),
                Value::Array(
                    c.causes
                        .iter()
                        .map(|cause| Value::String(cause.key().to_string()))
                        .collect(),
                ),
            );
            Value::Object(m)
        })
        .collect();

    // engine_version MUST be first: it binds the hash to the rule set.
    let mut root = Map::new();
    root.insert("engine_version".to_string(), Value::from(ENGINE_VERSION));
    root.insert(
        "environment".to_string(),
        Value::String(environment.to_string()),
    );
    root.insert("years".to_string(), Value::from(years));
    root.insert("seed".to_string(), Value::from(seed));
    root.insert(
        "original_sequence".to_string(),
        Value::String(original.to_string()),
    );
    root.insert(
        "evolved_sequence".to_string(),
        Value::String(result.evolved_sequence.clone()),
    );
    root.insert("changes".to_string(), Value::Array(changes_list));

    Value::Object(root)
}
