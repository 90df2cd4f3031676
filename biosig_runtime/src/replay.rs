//! Replay — re-run a recorded simulation from its seed.
//!
//! Delegates all mutation logic to the engine. A replay must reproduce
//! the recorded hash exactly; anything else is a determinism failure.

use tracing::{debug, error};

use biosig_engine::hashing::canonical_hash;
use biosig_engine::{SimulationResult, ENGINE_VERSION};

use crate::error::{RuntimeError, RuntimeResult};
use crate::record::RunRecord;
use crate::run::simulate_seeded;

/// Re-run a record and return the fresh result with its canonical hash.
///
/// Refuses records written by a different engine version: the rule set
/// may differ, so hashes are not comparable.
pub fn rebuild_result(record: &RunRecord) -> RuntimeResult<(SimulationResult, String)> {
    if record.engine_version != ENGINE_VERSION {
        return Err(RuntimeError::EngineVersion {
            expected: ENGINE_VERSION,
            found: record.engine_version,
        });
    }

    let result = simulate_seeded(
        &record.original_sequence,
        &record.environment,
        record.years,
        record.seed,
    );
    let hash = canonical_hash(
        &record.environment,
        record.years,
        record.seed,
        &record.original_sequence,
        &result,
    );
    Ok((result, hash))
}

/// Replay a record and require the recorded hash to be reproduced.
pub fn replay_record(record: &RunRecord) -> RuntimeResult<SimulationResult> {
    let (result, hash) = rebuild_result(record)?;
    if hash != record.hash {
        error!(
            seed = record.seed,
            recorded = %record.hash,
            recomputed = %hash,
            "replay diverged from record"
        );
        return Err(RuntimeError::HashMismatch {
            recorded: record.hash.clone(),
            recomputed: hash,
        });
    }
    debug!(seed = record.seed, hash = %hash, "replay matches record");
    Ok(result)
}

/// Verify determinism by running the same record twice.
pub fn verify_determinism(record: &RunRecord) -> RuntimeResult<()> {
    let (_, hash1) = rebuild_result(record)?;
    let (_, hash2) = rebuild_result(record)?;
    if hash1 != hash2 {
        return Err(RuntimeError::HashMismatch {
            recorded: hash1,
            recomputed: hash2,
        });
    }
    Ok(())
}
