//! Seeded simulation runs.
//!
//! Every runtime run is seeded so it can be recorded and replayed:
//!   1. resolve the seed (configured, or freshly drawn)
//!   2. run the engine with a `ChaCha8Rng` from that seed
//!   3. check result invariants
//!   4. build the run record, persist it if a record dir is configured

use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use biosig_engine::engine::simulate_evolution_with;
use biosig_engine::invariants::check_result;
use biosig_engine::{Environment, SimulationResult};

use crate::config::SimulationConfig;
use crate::error::{RuntimeError, RuntimeResult};
use crate::record::{save_record, RunRecord};

/// Outcome of a runtime run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub record: RunRecord,
    /// Where the record was written, if it was.
    pub record_path: Option<PathBuf>,
}

/// Run the engine with a fixed seed. Pure apart from logging.
///
/// Non-finite `years` are rejected: JSON has no encoding for them, so the
/// record could not be read back.
pub fn run_seeded(
    sequence: &str,
    environment: &str,
    years: f64,
    seed: u64,
) -> RuntimeResult<RunRecord> {
    if !years.is_finite() {
        return Err(RuntimeError::NonFiniteYears(years));
    }
    let result = simulate_seeded(sequence, environment, years, seed);
    check_result(sequence, &result)?;
    Ok(RunRecord::new(environment, years, seed, sequence, result))
}

/// Engine call shared by runs and replays.
pub(crate) fn simulate_seeded(
    sequence: &str,
    environment: &str,
    years: f64,
    seed: u64,
) -> SimulationResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    simulate_evolution_with(sequence, environment, years, &mut rng)
}

/// Run according to `config`, persisting a record when configured.
pub fn run(sequence: &str, config: &SimulationConfig) -> RuntimeResult<RunOutcome> {
    let seed = config.seed.unwrap_or_else(rand::random);

    if Environment::from_name(&config.environment).is_none() {
        warn!(
            environment = %config.environment,
            "unknown environment, sequence will be returned unchanged"
        );
    }
    if config.years < 0.0 {
        warn!(years = config.years, "negative years select no positions");
    }

    let record = run_seeded(sequence, &config.environment, config.years, seed)?;
    info!(
        environment = %record.environment,
        years = record.years,
        seed = record.seed,
        length = sequence.chars().count(),
        changes = record.result.changes.len(),
        hash = %record.hash,
        "run complete"
    );

    let record_path = match &config.record_dir {
        Some(dir) => {
            let path = save_record(dir, &record)?;
            info!(path = %path.display(), "run record saved");
            Some(path)
        }
        None => None,
    };

    Ok(RunOutcome {
        record,
        record_path,
    })
}
