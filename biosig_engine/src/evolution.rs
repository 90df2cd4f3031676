//! Per-position mutation process.
//!
//! ALL residue-rewrite logic lives here. Positions are independent:
//!   1. select with probability `years / 1_000_000`
//!   2. apply every pressure rule whose gate fires, in rule order
//!   3. force a random substitution if the residue is still unchanged
//!   4. record the change

use tracing::trace;

use crate::domain::{ChangeRecord, SimulationResult};
use crate::environment::Environment;
use crate::pressures::{MutationCause, GATE_FACTOR, RULES};
use crate::randomness::{pick, RandomSource};
use crate::residues::{self, STANDARD_RESIDUES};

/// Years per unit of mutation rate.
pub const YEARS_PER_RATE_UNIT: f64 = 1_000_000.0;

/// Per-position selection probability. Linear in `years`, unclamped.
pub fn mutation_rate(years: f64) -> f64 {
    years / YEARS_PER_RATE_UNIT
}

/// Run the mutation process over `sequence` for a known environment.
///
/// The input is never modified; a fresh result is returned.
pub fn evolve<S: RandomSource + ?Sized>(
    sequence: &str,
    environment: Environment,
    years: f64,
    source: &mut S,
) -> SimulationResult {
    if sequence.is_empty() {
        return SimulationResult::default();
    }

    let rate = mutation_rate(years);
    let mut evolved = String::with_capacity(sequence.len());
    let mut changes = Vec::new();

    for (position, original) in sequence.chars().enumerate() {
        // NaN rates select nothing.
        if !(source.next_unit() < rate) {
            evolved.push(original);
            continue;
        }

        let (residue, causes) = mutate_residue(original, environment, source);
        evolved.push(residue);

        if residue != original {
            let record = ChangeRecord::new(position, original, residue, causes);
            trace!(
                position,
                original = %original,
                evolved = %residue,
                reason = %record.reason,
                "residue substituted"
            );
            changes.push(record);
        }
    }

    SimulationResult {
        evolved_sequence: evolved,
        changes,
    }
}

/// Apply the environment's pressure rules to one selected residue.
///
/// Later rules overwrite earlier picks; every fired rule keeps its cause.
fn mutate_residue<S: RandomSource + ?Sized>(
    original: char,
    environment: Environment,
    source: &mut S,
) -> (char, Vec<MutationCause>) {
    let props = residues::properties(original);
    let mut residue = original;
    let mut causes = Vec::new();

    for rule in RULES.iter() {
        let Some(weight) = environment.weight(rule.kind) else {
            continue;
        };
        // Gate draw comes first; the guard only decides whether it applies.
        if source.next_unit() < weight * GATE_FACTOR && rule.guard.admits(props) {
            residue = pick(source, rule.candidates);
            causes.push(rule.cause);
        }
    }

    if residue == original {
        residue = random_substitute(original, source);
        causes.push(MutationCause::Random);
    }

    (residue, causes)
}

/// Uniform pick among the standard residues, resampled until it differs
/// from `original`.
fn random_substitute<S: RandomSource + ?Sized>(original: char, source: &mut S) -> char {
    loop {
        let candidate = pick(source, &STANDARD_RESIDUES);
        if candidate != original {
            return candidate;
        }
    }
}
