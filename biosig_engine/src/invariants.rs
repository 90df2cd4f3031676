//! Result invariant checks.
//!
//! `check_result` returns the first violation; `validate_result` panics
//! on it. Checks, in order:
//!   - evolved length equals original length
//!   - change positions strictly increasing
//!   - every change matches the residues at its position
//!   - every change's reason is its causes' labels, joined
//!   - a change exists for every differing position

use crate::domain::{join_reason, SimulationResult};
use crate::error::EngineError;

/// Panicking variant of `check_result`.
pub fn validate_result(original: &str, result: &SimulationResult) {
    if let Err(e) = check_result(original, result) {
        panic!("{}", e);
    }
}

pub fn check_result(original: &str, result: &SimulationResult) -> Result<(), EngineError> {
    let before: Vec<char> = original.chars().collect();
    let after: Vec<char> = result.evolved_sequence.chars().collect();

    check_length(&before, &after)?;
    check_ordering(result)?;
    check_change_records(&before, &after, result)?;
    check_coverage(&before, &after, result)?;
    Ok(())
}

fn violation(check: &'static str, detail: String) -> EngineError {
    EngineError::InvariantViolation { check, detail }
}

fn check_length(before: &[char], after: &[char]) -> Result<(), EngineError> {
    if before.len() != after.len() {
        return Err(violation(
            "length_preserved",
            format!("original has {} residues, evolved has {}", before.len(), after.len()),
        ));
    }
    Ok(())
}

fn check_ordering(result: &SimulationResult) -> Result<(), EngineError> {
    for pair in result.changes.windows(2) {
        if pair[1].position <= pair[0].position {
            return Err(violation(
                "positions_ascending",
                format!(
                    "change at {} follows change at {}",
                    pair[1].position, pair[0].position
                ),
            ));
        }
    }
    Ok(())
}

fn check_change_records(
    before: &[char],
    after: &[char],
    result: &SimulationResult,
) -> Result<(), EngineError> {
    for change in &result.changes {
        let p = change.position;
        if p >= before.len() {
            return Err(violation(
                "position_in_range",
                format!("change at {} past end of {}-residue sequence", p, before.len()),
            ));
        }
        if before[p] != change.original_residue || after[p] != change.evolved_residue {
            return Err(violation(
                "record_matches_sequences",
                format!(
                    "change at {} records {}->{} but sequences hold {}->{}",
                    p, change.original_residue, change.evolved_residue, before[p], after[p]
                ),
            ));
        }
        if change.original_residue == change.evolved_residue {
            return Err(violation(
                "record_is_substitution",
                format!("change at {} does not alter the residue", p),
            ));
        }
        if change.causes.is_empty() || change.reason != join_reason(&change.causes) {
            return Err(violation(
                "reason_matches_causes",
                format!(
                    "change at {} has reason {:?} but causes {:?}",
                    p, change.reason, change.causes
                ),
            ));
        }
    }
    Ok(())
}

fn check_coverage(
    before: &[char],
    after: &[char],
    result: &SimulationResult,
) -> Result<(), EngineError> {
    let differing = before.iter().zip(after).filter(|(a, b)| a != b).count();
    if differing != result.changes.len() {
        return Err(violation(
            "change_iff_differs",
            format!(
                "{} positions differ but {} changes recorded",
                differing,
                result.changes.len()
            ),
        ));
    }
    Ok(())
}
