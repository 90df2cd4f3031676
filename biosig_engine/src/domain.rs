//! Core result types.
//!
//! Pure data. No behaviour beyond construction helpers.
//! Serialized with camelCase names for downstream consumers.

use serde::{Deserialize, Serialize};

use crate::pressures::MutationCause;

/// Separator used when joining cause labels into `reason`.
pub const REASON_SEPARATOR: &str = ", ";

/// One residue substitution and what caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangeRecord {
    pub position: usize,
    pub original_residue: char,
    pub evolved_residue: char,
    /// Cause labels in trigger order, joined by `REASON_SEPARATOR`.
    pub reason: String,
    pub causes: Vec<MutationCause>,
}

impl ChangeRecord {
    pub fn new(
        position: usize,
        original_residue: char,
        evolved_residue: char,
        causes: Vec<MutationCause>,
    ) -> Self {
        let reason = join_reason(&causes);
        Self {
            position,
            original_residue,
            evolved_residue,
            reason,
            causes,
        }
    }
}

/// Cause labels in order, joined by `REASON_SEPARATOR`.
pub fn join_reason(causes: &[MutationCause]) -> String {
    causes
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(REASON_SEPARATOR)
}

/// Outcome of one simulation run. Created fresh per call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimulationResult {
    pub evolved_sequence: String,
    pub changes: Vec<ChangeRecord>,
}

impl SimulationResult {
    /// Result that leaves `sequence` untouched.
    pub fn unchanged(sequence: &str) -> Self {
        Self {
            evolved_sequence: sequence.to_string(),
            changes: Vec::new(),
        }
    }

    pub fn change_count(&self) -> usize {
        self.changes.len()
    }
}
