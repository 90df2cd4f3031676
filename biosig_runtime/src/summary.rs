//! Mutation summary — structured comparison of input and result.
//!
//! Identity is fixed-point i64 (SCALE = 10_000): 10_000 means every
//! residue kept.

use std::collections::BTreeMap;

use serde::Serialize;

use biosig_engine::pressures::MutationCause;
use biosig_engine::SimulationResult;

/// Fixed-point scale for ratios.
pub const SCALE: i64 = 10_000;

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationSummary {
    pub length: usize,
    pub changed: usize,
    pub unchanged: usize,
    /// Fraction of positions kept, times SCALE (integer division).
    pub identity: i64,
    /// How many changes each cause contributed to. One change can count
    /// towards several causes.
    pub cause_counts: BTreeMap<MutationCause, usize>,
    /// Residue count in the evolved sequence minus count in the original.
    /// Zero deltas are omitted.
    pub composition_delta: BTreeMap<char, i64>,
}

pub fn summarize(original: &str, result: &SimulationResult) -> MutationSummary {
    let length = original.chars().count();
    let changed = result.change_count();
    let unchanged = length.saturating_sub(changed);
    let identity = if length == 0 {
        SCALE
    } else {
        (unchanged as i64 * SCALE) / length as i64
    };

    let mut cause_counts = BTreeMap::new();
    for change in &result.changes {
        for cause in &change.causes {
            *cause_counts.entry(*cause).or_insert(0) += 1;
        }
    }

    let mut composition_delta: BTreeMap<char, i64> = BTreeMap::new();
    for change in &result.changes {
        *composition_delta.entry(change.original_residue).or_insert(0) -= 1;
        *composition_delta.entry(change.evolved_residue).or_insert(0) += 1;
    }
    composition_delta.retain(|_, delta| *delta != 0);

    MutationSummary {
        length,
        changed,
        unchanged,
        identity,
        cause_counts,
        composition_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosig_engine::ChangeRecord;

    #[test]
    fn summary_of_unchanged_run() {
        let s = summarize("ACDE", &SimulationResult::unchanged("ACDE"));
        assert_eq!(s.changed, 0);
        assert_eq!(s.unchanged, 4);
        assert_eq!(s.identity, SCALE);
        assert!(s.cause_counts.is_empty());
        assert!(s.composition_delta.is_empty());
    }

    #[test]
    fn summary_of_empty_run() {
        let s = summarize("", &SimulationResult::default());
        assert_eq!(s.length, 0);
        assert_eq!(s.identity, SCALE);
    }

    #[test]
    fn counts_causes_and_composition() {
        let result = SimulationResult {
            evolved_sequence: "GCAS".to_string(),
            changes: vec![
                ChangeRecord::new(0, 'A', 'G', vec![MutationCause::ColdFlexibility]),
                ChangeRecord::new(
                    2,
                    'D',
                    'A',
                    vec![MutationCause::RadiationStability, MutationCause::ColdFlexibility],
                ),
                ChangeRecord::new(3, 'E', 'S', vec![MutationCause::Random]),
            ],
        };
        let s = summarize("ACDE", &result);
        assert_eq!(s.changed, 3);
        assert_eq!(s.identity, 2_500);
        assert_eq!(s.cause_counts[&MutationCause::ColdFlexibility], 2);
        assert_eq!(s.cause_counts[&MutationCause::RadiationStability], 1);
        assert_eq!(s.cause_counts[&MutationCause::Random], 1);
        // A lost at 0, gained at 2: net zero, omitted.
        assert!(!s.composition_delta.contains_key(&'A'));
        assert_eq!(s.composition_delta[&'D'], -1);
        assert_eq!(s.composition_delta[&'G'], 1);
        assert_eq!(s.composition_delta[&'S'], 1);
    }
}
