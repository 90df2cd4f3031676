//! Pressure rules — what each environmental pressure does to a residue.
//!
//! Rules are evaluated in the fixed order of `RULES`. A later rule that
//! fires overwrites an earlier rule's pick for the same position; every
//! fired rule still contributes its cause.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::environment::PressureKind;
use crate::residues::{ResidueProperties, ResidueType, Stability};

/// Per-draw gate multiplier: a pressure fires when `u < weight * GATE_FACTOR`.
pub const GATE_FACTOR: f64 = 0.5;

pub const RADIATION_STABLE: &[char] = &['I', 'L', 'V', 'C', 'P'];
pub const FLEXIBLE: &[char] = &['G', 'A', 'S'];
pub const COMPACT: &[char] = &['A', 'G', 'S', 'C'];
pub const HEAT_STABLE: &[char] = &['I', 'L', 'V', 'F', 'Y', 'W', 'R', 'K'];
pub const METHANE_COMPATIBLE: &[char] = &['V', 'L', 'I', 'F', 'M'];

/// Why a residue changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationCause {
    RadiationStability,
    ColdFlexibility,
    PressureCompactness,
    HydrothermalStability,
    MethaneHydrophobicity,
    Random,
}

impl MutationCause {
    pub fn label(self) -> &'static str {
        match self {
            MutationCause::RadiationStability => "Radiation-induced stability",
            MutationCause::ColdFlexibility => "Cold adaptation for flexibility",
            MutationCause::PressureCompactness => "Pressure adaptation for compactness",
            MutationCause::HydrothermalStability => {
                "Hydrothermal vent adaptation for thermal stability"
            }
            MutationCause::MethaneHydrophobicity => {
                "Methane environment adaptation (hydrophobicity)"
            }
            MutationCause::Random => "Random mutation",
        }
    }

    /// Stable machine key; matches the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            MutationCause::RadiationStability => "radiation-stability",
            MutationCause::ColdFlexibility => "cold-flexibility",
            MutationCause::PressureCompactness => "pressure-compactness",
            MutationCause::HydrothermalStability => "hydrothermal-stability",
            MutationCause::MethaneHydrophobicity => "methane-hydrophobicity",
            MutationCause::Random => "random",
        }
    }
}

impl fmt::Display for MutationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Condition on the original residue's properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// Applies unless the original's stability equals the given label.
    UnlessStability(Stability),
    /// Applies unless the original's type equals the given category.
    UnlessType(ResidueType),
}

impl Guard {
    /// An absent property record never satisfies a property-conditional guard.
    ///
    /// A symbol outside the table is "condition not met", not "not high" or
    /// "not nonpolar": hydrothermal and methane never fire for it.
    pub fn admits(self, original: Option<&ResidueProperties>) -> bool {
        match self {
            Guard::Always => true,
            Guard::UnlessStability(label) => original.is_some_and(|p| p.stability != label),
            Guard::UnlessType(category) => {
                original.is_some_and(|p| p.residue_type != category)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PressureRule {
    pub kind: PressureKind,
    pub guard: Guard,
    pub candidates: &'static [char],
    pub cause: MutationCause,
}

/// Rule-bearing pressures in evaluation order.
pub const RULES: [PressureRule; 5] = [
    PressureRule {
        kind: PressureKind::Radiation,
        guard: Guard::Always,
        candidates: RADIATION_STABLE,
        cause: MutationCause::RadiationStability,
    },
    PressureRule {
        kind: PressureKind::Cold,
        guard: Guard::Always,
        candidates: FLEXIBLE,
        cause: MutationCause::ColdFlexibility,
    },
    PressureRule {
        kind: PressureKind::Pressure,
        guard: Guard::Always,
        candidates: COMPACT,
        cause: MutationCause::PressureCompactness,
    },
    PressureRule {
        kind: PressureKind::Hydrothermal,
        guard: Guard::UnlessStability(Stability::High),
        candidates: HEAT_STABLE,
        cause: MutationCause::HydrothermalStability,
    },
    PressureRule {
        kind: PressureKind::Methane,
        guard: Guard::UnlessType(ResidueType::Nonpolar),
        candidates: METHANE_COMPATIBLE,
        cause: MutationCause::MethaneHydrophobicity,
    },
];

pub fn rule_for(kind: PressureKind) -> Option<&'static PressureRule> {
    RULES.iter().find(|r| r.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::residues::properties;

    #[test]
    fn evaluation_order_is_fixed() {
        let kinds: Vec<PressureKind> = RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PressureKind::Radiation,
                PressureKind::Cold,
                PressureKind::Pressure,
                PressureKind::Hydrothermal,
                PressureKind::Methane,
            ]
        );
    }

    #[test]
    fn descriptive_pressures_have_no_rule() {
        assert!(rule_for(PressureKind::Desiccation).is_none());
        assert!(rule_for(PressureKind::Darkness).is_none());
        assert!(rule_for(PressureKind::LowOxygen).is_none());
    }

    #[test]
    fn hydrothermal_guard_only_skips_plain_high() {
        let guard = rule_for(PressureKind::Hydrothermal).unwrap().guard;
        assert!(!guard.admits(properties('I')));
        assert!(!guard.admits(properties('V')));
        // high-disulfide and high-turns are not "high".
        assert!(guard.admits(properties('C')));
        assert!(guard.admits(properties('P')));
        assert!(guard.admits(properties('X')));
        assert!(!guard.admits(None));
    }

    #[test]
    fn methane_guard_skips_nonpolar() {
        let guard = rule_for(PressureKind::Methane).unwrap().guard;
        assert!(!guard.admits(properties('A')));
        assert!(guard.admits(properties('D')));
        assert!(guard.admits(properties('X')));
        assert!(!guard.admits(None));
    }

    #[test]
    fn cold_and_pressure_ignore_properties() {
        for kind in [PressureKind::Cold, PressureKind::Pressure] {
            let guard = rule_for(kind).unwrap().guard;
            assert!(guard.admits(properties('P')));
            assert!(guard.admits(properties('W')));
            assert!(guard.admits(None));
        }
    }

    #[test]
    fn cause_key_matches_serde() {
        for cause in [
            MutationCause::RadiationStability,
            MutationCause::ColdFlexibility,
            MutationCause::PressureCompactness,
            MutationCause::HydrothermalStability,
            MutationCause::MethaneHydrophobicity,
            MutationCause::Random,
        ] {
            let json = serde_json::to_value(cause).unwrap();
            assert_eq!(json, serde_json::Value::String(cause.key().to_string()));
        }
    }
}
