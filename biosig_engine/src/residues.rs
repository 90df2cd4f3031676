//! Residue property table.
//!
//! Static lookup: residue symbol → {type, size, stability, flexibility}.
//! 20 standard amino acids plus the unknown symbol `X`. Table order is the
//! canonical residue order used for uniform random picks.

use serde::{Deserialize, Serialize};

/// Symbol used for an unidentified residue.
pub const UNKNOWN_RESIDUE: char = 'X';

// ── Property categories ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResidueType {
    Nonpolar,
    Polar,
    Basic,
    Acidic,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResidueSize {
    VerySmall,
    Small,
    Medium,
    Large,
    VeryLarge,
    Unknown,
}

/// Stability label. Only `High` counts as "high" for the hydrothermal
/// guard; `HighDisulfide` and `HighTurns` are distinct labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stability {
    Moderate,
    High,
    HighDisulfide,
    HighTurns,
    LowInAlphaHelix,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flexibility {
    High,
    Low,
}

/// Fixed property record for one residue symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueProperties {
    #[serde(rename = "type")]
    pub residue_type: ResidueType,
    pub size: ResidueSize,
    pub stability: Stability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flexibility: Option<Flexibility>,
}

const fn props(
    residue_type: ResidueType,
    size: ResidueSize,
    stability: Stability,
    flexibility: Option<Flexibility>,
) -> ResidueProperties {
    ResidueProperties {
        residue_type,
        size,
        stability,
        flexibility,
    }
}

use Flexibility as Fx;
use ResidueSize as Sz;
use ResidueType as Ty;
use Stability as St;

/// The property table, in canonical residue order.
pub static PROPERTY_TABLE: [(char, ResidueProperties); 21] = [
    ('A', props(Ty::Nonpolar, Sz::Small, St::Moderate, None)),
    ('R', props(Ty::Basic, Sz::Large, St::Moderate, None)),
    ('N', props(Ty::Polar, Sz::Medium, St::Moderate, None)),
    ('D', props(Ty::Acidic, Sz::Medium, St::Moderate, None)),
    ('C', props(Ty::Polar, Sz::Small, St::HighDisulfide, None)),
    ('E', props(Ty::Acidic, Sz::Large, St::Moderate, None)),
    ('Q', props(Ty::Polar, Sz::Large, St::Moderate, None)),
    ('G', props(Ty::Nonpolar, Sz::VerySmall, St::LowInAlphaHelix, Some(Fx::High))),
    ('H', props(Ty::Basic, Sz::Medium, St::Moderate, None)),
    ('I', props(Ty::Nonpolar, Sz::Large, St::High, None)),
    ('L', props(Ty::Nonpolar, Sz::Large, St::High, None)),
    ('K', props(Ty::Basic, Sz::Large, St::Moderate, None)),
    ('M', props(Ty::Nonpolar, Sz::Medium, St::Moderate, None)),
    ('F', props(Ty::Nonpolar, Sz::Large, St::High, None)),
    ('P', props(Ty::Nonpolar, Sz::Medium, St::HighTurns, Some(Fx::Low))),
    ('S', props(Ty::Polar, Sz::Small, St::Moderate, None)),
    ('T', props(Ty::Polar, Sz::Medium, St::Moderate, None)),
    ('W', props(Ty::Nonpolar, Sz::VeryLarge, St::Moderate, None)),
    ('Y', props(Ty::Polar, Sz::Large, St::Moderate, None)),
    ('V', props(Ty::Nonpolar, Sz::Medium, St::High, None)),
    ('X', props(Ty::Unknown, Sz::Unknown, St::Unknown, None)),
];

/// The 20 standard residues (everything but `X`), in canonical order.
pub static STANDARD_RESIDUES: [char; 20] = [
    'A', 'R', 'N', 'D', 'C', 'E', 'Q', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T',
    'W', 'Y', 'V',
];

/// Look up the property record for `symbol`. `None` for symbols outside the table.
pub fn properties(symbol: char) -> Option<&'static ResidueProperties> {
    PROPERTY_TABLE
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, p)| p)
}

pub fn standard_residues() -> &'static [char] {
    &STANDARD_RESIDUES
}

pub fn is_known(symbol: char) -> bool {
    properties(symbol).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_21_unique_symbols() {
        let mut symbols: Vec<char> = PROPERTY_TABLE.iter().map(|(s, _)| *s).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 21);
    }

    #[test]
    fn standard_residues_follow_table_order_without_unknown() {
        let from_table: Vec<char> = PROPERTY_TABLE
            .iter()
            .map(|(s, _)| *s)
            .filter(|s| *s != UNKNOWN_RESIDUE)
            .collect();
        assert_eq!(from_table, standard_residues());
    }

    #[test]
    fn lookup_known_and_absent() {
        let g = properties('G').unwrap();
        assert_eq!(g.flexibility, Some(Flexibility::High));
        assert_eq!(g.stability, Stability::LowInAlphaHelix);

        assert_eq!(properties('V').unwrap().stability, Stability::High);
        assert_eq!(properties('C').unwrap().stability, Stability::HighDisulfide);
        assert_eq!(properties('X').unwrap().residue_type, ResidueType::Unknown);

        assert!(properties('Z').is_none());
        assert!(properties('a').is_none());
        assert!(!is_known('B'));
    }

    #[test]
    fn serializes_with_original_labels() {
        let json = serde_json::to_string(properties('P').unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"type":"nonpolar","size":"medium","stability":"high-turns","flexibility":"low"}"#
        );
    }
}
