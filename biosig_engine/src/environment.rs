//! Extraterrestrial environments and their pressure weights.
//!
//! Static configuration data. Each environment maps to a fixed set of
//! named pressures, each weight in (0, 1].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A named environmental stressor.
///
/// Only the first five kinds carry a mutation rule; the rest are recorded
/// for completeness of the environment description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PressureKind {
    Radiation,
    Cold,
    Pressure,
    Hydrothermal,
    Methane,
    Desiccation,
    Darkness,
    LowOxygen,
}

impl PressureKind {
    pub fn label(self) -> &'static str {
        match self {
            PressureKind::Radiation => "radiation",
            PressureKind::Cold => "cold",
            PressureKind::Pressure => "pressure",
            PressureKind::Hydrothermal => "hydrothermal",
            PressureKind::Methane => "methane",
            PressureKind::Desiccation => "desiccation",
            PressureKind::Darkness => "darkness",
            PressureKind::LowOxygen => "low-oxygen",
        }
    }
}

impl fmt::Display for PressureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    Mars,
    Europa,
    Enceladus,
    Titan,
}

// ── Static pressure tables ─────────────────────────────────────────

const MARS: &[(PressureKind, f64)] = &[
    (PressureKind::Radiation, 0.1),
    (PressureKind::Cold, 0.2),
    (PressureKind::Desiccation, 0.15),
];

const EUROPA: &[(PressureKind, f64)] = &[
    (PressureKind::Pressure, 0.2),
    (PressureKind::Cold, 0.1),
    (PressureKind::Darkness, 0.05),
];

const ENCELADUS: &[(PressureKind, f64)] = &[
    (PressureKind::Hydrothermal, 0.2),
    (PressureKind::Pressure, 0.1),
    (PressureKind::Cold, 0.05),
];

const TITAN: &[(PressureKind, f64)] = &[
    (PressureKind::Methane, 0.25),
    (PressureKind::Cold, 0.15),
    (PressureKind::LowOxygen, 0.1),
];

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Mars,
        Environment::Europa,
        Environment::Enceladus,
        Environment::Titan,
    ];

    /// Exact, case-sensitive name match. `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|env| env.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Environment::Mars => "Mars",
            Environment::Europa => "Europa",
            Environment::Enceladus => "Enceladus",
            Environment::Titan => "Titan",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Environment::Mars => "Cold, dry, high radiation, thin atmosphere.",
            Environment::Europa => {
                "Icy moon, subsurface ocean, high pressure, extreme cold, dark."
            }
            Environment::Enceladus => {
                "Icy moon, subsurface ocean, hydrothermal vents (localized heat), high pressure."
            }
            Environment::Titan => {
                "Thick methane atmosphere/lakes, extreme cold, low oxygen, high hydrocarbons."
            }
        }
    }

    /// Pressure weights in table order.
    pub fn pressures(self) -> &'static [(PressureKind, f64)] {
        match self {
            Environment::Mars => MARS,
            Environment::Europa => EUROPA,
            Environment::Enceladus => ENCELADUS,
            Environment::Titan => TITAN,
        }
    }

    /// Weight of `kind` in this environment, if present.
    pub fn weight(self, kind: PressureKind) -> Option<f64> {
        self.pressures()
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, w)| *w)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Environment {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| EngineError::UnknownEnvironment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for env in Environment::ALL {
            assert_eq!(Environment::from_name(env.name()), Some(env));
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn name_match_is_exact() {
        assert_eq!(Environment::from_name("mars"), None);
        assert_eq!(Environment::from_name(" Mars"), None);
        assert_eq!(Environment::from_name("Earth"), None);
        assert!(matches!(
            "Earth".parse::<Environment>(),
            Err(EngineError::UnknownEnvironment(name)) if name == "Earth"
        ));
    }

    #[test]
    fn weights_are_probabilities() {
        for env in Environment::ALL {
            assert_eq!(env.pressures().len(), 3);
            for (_, w) in env.pressures() {
                assert!(*w > 0.0 && *w <= 1.0);
            }
        }
    }

    #[test]
    fn weight_lookup() {
        assert_eq!(Environment::Mars.weight(PressureKind::Radiation), Some(0.1));
        assert_eq!(Environment::Mars.weight(PressureKind::Methane), None);
        assert_eq!(Environment::Titan.weight(PressureKind::Methane), Some(0.25));
        assert_eq!(Environment::Enceladus.weight(PressureKind::Cold), Some(0.05));
    }
}
