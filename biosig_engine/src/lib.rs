#![forbid(unsafe_code)]

//! Biosignature evolution engine.
//!
//! Applies an environment-keyed, per-residue mutation model to a protein
//! sequence. Pure computation over static tables; randomness is injected
//! through `randomness::RandomSource`.

/// Engine rule-set version. Bound into every canonical run hash.
pub const ENGINE_VERSION: u32 = 1;

pub mod error;
pub mod residues;
pub mod environment;
pub mod pressures;
pub mod randomness;
pub mod domain;
pub mod evolution;
pub mod invariants;
pub mod hashing;
pub mod engine;

pub use domain::{ChangeRecord, SimulationResult};
pub use engine::{simulate_evolution, simulate_evolution_with, MutationEngine};
pub use environment::{Environment, PressureKind};
pub use error::EngineError;
pub use randomness::RandomSource;
