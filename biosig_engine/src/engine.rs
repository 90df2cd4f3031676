//! Engine entry points.
//!
//! Resolves the environment by name and delegates to `evolution`.
//! Empty input and unknown environments are no-ops, never errors.

use rand::rngs::ThreadRng;
use tracing::debug;

use crate::domain::SimulationResult;
use crate::environment::Environment;
use crate::evolution;
use crate::randomness::RandomSource;

/// Simulate with the thread-local generator. Not reproducible.
pub fn simulate_evolution(sequence: &str, environment: &str, years: f64) -> SimulationResult {
    simulate_evolution_with(sequence, environment, years, &mut rand::thread_rng())
}

/// Simulate with a caller-supplied randomness source.
///
///   1. Empty sequence → empty result, environment and years ignored
///   2. Unknown environment → sequence unchanged, no changes
///   3. Otherwise run the per-position mutation process
pub fn simulate_evolution_with<S: RandomSource + ?Sized>(
    sequence: &str,
    environment: &str,
    years: f64,
    source: &mut S,
) -> SimulationResult {
    if sequence.is_empty() {
        return SimulationResult::default();
    }

    let Some(env) = Environment::from_name(environment) else {
        debug!(environment, "unknown environment, returning sequence unchanged");
        return SimulationResult::unchanged(sequence);
    };

    evolve(sequence, env, years, source)
}

/// Typed-environment form of `simulate_evolution_with`.
pub fn evolve<S: RandomSource + ?Sized>(
    sequence: &str,
    environment: Environment,
    years: f64,
    source: &mut S,
) -> SimulationResult {
    let result = evolution::evolve(sequence, environment, years, source);
    debug!(
        environment = %environment,
        years,
        length = sequence.chars().count(),
        changes = result.change_count(),
        "simulation complete"
    );
    result
}

/// Engine owning its randomness source.
///
/// Holds no simulation state between calls; each call returns a fresh
/// result.
pub struct MutationEngine<S> {
    source: S,
}

impl MutationEngine<ThreadRng> {
    pub fn unseeded() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<S: RandomSource> MutationEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn simulate(&mut self, sequence: &str, environment: &str, years: f64) -> SimulationResult {
        simulate_evolution_with(sequence, environment, years, &mut self.source)
    }

    pub fn evolve(
        &mut self,
        sequence: &str,
        environment: Environment,
        years: f64,
    ) -> SimulationResult {
        evolve(sequence, environment, years, &mut self.source)
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
