//! Seeded determinism tests — a fixed seed must reproduce a run exactly,
//! and the canonical hash must be stable across replays.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use biosig_engine::engine::simulate_evolution_with;
use biosig_engine::hashing::canonical_hash;
use biosig_engine::invariants::validate_result;
use biosig_engine::{Environment, SimulationResult, ENGINE_VERSION};

const SEQUENCE: &str = "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQAPILSRVGDGTQDNLSGAEKAVQVKVKALPDAQ";

fn seeded_result(seed: u64, environment: &str, years: f64) -> SimulationResult {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let result = simulate_evolution_with(SEQUENCE, environment, years, &mut rng);
    validate_result(SEQUENCE, &result);
    result
}

fn seeded_run(seed: u64, environment: &str, years: f64) -> String {
    let result = seeded_result(seed, environment, years);
    canonical_hash(environment, years, seed, SEQUENCE, &result)
}

#[test]
fn seeded_replay_is_deterministic() {
    for env in Environment::ALL {
        let h1 = seeded_run(42, env.name(), 20_000_000.0);
        let h2 = seeded_run(42, env.name(), 20_000_000.0);
        assert_eq!(
            h1, h2,
            "DETERMINISM FAILURE: two runs with seed 42 on {} produced different hashes.\n\
             Run 1: {}\n\
             Run 2: {}",
            env, h1, h2
        );
    }
}

#[test]
fn different_seeds_diverge() {
    // With every position selected, two seeds agreeing everywhere is
    // vanishingly unlikely.
    let a = seeded_result(1, "Titan", 5_000_000.0);
    let b = seeded_result(2, "Titan", 5_000_000.0);
    assert_ne!(a.evolved_sequence, b.evolved_sequence);
}

#[test]
fn full_selection_changes_every_position() {
    for env in Environment::ALL {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let result = simulate_evolution_with(SEQUENCE, env.name(), 1_000_000.0, &mut rng);
        assert_eq!(result.changes.len(), SEQUENCE.len(), "environment {}", env);
        for (p, change) in result.changes.iter().enumerate() {
            assert_eq!(change.position, p);
            assert_ne!(change.original_residue, change.evolved_residue);
        }
    }
}

#[test]
fn partial_rate_selects_roughly_proportionally() {
    // rate 0.25 over 66 residues x 200 runs: expect ~3300 selections.
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut total = 0usize;
    for _ in 0..200 {
        let result = simulate_evolution_with(SEQUENCE, "Europa", 250_000.0, &mut rng);
        validate_result(SEQUENCE, &result);
        total += result.changes.len();
    }
    let expected = SEQUENCE.len() as f64 * 200.0 * 0.25;
    let ratio = total as f64 / expected;
    assert!((0.9..1.1).contains(&ratio), "selection ratio {}", ratio);
}

#[test]
fn mars_only_produces_mars_reasons() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let result = simulate_evolution_with(SEQUENCE, "Mars", 10_000_000.0, &mut rng);
    let allowed = [
        "Radiation-induced stability",
        "Cold adaptation for flexibility",
        "Random mutation",
    ];
    for change in &result.changes {
        for label in change.reason.split(", ") {
            assert!(allowed.contains(&label), "unexpected reason {:?}", label);
        }
    }
}

#[test]
fn engine_version_is_one() {
    assert_eq!(ENGINE_VERSION, 1);
}
