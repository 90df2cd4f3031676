//! Randomness seam for the mutation engine.
//!
//! Every `rand::RngCore` is a `RandomSource`, so callers can pass
//! `thread_rng()` for unseeded runs or a seeded `ChaCha8Rng` for
//! reproducible ones. Tests may implement the trait directly to script
//! each draw.

use rand::{Rng, RngCore};

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index into a collection of `len` items: `floor(u * len)`.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on empty collection");
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len - 1)
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Uniform pick from a non-empty slice.
pub fn pick<S: RandomSource + ?Sized, T: Copy>(source: &mut S, items: &[T]) -> T {
    items[source.pick_index(items.len())]
}
