//! Sources of synthetic efficacy scores.
//!
//! The investigator never calls an RNG directly; it asks an `EfficacySource`
//! for a value inside a template range, so tests can pin exact scores.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Produces an efficacy value in `[low, high]`.
pub trait EfficacySource: Send + Sync {
    fn draw(&self, low: f64, high: f64) -> f64;
}

/// Uniform draws from a `StdRng`, optionally seeded for reproducible runs.
pub struct SeededEfficacy {
    rng: Mutex<StdRng>,
}

impl SeededEfficacy {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    pub fn from_entropy() -> Self {
        Self { rng: Mutex::new(StdRng::from_entropy()) }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }
}

impl EfficacySource for SeededEfficacy {
    fn draw(&self, low: f64, high: f64) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(low..=high)
    }
}

// ── Fixed Implementation for Testing ───────────────────────────────────────

/// Replays a fixed list of values in order, cycling when exhausted.
/// Ignores the requested range.
pub struct FixedEfficacy {
    values: Vec<f64>,
    next: AtomicUsize,
}

impl FixedEfficacy {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "FixedEfficacy needs at least one value");
        Self { values, next: AtomicUsize::new(0) }
    }
}

impl EfficacySource for FixedEfficacy {
    fn draw(&self, _low: f64, _high: f64) -> f64 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.values[i % self.values.len()]
    }
}
