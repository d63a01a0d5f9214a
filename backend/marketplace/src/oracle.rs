//! The availability seam.
//!
//! `AvailabilityOracle` answers one question per marketplace: how strong is
//! the signal that a search there would find something. The shipped
//! implementation draws random numbers; a real implementation would consult
//! an actual search-count API without changing any caller.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::CandidateSpec;

/// Maps a marketplace to a non-negative availability signal.
/// `0` means "treat as unavailable"; anything above zero means available.
pub trait AvailabilityOracle: Send + Sync {
    fn signal(&self, spec: &CandidateSpec) -> u32;
}

/// Synthetic oracle: uniform draw in `0..=signal_bound` per marketplace.
///
/// Not persisted and not shared across requests in any stateful way, so two
/// searches for the same product may yield different candidate subsets.
pub struct SyntheticAvailability {
    rng: Mutex<StdRng>,
}

impl SyntheticAvailability {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic oracle for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for SyntheticAvailability {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityOracle for SyntheticAvailability {
    fn signal(&self, spec: &CandidateSpec) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(0..=spec.signal_bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn seeded_oracle_is_reproducible() {
        let a = SyntheticAvailability::with_seed(7);
        let b = SyntheticAvailability::with_seed(7);
        for spec in &CATALOG {
            assert_eq!(a.signal(spec), b.signal(spec));
        }
    }

    #[test]
    fn signal_respects_the_per_marketplace_bound() {
        let oracle = SyntheticAvailability::with_seed(42);
        for _ in 0..500 {
            for spec in &CATALOG {
                assert!(oracle.signal(spec) <= spec.signal_bound, "{}", spec.id);
            }
        }
    }
}
