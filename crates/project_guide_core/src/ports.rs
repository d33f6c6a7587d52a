//! crates/project_guide_core/src/ports.rs
//!
//! Defines the service contracts (traits) the core depends on. The only outside
//! influence on the guide's answers is randomness, so that is the only port.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// A source of uniformly distributed indices, injected into the dispatcher.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

//=========================================================================================
// Implementations
//=========================================================================================

/// Draws from the thread-local generator. Used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// A reproducible generator, for demos and tests that need a known sequence.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&self, len: usize) -> usize {
        // A poisoned lock still holds a usable generator.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_repeat_their_sequence() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<_> = (0..8).map(|_| a.pick_index(4)).collect();
        let second: Vec<_> = (0..8).map(|_| b.pick_index(4)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn indices_stay_in_range() {
        let source = ThreadRandom;
        for _ in 0..100 {
            assert!(source.pick_index(4) < 4);
        }
    }
}
