use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::EngineError;

use super::Enumerator;

/// Randomized enumerator over a fixed candidate pool.
///
/// Used for non-exhaustive sub-strategies such as memory-access
/// dependency selection: once initialized it has a value for as long as
/// the pool is non-empty, every `value()` call draws one candidate
/// uniformly at random, and `next()` is a no-op. `stop()` and
/// `has_value()` behave exactly as the protocol requires.
///
/// With an explicit seed the iterator is reproducible: re-running
/// `init()` resets the random stream to the same starting point.
#[derive(Debug)]
pub struct RandomCandidateIterator<T> {
    candidates: Vec<T>,
    seed: Option<u64>,
    rng: RefCell<StdRng>,
    has_value: bool,
}

impl<T: Clone> RandomCandidateIterator<T> {
    /// Create an iterator over the given candidate pool, seeded from
    /// system entropy.
    pub fn new(candidates: Vec<T>) -> Self {
        Self {
            candidates,
            seed: None,
            rng: RefCell::new(StdRng::from_entropy()),
            has_value: false,
        }
    }

    /// Create a reproducible iterator with an explicit seed.
    pub fn with_seed(candidates: Vec<T>, seed: u64) -> Self {
        Self {
            candidates,
            seed: Some(seed),
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
            has_value: false,
        }
    }

    /// Number of candidates in the pool.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

impl<T: Clone> Enumerator for RandomCandidateIterator<T> {
    type Item = T;

    fn init(&mut self) {
        // Reset the random stream so a restarted enumeration replays the
        // same draws when a seed was given.
        *self.rng.borrow_mut() = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.has_value = !self.candidates.is_empty();
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&self) -> Result<T, EngineError> {
        if !self.has_value {
            return Err(EngineError::EmptySequence);
        }
        let index = self.rng.borrow_mut().gen_range(0..self.candidates.len());
        Ok(self.candidates[index].clone())
    }

    fn next(&mut self) {
        // Intentionally a no-op: the pool never exhausts by iteration.
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_never_has_value() {
        let mut it: RandomCandidateIterator<u32> = RandomCandidateIterator::new(vec![]);
        it.init();
        assert!(!it.has_value());
        assert_eq!(it.value(), Err(EngineError::EmptySequence));
    }

    #[test]
    fn test_value_survives_next() {
        let mut it = RandomCandidateIterator::with_seed(vec![1, 2, 3], 7);
        it.init();
        for _ in 0..10 {
            assert!(it.has_value());
            let v = it.value().unwrap();
            assert!((1..=3).contains(&v));
            it.next();
        }
    }

    #[test]
    fn test_stop_beats_randomness() {
        let mut it = RandomCandidateIterator::with_seed(vec![5], 0);
        it.init();
        it.stop();
        assert!(!it.has_value());
        assert_eq!(it.value(), Err(EngineError::EmptySequence));
    }

    #[test]
    fn test_seeded_restart_replays_draws() {
        let mut it = RandomCandidateIterator::with_seed(vec![0u8, 1, 2, 3, 4, 5, 6, 7], 42);

        it.init();
        let first: Vec<u8> = (0..16).map(|_| it.value().unwrap()).collect();

        it.init();
        let second: Vec<u8> = (0..16).map(|_| it.value().unwrap()).collect();

        assert_eq!(first, second);
    }
}
