//! Lock-step combination of independent sequence-sources
//!
//! A [`Combinator`] owns an ordered list of N sub-iterators, each
//! yielding whole sequences, and advances them according to a pluggable
//! [`CombinationStrategy`]. Its current value is the N-tuple of the
//! sub-iterators' current sequences; it has a value iff it owns at least
//! one sub-iterator and every sub-iterator currently has a value.

mod diagonal;
mod product;

pub use diagonal::Diagonal;
pub use product::Product;

use tracing::debug;

use crate::iterator::{Enumerator, SequenceSource};
use crate::EngineError;

/// Advancement rule plugged into a [`Combinator`].
///
/// `on_init` resets strategy state before enumeration (re)starts;
/// `advance` steps the sub-iterators and returns `false` exactly when
/// the combination is exhausted.
pub trait CombinationStrategy<T> {
    /// Reset strategy state for `count` sub-iterators.
    fn on_init(&mut self, count: usize);

    /// Advance the sub-iterators to the next combination.
    ///
    /// Returns `false` iff the combinator has been exhausted.
    fn advance(&mut self, sources: &mut [SequenceSource<T>]) -> bool;
}

/// Produces structured combinations of several sequence-sources.
///
/// Exclusively owns its sub-iterators; a sub-iterator must never be
/// shared between two composites.
pub struct Combinator<T, S> {
    sources: Vec<SequenceSource<T>>,
    strategy: S,
    exhausted: bool,
}

impl<T, S: CombinationStrategy<T>> Combinator<T, S> {
    /// Create a combinator over the given sequence-sources.
    ///
    /// An empty source list is permitted; the resulting combinator never
    /// has a value.
    pub fn new(sources: Vec<SequenceSource<T>>, strategy: S) -> Self {
        Self {
            sources,
            strategy,
            exhausted: true,
        }
    }

    /// Number of sub-iterators owned by this combinator.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl<T: Clone, S: CombinationStrategy<T>> Enumerator for Combinator<T, S> {
    type Item = Vec<Vec<T>>;

    fn init(&mut self) {
        for source in &mut self.sources {
            source.init();
        }
        self.strategy.on_init(self.sources.len());
        self.exhausted = false;
    }

    fn has_value(&self) -> bool {
        if self.exhausted || self.sources.is_empty() {
            return false;
        }
        self.sources.iter().all(|source| source.has_value())
    }

    fn value(&self) -> Result<Vec<Vec<T>>, EngineError> {
        if !self.has_value() {
            return Err(EngineError::EmptySequence);
        }
        self.sources.iter().map(|source| source.value()).collect()
    }

    fn next(&mut self) {
        if self.exhausted {
            return;
        }
        if !self.strategy.advance(&mut self.sources) {
            debug!(sources = self.sources.len(), "combinator exhausted");
            self.exhausted = true;
        }
    }

    fn stop(&mut self) {
        self.exhausted = true;
    }
}

impl<T, S: std::fmt::Debug> std::fmt::Debug for Combinator<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Combinator")
            .field("sources", &self.sources.len())
            .field("strategy", &self.strategy)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}
