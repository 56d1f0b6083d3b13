//! Interleaving of parallel element-streams
//!
//! A [`Compositor`] owns an ordered list of M sub-iterators, each
//! yielding single elements, and merges them into one linear stream. The
//! merge order is a pluggable [`CompositionStrategy`]: at every step the
//! strategy's `choose` hook names the sub-iterator eligible to supply
//! the next output element, or none once all are spent.

mod catenation;
mod nesting;
mod random;

pub use catenation::Catenation;
pub use nesting::{Nesting, NestingPolicy};
pub use random::RandomSelection;

use std::fmt;

use crate::iterator::{BoxedEnumerator, Enumerator};
use crate::EngineError;

/// Selection rule plugged into a [`Compositor`].
pub trait CompositionStrategy<T> {
    /// Validate the strategy against the number of sub-iterators before
    /// enumeration begins.
    fn check(&self, _count: usize) -> Result<(), EngineError> {
        Ok(())
    }

    /// Reset strategy state for `count` sub-iterators.
    fn on_init(&mut self, count: usize);

    /// Account for one element having been consumed from the currently
    /// chosen sub-iterator.
    fn on_next(&mut self);

    /// Index of the sub-iterator eligible to supply the next element,
    /// or `None` when all sub-iterators are exhausted. Exhausted
    /// sub-iterators are dropped from future consideration here.
    fn choose(&mut self, streams: &mut [BoxedEnumerator<T>]) -> Option<usize>;
}

/// Merges several parallel element-streams into one linear sequence.
pub struct Compositor<T, S> {
    streams: Vec<BoxedEnumerator<T>>,
    strategy: S,
    current: Option<usize>,
}

impl<T, S: CompositionStrategy<T>> Compositor<T, S> {
    /// Create a compositor over the given element-streams.
    ///
    /// Fails with [`EngineError::Misconfiguration`] when the strategy
    /// rejects the stream count (e.g. a per-level nesting policy whose
    /// arity disagrees with it).
    pub fn new(streams: Vec<BoxedEnumerator<T>>, strategy: S) -> Result<Self, EngineError> {
        strategy.check(streams.len())?;
        Ok(Self {
            streams,
            strategy,
            current: None,
        })
    }

    /// Number of sub-iterators owned by this compositor.
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }
}

impl<T, S: CompositionStrategy<T>> Enumerator for Compositor<T, S> {
    type Item = T;

    fn init(&mut self) {
        for stream in &mut self.streams {
            stream.init();
        }
        self.strategy.on_init(self.streams.len());
        self.current = self.strategy.choose(&mut self.streams);
    }

    fn has_value(&self) -> bool {
        self.current.is_some()
    }

    fn value(&self) -> Result<T, EngineError> {
        match self.current {
            Some(index) => self.streams[index].value(),
            None => Err(EngineError::EmptySequence),
        }
    }

    fn next(&mut self) {
        let Some(index) = self.current else {
            return;
        };
        self.streams[index].next();
        self.strategy.on_next();
        self.current = self.strategy.choose(&mut self.streams);
    }

    fn stop(&mut self) {
        self.current = None;
    }
}

impl<T, S: fmt::Debug> fmt::Debug for Compositor<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compositor")
            .field("streams", &self.streams.len())
            .field("strategy", &self.strategy)
            .field("current", &self.current)
            .finish()
    }
}
