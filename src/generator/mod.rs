//! Consumer-facing sequence drivers
//!
//! Generators expose finished sequences to a consumer, one per
//! combinatorial step, through the usual pull loop
//! `init(); while has_value() { consume(value()?); next(); }`.
//!
//! Two variants exist: [`GeneratorSequence`] eagerly concatenates every
//! sequence of every source into one sequence yielded exactly once, and
//! [`GeneratorCompositor`] pipes a combinator's tuples through a
//! compositor, yielding one merged sequence per tuple.

use std::fmt;

use tracing::trace;

use crate::combinator::{CombinationStrategy, Combinator};
use crate::compositor::{CompositionStrategy, Compositor};
use crate::iterator::{BoxedEnumerator, CollectionIterator, Enumerator, SequenceSource};
use crate::EngineError;

/// Eagerly drain one sequence-source into a single flat sequence.
///
/// Fails only if the source violates the protocol by erroring on a
/// `value()` call made while it reported a value.
pub fn expand<T, I>(source: &mut I) -> Result<Vec<T>, EngineError>
where
    I: Enumerator<Item = Vec<T>> + ?Sized,
{
    let mut result = Vec::new();

    source.init();
    while source.has_value() {
        result.extend(source.value()?);
        source.next();
    }

    Ok(result)
}

/// Eagerly drain several sequence-sources, in order, into one flat
/// sequence.
pub fn expand_all<T>(sources: &mut [SequenceSource<T>]) -> Result<Vec<T>, EngineError> {
    let mut result = Vec::new();

    for source in sources {
        result.extend(expand(source)?);
    }

    Ok(result)
}

/// Plain-concatenation generator.
///
/// Construction eagerly flattens every source to completion, in order,
/// into one concatenated sequence; the generator then yields that
/// sequence exactly once per `init()`. Constructed with no sources at
/// all it never has a value.
#[derive(Debug, Clone)]
pub struct GeneratorSequence<T> {
    sequence: Option<Vec<T>>,
    has_value: bool,
}

impl<T: Clone> GeneratorSequence<T> {
    /// Build the generator by draining the given sources.
    pub fn new(mut sources: Vec<SequenceSource<T>>) -> Result<Self, EngineError> {
        let sequence = if sources.is_empty() {
            None
        } else {
            Some(expand_all(&mut sources)?)
        };

        Ok(Self {
            sequence,
            has_value: false,
        })
    }
}

impl<T: Clone> Enumerator for GeneratorSequence<T> {
    type Item = Vec<T>;

    fn init(&mut self) {
        self.has_value = self.sequence.is_some();
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&self) -> Result<Vec<T>, EngineError> {
        if !self.has_value {
            return Err(EngineError::EmptySequence);
        }
        self.sequence.clone().ok_or(EngineError::EmptySequence)
    }

    fn next(&mut self) {
        self.has_value = false;
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}

/// Combinator+compositor pipeline generator.
///
/// For each combinator step, the current tuple of sequences is flattened
/// into one element-stream per sequence and merged by a fresh compositor
/// built from a clone of the composition strategy; the merged sequence
/// is the generator's value for that step.
pub struct GeneratorCompositor<T, C, S> {
    combinator: Combinator<T, C>,
    strategy: S,
}

impl<T, C, S> GeneratorCompositor<T, C, S>
where
    T: Clone,
    C: CombinationStrategy<T>,
    S: CompositionStrategy<T> + Clone,
{
    /// Create a pipeline generator from a combinator and a composition
    /// strategy.
    pub fn new(combinator: Combinator<T, C>, strategy: S) -> Self {
        Self {
            combinator,
            strategy,
        }
    }
}

impl<T, C, S> Enumerator for GeneratorCompositor<T, C, S>
where
    T: Clone + 'static,
    C: CombinationStrategy<T>,
    S: CompositionStrategy<T> + Clone,
{
    type Item = Vec<T>;

    fn init(&mut self) {
        self.combinator.init();
    }

    fn has_value(&self) -> bool {
        self.combinator.has_value()
    }

    fn value(&self) -> Result<Vec<T>, EngineError> {
        let combination = self.combinator.value()?;
        if combination.is_empty() {
            return Ok(Vec::new());
        }

        let streams: Vec<BoxedEnumerator<T>> = combination
            .into_iter()
            .map(|sequence| Box::new(CollectionIterator::new(sequence)) as BoxedEnumerator<T>)
            .collect();

        let mut compositor = Compositor::new(streams, self.strategy.clone())?;

        let mut sequence = Vec::new();
        compositor.init();
        while compositor.has_value() {
            sequence.push(compositor.value()?);
            compositor.next();
        }

        trace!(len = sequence.len(), "composed one sequence");
        Ok(sequence)
    }

    fn next(&mut self) {
        self.combinator.next();
    }

    fn stop(&mut self) {
        self.combinator.stop();
    }
}

impl<T, C: fmt::Debug, S: fmt::Debug> fmt::Debug for GeneratorCompositor<T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorCompositor")
            .field("combinator", &self.combinator)
            .field("strategy", &self.strategy)
            .finish()
    }
}
