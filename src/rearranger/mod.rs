//! Single-shot flattening of sequence streams
//!
//! A rearranger post-processes an iterator-of-sequences into a single
//! sequence, discarding element-level interleaving. The expand variant
//! implemented here concatenates every yielded sequence, in source
//! order, computed eagerly at construction time.

use crate::generator::expand;
use crate::iterator::Enumerator;
use crate::EngineError;

/// Concatenates every sequence a source iterator yields into one
/// combined sequence, then behaves as a single-element iterator over it:
/// the value is available exactly once per `init()`, after which the
/// rearranger is exhausted.
#[derive(Debug, Clone)]
pub struct RearrangerExpand<T> {
    sequence: Vec<T>,
    has_value: bool,
}

impl<T: Clone> RearrangerExpand<T> {
    /// Build the rearranger by eagerly draining the source to
    /// completion.
    pub fn new<I>(source: &mut I) -> Result<Self, EngineError>
    where
        I: Enumerator<Item = Vec<T>> + ?Sized,
    {
        Ok(Self {
            sequence: expand(source)?,
            has_value: false,
        })
    }
}

impl<T: Clone> Enumerator for RearrangerExpand<T> {
    type Item = Vec<T>;

    fn init(&mut self) {
        self.has_value = true;
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&self) -> Result<Vec<T>, EngineError> {
        if !self.has_value {
            return Err(EngineError::EmptySequence);
        }
        Ok(self.sequence.clone())
    }

    fn next(&mut self) {
        self.has_value = false;
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}
