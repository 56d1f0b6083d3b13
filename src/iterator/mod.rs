//! The shared enumerator protocol
//!
//! Every enumerator in the engine is a resumable cursor over a lazy,
//! finite, restartable sequence of values:
//! - created in an *uninitialized* state
//! - `init()` establishes the first value (re-entrant: calling it again
//!   restarts enumeration from the beginning)
//! - `next()` advances; a no-op once exhausted
//! - `stop()` forces exhaustion
//!
//! Duplicating a cursor is deliberately not part of the protocol: none of
//! the composites in this engine can be cloned mid-enumeration, so the
//! capability is omitted from the trait instead of stubbed to fail.

mod collection;
mod random;

pub use collection::CollectionIterator;
pub use random::RandomCandidateIterator;

use crate::EngineError;

/// Resumable cursor over a finite, restartable sequence of values.
///
/// Callers are expected to guard every `value()` call with `has_value()`;
/// the canonical pull loop is
/// `init(); while has_value() { consume(value()?); next(); }`.
pub trait Enumerator {
    /// Type of the values produced by this enumerator.
    type Item;

    /// (Re)establishes the first value. Restarts enumeration when called
    /// on an already-driven iterator.
    fn init(&mut self);

    /// True iff a current value exists.
    fn has_value(&self) -> bool;

    /// Returns the current value.
    ///
    /// Fails with [`EngineError::EmptySequence`] whenever `has_value()`
    /// is false; this is always a caller bug, never recovered internally.
    fn value(&self) -> Result<Self::Item, EngineError>;

    /// Advances to the next value. Remains exhausted once exhausted.
    fn next(&mut self);

    /// Unconditionally forces `has_value()` to false.
    fn stop(&mut self);
}

impl<I: Enumerator + ?Sized> Enumerator for Box<I> {
    type Item = I::Item;

    fn init(&mut self) {
        (**self).init();
    }

    fn has_value(&self) -> bool {
        (**self).has_value()
    }

    fn value(&self) -> Result<Self::Item, EngineError> {
        (**self).value()
    }

    fn next(&mut self) {
        (**self).next();
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

/// Owned, type-erased enumerator of `T` values.
pub type BoxedEnumerator<T> = Box<dyn Enumerator<Item = T>>;

/// Owned, type-erased enumerator of sequences of `T`.
///
/// This is the shape upstream producers (template block builders,
/// branch-structure enumerators, memory-access enumerators) hand to
/// combinators and generators: one source per independent factor.
pub type SequenceSource<T> = BoxedEnumerator<Vec<T>>;
