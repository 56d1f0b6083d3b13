use crate::iterator::{Enumerator, SequenceSource};

use super::CombinationStrategy;

/// Cartesian-product combination.
///
/// Odometer-style walk: the last sub-iterator advances first; when it
/// exhausts it is re-initialized and the carry cascades to the previous
/// one. The combination exhausts when the first sub-iterator wraps, so
/// the tuple count is the product of the sub-iterators' cycle lengths.
#[derive(Debug, Clone)]
pub struct Product;

impl Product {
    /// Create a Cartesian-product combination strategy.
    pub fn new() -> Self {
        Self
    }
}

impl<T> CombinationStrategy<T> for Product {
    fn on_init(&mut self, _count: usize) {}

    fn advance(&mut self, sources: &mut [SequenceSource<T>]) -> bool {
        for i in (0..sources.len()).rev() {
            sources[i].next();

            if sources[i].has_value() {
                return true;
            }
            if i == 0 {
                return false;
            }

            sources[i].init();
        }

        false
    }
}
