use std::collections::HashSet;

use crate::iterator::{Enumerator, SequenceSource};

use super::CombinationStrategy;

/// Diagonal (round-robin) combination.
///
/// Every advance steps all sub-iterators by one. A sub-iterator that
/// exhausts is recorded and, while at least one other has not yet
/// exhausted, immediately re-initialized so the walk keeps producing
/// tuples. The combination terminates once every sub-iterator has
/// exhausted at least once, so the tuple count equals the length of the
/// longest sub-iterator's cycle rather than the product of lengths.
#[derive(Debug, Clone)]
pub struct Diagonal {
    /// Indices of sub-iterators that have completed at least one cycle.
    exhausted: HashSet<usize>,
}

impl Diagonal {
    /// Create a diagonal combination strategy.
    pub fn new() -> Self {
        Self {
            exhausted: HashSet::new(),
        }
    }
}

impl<T> CombinationStrategy<T> for Diagonal {
    fn on_init(&mut self, _count: usize) {
        self.exhausted.clear();
    }

    fn advance(&mut self, sources: &mut [SequenceSource<T>]) -> bool {
        let count = sources.len();

        for (i, source) in sources.iter_mut().enumerate() {
            source.next();

            if !source.has_value() {
                self.exhausted.insert(i);

                if self.exhausted.len() < count {
                    // Wrap around so the remaining cycles stay paired
                    // with a full tuple.
                    source.init();
                } else {
                    return false;
                }
            }
        }

        true
    }
}
