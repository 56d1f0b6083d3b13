use crate::iterator::{BoxedEnumerator, Enumerator};

use super::CompositionStrategy;

/// Catenation composition: sub-iterators are drained strictly in order,
/// so the merged stream is the plain concatenation of the sub-streams.
#[derive(Debug, Clone)]
pub struct Catenation {
    /// Index of the sub-iterator currently being drained.
    current: usize,
}

impl Catenation {
    /// Create a catenation composition strategy.
    pub fn new() -> Self {
        Self { current: 0 }
    }
}

impl<T> CompositionStrategy<T> for Catenation {
    fn on_init(&mut self, _count: usize) {
        self.current = 0;
    }

    fn on_next(&mut self) {}

    fn choose(&mut self, streams: &mut [BoxedEnumerator<T>]) -> Option<usize> {
        while self.current < streams.len() {
            if streams[self.current].has_value() {
                return Some(self.current);
            }
            self.current += 1;
        }
        None
    }
}
