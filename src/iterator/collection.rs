use crate::EngineError;

use super::Enumerator;

/// Enumerator over an owned collection of values.
///
/// The workhorse adaptor of the engine: generators wrap each sequence of
/// a combinator tuple in one of these before handing the set to a
/// compositor.
#[derive(Debug, Clone)]
pub struct CollectionIterator<T> {
    items: Vec<T>,
    position: usize,
    has_value: bool,
}

impl<T: Clone> CollectionIterator<T> {
    /// Create an enumerator over the given collection.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            has_value: false,
        }
    }

    /// Number of values in the underlying collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the underlying collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Enumerator for CollectionIterator<T> {
    type Item = T;

    fn init(&mut self) {
        self.position = 0;
        self.has_value = !self.items.is_empty();
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&self) -> Result<T, EngineError> {
        if !self.has_value {
            return Err(EngineError::EmptySequence);
        }
        Ok(self.items[self.position].clone())
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }
        self.position += 1;
        if self.position >= self.items.len() {
            self.has_value = false;
        }
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_in_order() {
        let mut it = CollectionIterator::new(vec![10, 20, 30]);
        it.init();

        let mut seen = Vec::new();
        while it.has_value() {
            seen.push(it.value().unwrap());
            it.next();
        }
        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn test_empty_collection_never_has_value() {
        let mut it: CollectionIterator<u8> = CollectionIterator::new(vec![]);
        it.init();
        assert!(!it.has_value());
        assert_eq!(it.value(), Err(crate::EngineError::EmptySequence));
    }

    #[test]
    fn test_value_before_init_fails() {
        let it = CollectionIterator::new(vec![1]);
        assert_eq!(it.value(), Err(crate::EngineError::EmptySequence));
    }

    #[test]
    fn test_reinit_restarts() {
        let mut it = CollectionIterator::new(vec![1, 2]);
        it.init();
        it.next();
        assert_eq!(it.value().unwrap(), 2);

        it.init();
        assert_eq!(it.value().unwrap(), 1);
    }

    #[test]
    fn test_next_after_exhaustion_is_noop() {
        let mut it = CollectionIterator::new(vec![7]);
        it.init();
        it.next();
        assert!(!it.has_value());
        it.next();
        assert!(!it.has_value());
    }
}
