use crate::iterator::{BoxedEnumerator, Enumerator};
use crate::EngineError;

use super::CompositionStrategy;

/// Splice-offset policy for [`Nesting`] composition.
///
/// Assigns each nesting level the number of elements its stream emits
/// before the next-deeper stream is spliced in. The offset is an
/// explicit policy rather than a fixed rule; in particular it does not
/// default to the parent stream's full length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NestingPolicy {
    /// Splice every child at offset 0, before any parent element.
    Immediate,
    /// Splice every child after the same fixed number of parent elements.
    Offset(usize),
    /// Explicit splice offset per level; the vector must have exactly one
    /// entry per sub-iterator.
    PerLevel(Vec<usize>),
}

impl NestingPolicy {
    /// Splice offset assigned to the given level.
    fn point(&self, level: usize) -> usize {
        match self {
            NestingPolicy::Immediate => 0,
            NestingPolicy::Offset(offset) => *offset,
            NestingPolicy::PerLevel(points) => points.get(level).copied().unwrap_or(0),
        }
    }
}

/// One active level of the nesting stack.
#[derive(Debug, Clone)]
struct Level {
    /// Index of the sub-iterator driven at this level.
    stream: usize,
    /// Elements consumed from this level's stream so far.
    step: usize,
    /// Local step at which the next-deeper stream is spliced in.
    point: usize,
    /// Whether the deeper stream has already been spliced.
    spliced: bool,
}

impl Level {
    fn new(stream: usize, point: usize) -> Self {
        Self {
            stream,
            step: 0,
            point,
            spliced: false,
        }
    }
}

/// Nesting composition: the sub-iterators form a stack of nested loops,
/// each child stream spliced into its parent's stream at the offset the
/// [`NestingPolicy`] assigns to that level.
///
/// `choose` walks the stack from the top: when the top level has reached
/// its splice point, has not spliced yet, and a deeper sub-iterator
/// remains, that sub-iterator is pushed as a new level; otherwise the
/// top supplies the next element if it still has one, and exhausted
/// levels are popped.
#[derive(Debug, Clone)]
pub struct Nesting {
    policy: NestingPolicy,
    stack: Vec<Level>,
}

impl Nesting {
    /// Create a nesting strategy that splices every child immediately.
    pub fn new() -> Self {
        Self::with_policy(NestingPolicy::Immediate)
    }

    /// Create a nesting strategy with an explicit splice policy.
    pub fn with_policy(policy: NestingPolicy) -> Self {
        Self {
            policy,
            stack: Vec::new(),
        }
    }
}

impl<T> CompositionStrategy<T> for Nesting {
    fn check(&self, count: usize) -> Result<(), EngineError> {
        if let NestingPolicy::PerLevel(points) = &self.policy {
            if points.len() != count {
                return Err(EngineError::Misconfiguration(format!(
                    "per-level nesting policy has {} points for {} streams",
                    points.len(),
                    count
                )));
            }
        }
        Ok(())
    }

    fn on_init(&mut self, count: usize) {
        self.stack.clear();
        if count > 0 {
            self.stack.push(Level::new(0, self.policy.point(0)));
        }
    }

    fn on_next(&mut self) {
        if let Some(top) = self.stack.last_mut() {
            top.step += 1;
        }
    }

    fn choose(&mut self, streams: &mut [BoxedEnumerator<T>]) -> Option<usize> {
        loop {
            let depth = self.stack.len();
            if depth == 0 {
                return None;
            }
            let top = self.stack[depth - 1].clone();

            if top.step == top.point && !top.spliced && depth < streams.len() {
                self.stack[depth - 1].spliced = true;
                // The next-deeper stream index equals the stack depth
                // before the push.
                self.stack.push(Level::new(depth, self.policy.point(depth)));
                continue;
            }

            if streams[top.stream].has_value() {
                return Some(top.stream);
            }
            self.stack.pop();
        }
    }
}
