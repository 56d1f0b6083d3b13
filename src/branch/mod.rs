//! Branch structures and execution-trace enumeration
//!
//! A [`BranchStructure`] is a control-flow skeleton produced by an
//! upstream structural enumerator (typically a range splitter, which
//! yields structures ordered by range start). For a given structure
//! there is a bounded family of concrete execution traces: one execution
//! count per branch, between the branch's minimum and the global
//! maximum-branch-execution cap.
//!
//! [`StructureTraceIterator`] is the composite two-level iterator over
//! (structure, trace) pairs: it enumerates traces structure by
//! structure, skipping structures for which no trace fits the cap.

use tracing::debug;

use crate::iterator::Enumerator;
use crate::EngineError;

/// A conditional site within a branch structure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "inspect", derive(serde::Serialize, serde::Deserialize))]
pub struct Branch {
    /// Identifier of the branch within its structure.
    pub id: usize,
    /// Smallest execution count that makes a trace through this branch
    /// well-formed (e.g. a loop back-edge that must be taken at least
    /// once).
    pub min_executions: usize,
}

/// A control-flow skeleton describing one coverage target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "inspect", derive(serde::Serialize, serde::Deserialize))]
pub struct BranchStructure {
    /// Start of the instruction range this structure covers; structures
    /// from a range-based splitter arrive sorted by this field.
    pub range_start: usize,
    /// Conditional sites in program order.
    pub branches: Vec<Branch>,
}

impl BranchStructure {
    /// Create a structure covering the range starting at `range_start`.
    pub fn new(range_start: usize, branches: Vec<Branch>) -> Self {
        Self {
            range_start,
            branches,
        }
    }
}

/// One concrete path through a branch structure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "inspect", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionTrace {
    /// Range start of the structure this trace belongs to.
    pub range_start: usize,
    /// Execution count per branch, in branch order.
    pub counts: Vec<usize>,
}

/// Enumerates every execution trace of one structure within the
/// maximum-branch-execution cap, in odometer order (the last branch's
/// count varies fastest).
///
/// A structure with no branches yields exactly one empty trace; a
/// structure containing a branch whose minimum exceeds the cap yields
/// none.
#[derive(Debug, Clone)]
pub struct BranchTraceIterator {
    structure: BranchStructure,
    max_branch_execution: usize,
    counts: Vec<usize>,
    has_value: bool,
}

impl BranchTraceIterator {
    /// Create a trace iterator for the given structure and execution cap.
    pub fn new(structure: BranchStructure, max_branch_execution: usize) -> Self {
        Self {
            structure,
            max_branch_execution,
            counts: Vec::new(),
            has_value: false,
        }
    }
}

impl Enumerator for BranchTraceIterator {
    type Item = ExecutionTrace;

    fn init(&mut self) {
        let feasible = self
            .structure
            .branches
            .iter()
            .all(|branch| branch.min_executions <= self.max_branch_execution);

        if !feasible {
            self.has_value = false;
            return;
        }

        self.counts = self
            .structure
            .branches
            .iter()
            .map(|branch| branch.min_executions)
            .collect();
        self.has_value = true;
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&self) -> Result<ExecutionTrace, EngineError> {
        if !self.has_value {
            return Err(EngineError::EmptySequence);
        }
        Ok(ExecutionTrace {
            range_start: self.structure.range_start,
            counts: self.counts.clone(),
        })
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }

        for i in (0..self.counts.len()).rev() {
            if self.counts[i] < self.max_branch_execution {
                self.counts[i] += 1;
                for j in i + 1..self.counts.len() {
                    self.counts[j] = self.structure.branches[j].min_executions;
                }
                return;
            }
        }

        self.has_value = false;
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}

/// Composite iterator over all (structure, trace) pairs of an outer
/// structure enumerator.
///
/// State machine: *seeking-structure* (advancing the outer iterator
/// until one yields at least one trace within the cap),
/// *enumerating-traces* (draining the inner trace iterator), and
/// *exhausted*. Structures with zero producible traces never surface as
/// values; outer order is preserved, so a range-sorted outer producer
/// yields traces sorted by range start.
#[derive(Debug)]
pub struct StructureTraceIterator<O> {
    outer: O,
    max_branch_execution: usize,
    inner: Option<BranchTraceIterator>,
    has_value: bool,
}

impl<O: Enumerator<Item = BranchStructure>> StructureTraceIterator<O> {
    /// Create a composite iterator over the given structure enumerator,
    /// bounding every branch's execution count by `max_branch_execution`.
    pub fn new(outer: O, max_branch_execution: usize) -> Self {
        Self {
            outer,
            max_branch_execution,
            inner: None,
            has_value: false,
        }
    }

    /// Try to build and initialize a trace iterator for the outer
    /// iterator's current structure.
    fn init_inner(&mut self) -> bool {
        let Ok(structure) = self.outer.value() else {
            return false;
        };

        let mut inner = BranchTraceIterator::new(structure, self.max_branch_execution);
        inner.init();

        let usable = inner.has_value();
        self.inner = usable.then_some(inner);
        usable
    }

    /// Probe outer values until one yields a usable trace iterator.
    fn seek_structure(&mut self) -> bool {
        while self.outer.has_value() {
            if self.init_inner() {
                return true;
            }
            debug!(
                max = self.max_branch_execution,
                "skipping structure with no feasible traces"
            );
            self.outer.next();
        }

        false
    }
}

impl<O: Enumerator<Item = BranchStructure>> Enumerator for StructureTraceIterator<O> {
    type Item = ExecutionTrace;

    fn init(&mut self) {
        self.inner = None;
        self.outer.init();
        self.has_value = self.seek_structure();
    }

    fn has_value(&self) -> bool {
        self.has_value
    }

    fn value(&self) -> Result<ExecutionTrace, EngineError> {
        if !self.has_value {
            return Err(EngineError::EmptySequence);
        }
        match &self.inner {
            Some(inner) => inner.value(),
            None => Err(EngineError::EmptySequence),
        }
    }

    fn next(&mut self) {
        if !self.has_value {
            return;
        }

        if let Some(inner) = &mut self.inner {
            inner.next();
            if inner.has_value() {
                return;
            }
        }

        self.outer.next();
        if !self.seek_structure() {
            self.stop();
        }
    }

    fn stop(&mut self) {
        self.has_value = false;
    }
}
