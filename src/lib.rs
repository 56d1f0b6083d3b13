//! # Lazy Combinatorial Sequence Generation
//!
//! This library implements the sequence-generation engine used to build
//! combinatorial test cases for instruction-set architecture models:
//! instruction sequences, branch-execution traces, and memory-access
//! orderings are synthesized by recombining independently produced
//! partial sequences.
//!
//! ## Core Abstractions
//!
//! 1. **Enumerator protocol**: resumable, restartable cursors shared by
//!    every enumerator in the system
//! 2. **Combinator**: advances N independent sequence-sources in
//!    lock-step and exposes their current tuple of sequences
//! 3. **Compositor**: interleaves M parallel element-streams into one
//!    linear sequence
//! 4. **Generator**: consumer-facing driver built from a combinator and
//!    a compositor (or from plain concatenation)
//! 5. **Branch/trace iterator**: two-level enumeration of control-flow
//!    skeletons and their bounded execution traces
//!
//! All enumeration is single-threaded, synchronous, and in-memory; every
//! composite exclusively owns its sub-iterators.
//!
//! ## Usage Example
//!
//! ```
//! use seqgen::combinator::{Combinator, Diagonal};
//! use seqgen::compositor::Catenation;
//! use seqgen::generator::GeneratorCompositor;
//! use seqgen::iterator::{CollectionIterator, Enumerator, SequenceSource};
//!
//! let blocks: Vec<SequenceSource<u32>> = vec![
//!     Box::new(CollectionIterator::new(vec![vec![1, 2], vec![3]])),
//!     Box::new(CollectionIterator::new(vec![vec![9]])),
//! ];
//!
//! let combinator = Combinator::new(blocks, Diagonal::new());
//! let mut generator = GeneratorCompositor::new(combinator, Catenation::new());
//!
//! generator.init();
//! while generator.has_value() {
//!     let sequence = generator.value().unwrap();
//!     // feed `sequence` to the template processor
//!     generator.next();
//! }
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one layer of the enumeration engine
pub mod branch;     // Branch structures and execution-trace enumeration
pub mod combinator; // Lock-step combination of sequence-sources
pub mod compositor; // Interleaving of parallel element-streams
pub mod generator;  // Consumer-facing sequence drivers
pub mod iterator;   // The shared enumerator protocol
pub mod rearranger; // Single-shot flattening of sequence streams

// Re-exports for convenience
pub use branch::{Branch, BranchStructure, ExecutionTrace, StructureTraceIterator};
pub use combinator::{Combinator, Diagonal, Product};
pub use compositor::{Catenation, Compositor, Nesting, NestingPolicy, RandomSelection};
pub use generator::{GeneratorCompositor, GeneratorSequence};
pub use iterator::{CollectionIterator, Enumerator, RandomCandidateIterator};
pub use rearranger::RearrangerExpand;

use thiserror::Error;

/// Errors that can occur while constructing or driving enumerators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `value()` was called on an iterator that has no current value
    /// (not yet initialized, exhausted, or stopped).
    #[error("no value available: iterator is uninitialized or exhausted")]
    EmptySequence,

    /// A required collaborator or policy was invalid at construction time.
    #[error("invalid generator configuration: {0}")]
    Misconfiguration(String),
}
