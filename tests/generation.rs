//! End-to-end generation scenarios
//!
//! Drives the combinator/compositor pipeline and the rearranger the way
//! a template processor would: one iterator per independent factor in,
//! finished sequences out.

use test_case::test_case;

use seqgen::combinator::{Combinator, Diagonal, Product};
use seqgen::compositor::{Catenation, Nesting, NestingPolicy, RandomSelection};
use seqgen::generator::{expand, GeneratorCompositor, GeneratorSequence};
use seqgen::iterator::{CollectionIterator, Enumerator, SequenceSource};
use seqgen::rearranger::RearrangerExpand;

fn source(sequences: Vec<Vec<u32>>) -> SequenceSource<u32> {
    Box::new(CollectionIterator::new(sequences))
}

fn cycle_of_len(len: usize) -> SequenceSource<u32> {
    source((0..len as u32).map(|i| vec![i]).collect())
}

fn count_tuples<S>(combinator: &mut Combinator<u32, S>) -> usize
where
    S: seqgen::combinator::CombinationStrategy<u32>,
{
    let mut count = 0;
    combinator.init();
    while combinator.has_value() {
        count += 1;
        combinator.next();
    }
    count
}

#[test]
fn diagonal_two_factor_scenario() {
    // Factors {[1,2],[3]} (cycle length 2) and {[9]} (cycle length 1):
    // the second factor wraps after exhausting at step 1, and the walk
    // ends after the longest cycle.
    let mut combinator = Combinator::new(
        vec![source(vec![vec![1, 2], vec![3]]), source(vec![vec![9]])],
        Diagonal::new(),
    );

    let mut tuples = Vec::new();
    combinator.init();
    while combinator.has_value() {
        tuples.push(combinator.value().unwrap());
        combinator.next();
    }

    assert_eq!(
        tuples,
        vec![
            vec![vec![1, 2], vec![9]],
            vec![vec![3], vec![9]],
        ],
    );
}

#[test_case(&[1, 1, 1], 1; "all singleton cycles")]
#[test_case(&[4, 2, 1], 4; "dominated by the longest cycle")]
#[test_case(&[2, 5], 5; "two factors")]
#[test_case(&[3], 3; "single factor")]
fn diagonal_tuple_count_is_longest_cycle(lengths: &[usize], expected: usize) {
    let sources = lengths.iter().map(|&len| cycle_of_len(len)).collect();
    let mut combinator = Combinator::new(sources, Diagonal::new());
    assert_eq!(count_tuples(&mut combinator), expected);
}

#[test_case(&[2, 3], 6; "two by three")]
#[test_case(&[2, 2, 2], 8; "three binary factors")]
#[test_case(&[5], 5; "single factor")]
fn product_tuple_count_is_product_of_cycles(lengths: &[usize], expected: usize) {
    let sources = lengths.iter().map(|&len| cycle_of_len(len)).collect();
    let mut combinator = Combinator::new(sources, Product::new());
    assert_eq!(count_tuples(&mut combinator), expected);
}

#[test]
fn pipeline_with_nesting_splices_blocks() {
    let combinator = Combinator::new(
        vec![source(vec![vec![1, 2, 3]]), source(vec![vec![10, 20]])],
        Diagonal::new(),
    );
    let mut generator = GeneratorCompositor::new(
        combinator,
        Nesting::with_policy(NestingPolicy::Offset(1)),
    );

    generator.init();
    assert_eq!(generator.value().unwrap(), vec![1, 10, 20, 2, 3]);
    generator.next();
    assert!(!generator.has_value());
}

#[test]
fn pipeline_with_random_merge_keeps_all_elements() {
    let combinator = Combinator::new(
        vec![source(vec![vec![1, 2, 3]]), source(vec![vec![10, 20]])],
        Diagonal::new(),
    );
    let mut generator =
        GeneratorCompositor::new(combinator, RandomSelection::with_seed(5));

    generator.init();
    let mut merged = generator.value().unwrap();
    assert_eq!(merged.len(), 5);
    merged.sort_unstable();
    assert_eq!(merged, vec![1, 2, 3, 10, 20]);
}

#[test]
fn plain_generator_matches_rearranger() {
    // The plain-concatenation generator and the expand rearranger agree
    // on the flattened output for the same source material.
    let sequences = vec![vec![1, 2], vec![3], vec![4, 5]];

    let mut generator =
        GeneratorSequence::new(vec![source(sequences.clone())]).unwrap();
    generator.init();
    let from_generator = generator.value().unwrap();

    let mut raw = CollectionIterator::new(sequences);
    let mut rearranger = RearrangerExpand::new(&mut raw).unwrap();
    rearranger.init();
    let from_rearranger = rearranger.value().unwrap();

    assert_eq!(from_generator, from_rearranger);
    assert_eq!(from_generator, vec![1, 2, 3, 4, 5]);
}

#[test]
fn expand_helper_flattens_pipeline_output() {
    let combinator = Combinator::new(
        vec![source(vec![vec![1], vec![2]]), source(vec![vec![7]])],
        Diagonal::new(),
    );
    let mut generator = GeneratorCompositor::new(combinator, Catenation::new());

    let flat = expand(&mut generator).unwrap();
    assert_eq!(flat, vec![1, 7, 2, 7]);
}
