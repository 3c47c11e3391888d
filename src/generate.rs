//! Random equation generation.

use std::ops::RangeInclusive;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::assemble::assemble;
use crate::equation::Equation;
use crate::node::Term;
use crate::types::LeafKind;

/// Coefficient range for variable terms. Zero is excluded by resampling.
pub const VARIABLE_COEFFICIENTS: RangeInclusive<i64> = -5..=5;

/// Coefficient range for constant terms. Zero is excluded by resampling.
pub const CONSTANT_COEFFICIENTS: RangeInclusive<i64> = -10..=10;

fn sample_coefficient(rng: &mut impl Rng, range: RangeInclusive<i64>) -> i64 {
    loop {
        let coefficient = rng.gen_range(range.clone());
        if coefficient != 0 {
            return coefficient;
        }
    }
}

fn sample_leaves(rng: &mut impl Rng, count: usize, kind: LeafKind) -> Vec<Term> {
    (0..count)
        .map(|_| match kind {
            LeafKind::Variable => Term::variable(sample_coefficient(rng, VARIABLE_COEFFICIENTS)),
            LeafKind::Constant => Term::constant(sample_coefficient(rng, CONSTANT_COEFFICIENTS)),
        })
        .collect()
}

fn split(rng: &mut impl Rng, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        rng.gen_range(0..total)
    }
}

/// Generates a fresh equation with `variable_count` variable terms and
/// `constant_count` constant terms in total, distributed across both sides.
///
/// Each kind is split at a uniformly chosen point, so the right side always
/// receives at least one leaf of any kind that is present. Both sides are
/// shuffled independently before assembly, so display order does not reveal
/// generation order. If the split leaves a side with no terms at all, the
/// last leaf of the other side's shuffled sequence moves over; totals are
/// unchanged by this.
///
/// # Panics
///
/// Panics if `variable_count + constant_count < 2`: fewer terms cannot
/// populate two non-empty sides.
pub fn generate_with(
    rng: &mut impl Rng,
    variable_count: usize,
    constant_count: usize,
) -> Equation {
    assert!(
        variable_count + constant_count >= 2,
        "need at least two terms to fill both sides"
    );

    let variables_left = split(rng, variable_count);
    let constants_left = split(rng, constant_count);
    debug!(
        "generate: variables {}/{}, constants {}/{}",
        variables_left,
        variable_count - variables_left,
        constants_left,
        constant_count - constants_left,
    );

    let mut left = sample_leaves(rng, variables_left, LeafKind::Variable);
    left.extend(sample_leaves(rng, constants_left, LeafKind::Constant));

    let mut right = sample_leaves(rng, variable_count - variables_left, LeafKind::Variable);
    right.extend(sample_leaves(rng, constant_count - constants_left, LeafKind::Constant));

    left.shuffle(rng);
    right.shuffle(rng);

    // The split can leave one side empty, which assembly cannot accept.
    if left.is_empty() {
        left.push(right.pop().unwrap());
    } else if right.is_empty() {
        right.push(left.pop().unwrap());
    }

    Equation::new(assemble(left), assemble(right))
}

/// [`generate_with`] driven by the thread-local RNG.
pub fn generate(variable_count: usize, constant_count: usize) -> Equation {
    generate_with(&mut rand::thread_rng(), variable_count, constant_count)
}
