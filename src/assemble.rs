//! Rebuilding a balanced combination tree from a leaf sequence.

use log::debug;

use crate::node::{Op, Term};

/// Combines `leaves` into a single tree by repeated pairwise addition.
///
/// A one-element sequence is returned unchanged, with no wrapping node.
/// Longer sequences are paired up round by round: adjacent elements are
/// joined with `+`, and an odd-length round first fuses its last two
/// elements so every pairing pass sees an even length. The result has
/// depth O(log n), so rendering and traversal stay proportional to the
/// term count rather than to the number of edits that produced it.
///
/// Flattening the result with [`Term::leaves`] yields the input sequence
/// in its exact original order.
///
/// # Panics
///
/// Panics if `leaves` is empty. An equation side never legitimately holds
/// zero terms, so an empty sequence is a bug in the caller.
pub fn assemble(leaves: Vec<Term>) -> Term {
    assert!(!leaves.is_empty(), "cannot assemble an empty term sequence");
    debug!("assemble({} leaves)", leaves.len());

    let mut working = leaves;
    while working.len() > 1 {
        if working.len() % 2 == 1 {
            // len >= 3 here, so both pops succeed
            let b = working.pop().unwrap();
            let a = working.pop().unwrap();
            working.push(Term::combine(Op::Add, a, b));
        }

        let mut paired = Vec::with_capacity(working.len() / 2);
        let mut nodes = working.into_iter();
        while let (Some(a), Some(b)) = (nodes.next(), nodes.next()) {
            paired.push(Term::combine(Op::Add, a, b));
        }
        working = paired;
    }

    working.into_iter().next().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn depth(node: &Term) -> usize {
        match node {
            Term::Combination { left, right, .. } => 1 + depth(left).max(depth(right)),
            _ => 0,
        }
    }

    fn leaf_row(count: usize) -> (Vec<Term>, Vec<crate::types::NodeId>) {
        let leaves: Vec<Term> = (0..count).map(|i| Term::constant(i as i64 + 1)).collect();
        let ids = leaves.iter().map(|leaf| leaf.id()).collect();
        (leaves, ids)
    }

    #[test]
    fn test_single_leaf_is_returned_unchanged() {
        let leaf = Term::variable(3);
        let id = leaf.id();
        let tree = assemble(vec![leaf]);
        assert!(tree.is_leaf());
        assert_eq!(tree.id(), id);
    }

    #[test]
    #[should_panic(expected = "empty term sequence")]
    fn test_empty_sequence_panics() {
        assemble(vec![]);
    }

    #[test]
    fn test_round_trip_preserves_order_even() {
        let (leaves, ids) = leaf_row(4);
        let tree = assemble(leaves);
        let got: Vec<_> = tree.leaves().iter().map(|leaf| leaf.id()).collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn test_round_trip_preserves_order_odd() {
        for count in [3, 5, 7] {
            let (leaves, ids) = leaf_row(count);
            let tree = assemble(leaves);
            let got: Vec<_> = tree.leaves().iter().map(|leaf| leaf.id()).collect();
            assert_eq!(got, ids, "order broken for {} leaves", count);
        }
    }

    #[test]
    fn test_tree_is_balanced() {
        let (leaves, _) = leaf_row(8);
        assert_eq!(depth(&assemble(leaves)), 3);

        let (leaves, _) = leaf_row(16);
        assert_eq!(depth(&assemble(leaves)), 4);

        // Odd counts stay within one level of the power-of-two depth.
        let (leaves, _) = leaf_row(9);
        assert!(depth(&assemble(leaves)) <= 5);
    }

    #[test]
    fn test_reassembly_is_stable() {
        // Assembling the same leaf order twice gives the same shape.
        let (leaves, _) = leaf_row(6);
        let once = assemble(leaves);
        let again = assemble(once.clone().into_leaves());
        let shape = |t: &Term| {
            t.leaves()
                .iter()
                .map(|leaf| leaf.coefficient().unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(&once), shape(&again));
        assert_eq!(depth(&once), depth(&again));
    }
}
