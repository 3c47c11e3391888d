//! Structural edits: moving a term across sides and merging like terms.
//!
//! Both operations take the equation by reference and return a fresh value.
//! On failure the caller's equation is untouched, so a rejected edit costs
//! nothing beyond clearing the stale selection.

use log::debug;
use thiserror::Error;

use crate::assemble::assemble;
use crate::equation::Equation;
use crate::node::Term;
use crate::types::{LeafKind, NodeId, Side};
use crate::validate::expected_merge;

/// A rejected edit. All variants are recoverable: the presentation layer
/// reports them inline and keeps the current equation.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum EditError {
    /// The referenced leaf is not present, typically a stale selection.
    #[error("no leaf {0} in the equation")]
    NodeNotFound(NodeId),
    /// The two selected leaves cannot be merged: different kinds, different
    /// sides, or not two distinct leaves.
    #[error("selected terms cannot be merged")]
    IncompatibleMerge,
    /// The move would strip the source side of its only term.
    #[error("cannot move the only term off the {0} side")]
    WouldEmptySide(Side),
}

/// Moves the leaf `id` from `from` to `to`, inverting its sign.
///
/// The relocated term is a *new* leaf with a fresh id; selection state keyed
/// on the old id must be dropped by the caller. Both sides are rebuilt as
/// one atomic replacement. Moving a leaf onto its own side is a no-op.
pub fn move_term(
    equation: &Equation,
    id: NodeId,
    from: Side,
    to: Side,
) -> Result<Equation, EditError> {
    if from == to {
        return Ok(equation.clone());
    }

    let mut source = equation.side(from).clone().into_leaves();
    let position = source
        .iter()
        .position(|leaf| leaf.id() == id)
        .ok_or(EditError::NodeNotFound(id))?;
    if source.len() == 1 {
        return Err(EditError::WouldEmptySide(from));
    }

    let removed = source.remove(position);
    // into_leaves() yields leaves only, so negated() cannot miss
    let inverted = removed.negated().unwrap();
    debug!("move_term: {} from {} to {} as {}", removed, from, to, inverted);

    let mut target = equation.side(to).clone().into_leaves();
    target.push(inverted);

    let (left, right) = match from {
        Side::Left => (assemble(source), assemble(target)),
        Side::Right => (assemble(target), assemble(source)),
    };
    Ok(Equation::new(left, right))
}

/// Replaces two same-kind leaves on one side with a single leaf holding the
/// summed coefficient. The sum may legitimately be zero; a zero leaf is a
/// valid degenerate term, not an error. Only the affected side is rebuilt.
pub fn merge_terms(equation: &Equation, a: NodeId, b: NodeId) -> Result<Equation, EditError> {
    if a == b {
        return Err(EditError::IncompatibleMerge);
    }

    let locate = |id: NodeId| {
        [Side::Left, Side::Right].into_iter().find(|&side| {
            equation
                .side(side)
                .leaves()
                .iter()
                .any(|leaf| leaf.id() == id)
        })
    };
    let side_a = locate(a).ok_or(EditError::NodeNotFound(a))?;
    let side_b = locate(b).ok_or(EditError::NodeNotFound(b))?;
    if side_a != side_b {
        return Err(EditError::IncompatibleMerge);
    }

    let (selected, mut remaining): (Vec<Term>, Vec<Term>) = equation
        .side(side_a)
        .clone()
        .into_leaves()
        .into_iter()
        .partition(|leaf| leaf.id() == a || leaf.id() == b);

    let (kind, value) =
        expected_merge(&selected[0], &selected[1]).ok_or(EditError::IncompatibleMerge)?;
    let replacement = match kind {
        LeafKind::Variable => Term::variable(value),
        LeafKind::Constant => Term::constant(value),
    };
    debug!(
        "merge_terms: {} and {} on {} become {}",
        selected[0], selected[1], side_a, replacement
    );

    remaining.push(replacement);
    let rebuilt = assemble(remaining);
    Ok(match side_a {
        Side::Left => Equation::new(rebuilt, equation.right.clone()),
        Side::Right => Equation::new(equation.left.clone(), rebuilt),
    })
}
