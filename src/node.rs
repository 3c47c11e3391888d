//! The term tree: tagged node type, constructors, and leaf traversal.

use std::fmt;

use crate::types::{LeafKind, NodeId};

/// Operator of a combination node.
///
/// Current code paths only ever produce [`Op::Add`]. [`Op::Sub`] is kept so
/// that trees built by older generators still traverse and render.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Op {
    Add,
    Sub,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => write!(f, "+"),
            Op::Sub => write!(f, "-"),
        }
    }
}

/// A node in a term tree: a selectable leaf or an internal combination.
///
/// Leaves carry a signed coefficient. Generation never produces a zero
/// coefficient, but a merge legitimately can, so constructors accept it.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A multiple of the unknown, rendered as `x`.
    Variable { id: NodeId, coefficient: i64 },
    /// A plain number.
    Constant { id: NodeId, coefficient: i64 },
    /// Two subtrees joined by an additive operator.
    Combination {
        id: NodeId,
        op: Op,
        left: Box<Term>,
        right: Box<Term>,
    },
}

impl Term {
    /// Creates a variable leaf with a fresh id.
    pub fn variable(coefficient: i64) -> Self {
        Term::Variable {
            id: NodeId::fresh(),
            coefficient,
        }
    }

    /// Creates a constant leaf with a fresh id.
    pub fn constant(coefficient: i64) -> Self {
        Term::Constant {
            id: NodeId::fresh(),
            coefficient,
        }
    }

    /// Joins two subtrees under a combination node with a fresh id.
    pub fn combine(op: Op, left: Term, right: Term) -> Self {
        Term::Combination {
            id: NodeId::fresh(),
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns this node's identifier.
    pub fn id(&self) -> NodeId {
        match self {
            Term::Variable { id, .. } => *id,
            Term::Constant { id, .. } => *id,
            Term::Combination { id, .. } => *id,
        }
    }

    /// True for variable and constant nodes.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Term::Combination { .. })
    }

    /// The leaf kind, or `None` for combination nodes.
    pub fn kind(&self) -> Option<LeafKind> {
        match self {
            Term::Variable { .. } => Some(LeafKind::Variable),
            Term::Constant { .. } => Some(LeafKind::Constant),
            Term::Combination { .. } => None,
        }
    }

    /// The leaf coefficient, or `None` for combination nodes.
    pub fn coefficient(&self) -> Option<i64> {
        match self {
            Term::Variable { coefficient, .. } => Some(*coefficient),
            Term::Constant { coefficient, .. } => Some(*coefficient),
            Term::Combination { .. } => None,
        }
    }

    /// A leaf of the same kind with the coefficient negated.
    ///
    /// The result carries a fresh id: it is a different node as far as any
    /// selection state is concerned. Returns `None` for combination nodes.
    pub fn negated(&self) -> Option<Term> {
        match self {
            Term::Variable { coefficient, .. } => Some(Term::variable(-coefficient)),
            Term::Constant { coefficient, .. } => Some(Term::constant(-coefficient)),
            Term::Combination { .. } => None,
        }
    }

    /// The in-order sequence of leaves under this node, left subtree first.
    ///
    /// A leaf flattens to a one-element sequence. This order is what a
    /// presentation layer displays left to right, and
    /// [`assemble`](crate::assemble::assemble) preserves it exactly.
    pub fn leaves(&self) -> Vec<&Term> {
        match self {
            Term::Combination { left, right, .. } => {
                let mut out = left.leaves();
                out.extend(right.leaves());
                out
            }
            leaf => vec![leaf],
        }
    }

    /// Consuming variant of [`leaves`](Term::leaves).
    pub fn into_leaves(self) -> Vec<Term> {
        match self {
            Term::Combination { left, right, .. } => {
                let mut out = left.into_leaves();
                out.extend(right.into_leaves());
                out
            }
            leaf => vec![leaf],
        }
    }

    /// Number of leaves under this node, without allocating.
    pub fn leaf_count(&self) -> usize {
        match self {
            Term::Combination { left, right, .. } => left.leaf_count() + right.leaf_count(),
            _ => 1,
        }
    }
}

impl fmt::Display for Term {
    /// Renders the flattened leaf sequence with signs folded into the
    /// joining operators, e.g. `3x + 2 - 5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, leaf) in self.leaves().into_iter().enumerate() {
            let (coefficient, kind) = match leaf {
                Term::Variable { coefficient, .. } => (*coefficient, LeafKind::Variable),
                Term::Constant { coefficient, .. } => (*coefficient, LeafKind::Constant),
                Term::Combination { .. } => unreachable!("leaves() yields only leaf nodes"),
            };
            if i == 0 {
                if coefficient < 0 {
                    write!(f, "-")?;
                }
            } else if coefficient < 0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let magnitude = coefficient.unsigned_abs();
            match kind {
                LeafKind::Variable if magnitude == 1 => write!(f, "x")?,
                LeafKind::Variable => write!(f, "{}x", magnitude)?,
                LeafKind::Constant => write!(f, "{}", magnitude)?,
            }
        }
        Ok(())
    }
}
