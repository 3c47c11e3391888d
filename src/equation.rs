//! The two-sided equation and the win predicate.

use std::fmt;

use crate::node::Term;
use crate::types::Side;

/// A two-sided linear equation.
///
/// The two trees are independent values; engine operations replace them
/// wholesale and never mutate in place, so a caller can keep the previous
/// equation around (for undo, say) at no extra cost beyond the clone.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub left: Term,
    pub right: Term,
}

impl Equation {
    pub fn new(left: Term, right: Term) -> Self {
        Self { left, right }
    }

    /// Borrows the tree on the given side.
    pub fn side(&self, side: Side) -> &Term {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Total number of leaves across both sides.
    pub fn leaf_count(&self) -> usize {
        self.left.leaf_count() + self.right.leaf_count()
    }

    /// An equation counts as solved once each side has been reduced to a
    /// single term, regardless of kind: `3x = 7` is solved, `3x + 2 = 7`
    /// is not.
    pub fn is_solved(&self) -> bool {
        self.left.leaf_count() == 1 && self.right.leaf_count() == 1
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::node::Op;

    #[test]
    fn test_solved_with_one_leaf_per_side() {
        let eq = Equation::new(Term::variable(3), Term::constant(7));
        assert!(eq.is_solved());
    }

    #[test]
    fn test_not_solved_with_two_leaves_on_a_side() {
        let eq = Equation::new(
            Term::combine(Op::Add, Term::variable(3), Term::constant(2)),
            Term::constant(7),
        );
        assert!(!eq.is_solved());
    }

    #[test]
    fn test_solved_ignores_leaf_kind() {
        // Looser than kind segregation on purpose: x = 2x counts.
        let eq = Equation::new(Term::variable(1), Term::variable(2));
        assert!(eq.is_solved());
    }

    #[test]
    fn test_side_accessor() {
        let eq = Equation::new(Term::variable(3), Term::constant(7));
        assert_eq!(eq.side(Side::Left).id(), eq.left.id());
        assert_eq!(eq.side(Side::Right).id(), eq.right.id());
    }

    #[test]
    fn test_display() {
        let eq = Equation::new(
            Term::combine(Op::Add, Term::variable(3), Term::constant(2)),
            Term::constant(-7),
        );
        assert_eq!(eq.to_string(), "3x + 2 = -7");
    }
}
