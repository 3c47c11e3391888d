//! # balance-rs: a symbolic engine for equation-balancing practice
//!
//! **`balance-rs`** is the expression engine behind an equation-balancing
//! game: a learner rearranges the terms of a two-sided linear equation until
//! each side holds a single term. The engine owns the symbolic part of that
//! exercise --- the term tree, the edits that transform it, and the check
//! that decides when the equation is solved. Rendering, drag-and-drop, and
//! every other piece of presentation live outside this crate and consume
//! these functions as a pure API.
//!
//! ## Key properties
//!
//! - **Value semantics**: every operation takes an equation and returns a
//!   new one; nothing is mutated in place, so the surrounding session can
//!   keep, compare, or discard equation values freely.
//! - **Identifier-keyed leaves**: each node carries a unique [`NodeId`][crate::types::NodeId].
//!   Edits always produce fresh leaves, so external selection state keys on
//!   ids, never on references, and stale ids fail cleanly.
//! - **Balanced trees**: after every edit the affected sides are rebuilt by
//!   [`assemble`][crate::assemble::assemble] into a tree of O(log n) depth,
//!   independent of how many edits came before.
//! - **Typed failures**: recoverable misuse (stale id, unmergeable
//!   selection, emptying a side) comes back as an
//!   [`EditError`][crate::edit::EditError], not a panic.
//!
//! ## Basic usage
//!
//! ```rust
//! use balance_rs::edit::move_term;
//! use balance_rs::generate::generate;
//! use balance_rs::types::Side;
//!
//! // A fresh equation with two variable and two constant terms in total.
//! let equation = generate(2, 2);
//! assert_eq!(equation.leaf_count(), 4);
//!
//! // Pick a leaf on a side that holds more than one term and move it
//! // across: it lands sign-inverted, as a brand-new leaf.
//! let side = if equation.left.leaf_count() >= 2 { Side::Left } else { Side::Right };
//! let id = equation.side(side).leaves()[0].id();
//! let moved = move_term(&equation, id, side, side.opposite()).unwrap();
//! assert_eq!(moved.leaf_count(), 4);
//! assert!(moved.side(side.opposite()).leaf_count() >= 2);
//! ```
//!
//! ## Core components
//!
//! - **[`node`]**: the [`Term`][crate::node::Term] tree and its traversal.
//! - **[`equation`]**: the two-sided [`Equation`][crate::equation::Equation]
//!   and the win predicate.
//! - **[`generate`]**: random equation generation with controlled term
//!   counts.
//! - **[`edit`]**: the two structural edits, move-term and merge-terms.
//! - **[`validate`]**: checking a typed answer against an expected merge.

pub mod assemble;
pub mod edit;
pub mod equation;
pub mod generate;
pub mod node;
pub mod types;
pub mod validate;
