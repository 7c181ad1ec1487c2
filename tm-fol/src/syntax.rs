/*! Defines the expression tree for first-order terms and formulae with equality, the
classification of node labels into symbols, the textual renderings of trees and the signature
of a formula. */
mod print;
mod signature;
mod symbol;
mod tree;

pub use print::{Dump, Postfix, Standard};
pub use signature::Sig;
pub use symbol::{
    is_constant_shape, is_predicate_shape, is_variable_shape, Connective, Quantifier, Symbol, AND,
    EQUALS, EXISTS, FORALL, IMPLIES, NOT, OR,
};
pub use tree::{ExpressionTree, Node, NodeId, NodeRef, MAX_DEPTH};

pub(crate) use tree::Arena;

use thiserror::Error;

/// Is the type of errors arising from editing an [`ExpressionTree`].
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a node without a parent is replaced in a position it does not occupy.
    #[error("node `{node:?}` is not attached to the tree")]
    DetachedNode { node: NodeId },

    /// Is returned when the same node is given twice as a child of one parent.
    #[error("node `{node:?}` appears more than once among the children")]
    DuplicateChild { node: NodeId },

    /// Is returned when a node would become a child of itself or of one of its descendants.
    #[error("node `{node:?}` cannot be placed under `{parent:?}`, which it contains")]
    Cycle { node: NodeId, parent: NodeId },

    /// Is returned when a child slot that does not exist is written.
    #[error("node `{node:?}` has no child at position {slot}")]
    NoSuchSlot { node: NodeId, slot: usize },
}
