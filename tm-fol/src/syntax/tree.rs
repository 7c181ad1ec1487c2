/*! Defines [`ExpressionTree`], the syntax tree shared by the parsers, the transformations and
the evaluator.

Nodes live in an arena owned by the tree and refer to each other by [`NodeId`] handles. A node
owns nothing: the parent link and the child slots are both handles, and every operation that
moves a node updates both sides of the link at once.

[`ExpressionTree`]: crate::syntax::ExpressionTree
[`NodeId`]: crate::syntax::NodeId
*/
use super::{symbol::*, Error};
use std::ops::Index;

/// Is the deepest nesting of nodes that [`classify`] accepts and that the evaluator descends
/// into.
///
/// [`classify`]: crate::parser::classify
pub const MAX_DEPTH: usize = 256;

/// Is a handle to a node inside an [`ExpressionTree`].
///
/// **Note**: a handle is only meaningful for the tree that issued it.
///
/// [`ExpressionTree`]: crate::syntax::ExpressionTree
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

/// Is a node of an [`ExpressionTree`]: a label, an ordered list of children and an optional
/// back reference to the parent.
///
/// [`ExpressionTree`]: crate::syntax::ExpressionTree
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Node {
    value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    /// Returns the label of the node.
    #[inline(always)]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the children of the node in order.
    #[inline(always)]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the parent of the node, if it is attached.
    #[inline(always)]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the number of children.
    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.children.len()
    }
}

// Node storage shared by trees and by the parsers that build them.
#[derive(Clone, Default, Debug)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    // Drops every node allocated after the first `len` nodes. Nodes allocated before the mark
    // never point to nodes after it because parents are always allocated after their children.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    // Allocates a node over `children`, which must be distinct. Children attached elsewhere are
    // moved.
    pub(crate) fn alloc<S: Into<String>>(&mut self, value: S, children: Vec<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        for &child in &children {
            self.detach(child);
            self.nodes[child.0].parent = Some(id);
        }
        self.nodes.push(Node {
            value: value.into(),
            children,
            parent: None,
        });
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn get(&self, id: NodeId) -> NodeRef {
        NodeRef { nodes: self, id }
    }

    // Removes `id` from the children of its parent, if any.
    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    fn check_distinct(children: &[NodeId]) -> Result<(), Error> {
        for (i, &child) in children.iter().enumerate() {
            if children[..i].contains(&child) {
                return Err(Error::DuplicateChild { node: child });
            }
        }
        Ok(())
    }

    // Fails if `node` is `parent` or one of its ancestors.
    fn check_acyclic(&self, parent: NodeId, node: NodeId) -> Result<(), Error> {
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == node {
                return Err(Error::Cycle { node, parent });
            }
            current = self.nodes[id.0].parent;
        }
        Ok(())
    }

    fn push_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        self.check_acyclic(parent, child)?;
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    fn set_child(&mut self, parent: NodeId, slot: usize, child: NodeId) -> Result<(), Error> {
        let children = &self.nodes[parent.0].children;
        let old = *children
            .get(slot)
            .ok_or(Error::NoSuchSlot { node: parent, slot })?;
        if old == child {
            return Ok(());
        }
        // a sibling trades places with the node in `slot`
        if let Some(other) = children.iter().position(|&c| c == child) {
            self.nodes[parent.0].children.swap(slot, other);
            return Ok(());
        }
        self.check_acyclic(parent, child)?;
        self.detach(child);
        self.nodes[parent.0].children[slot] = child;
        self.nodes[old.0].parent = None;
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    // Copies the subtree rooted at `source` into the receiver, children first.
    pub(crate) fn copy(&mut self, source: NodeRef) -> NodeId {
        // a node is expanded on its first visit and allocated on its second
        let mut stack = vec![(source, false)];
        let mut copied = Vec::new();
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                let children = copied.split_off(copied.len() - node.arity());
                copied.push(self.alloc(node.value(), children));
            } else {
                stack.push((node, true));
                stack.extend(node.children().rev().map(|child| (child, false)));
            }
        }
        // the source root is the last node allocated
        copied.pop().unwrap_or_else(|| self.alloc(source.value(), Vec::new()))
    }
}

/// Is a first-order formula or term as a tree of labeled nodes.
///
/// The label of a node decides what it stands for: `=`, `!`, `&`, `|` and `>` are connectives,
/// `@x` and `#x` quantify `x`, and the remaining labels are predicates, functions, variables or
/// constants depending on their shape and arity (see [`Symbol`]).
///
/// **Example**:
/// ```rust
/// use tm_fol::syntax::ExpressionTree;
///
/// // build `@x(>(P(x),=(x,0)))`:
/// let mut tree = ExpressionTree::new("P");
/// let x = tree.add_node("x");
/// tree.add_child(tree.root(), x).unwrap();
/// let left = tree.root();
/// let x = tree.add_node("x");
/// let zero = tree.add_node("0");
/// let right = tree.equals(x, zero).unwrap();
/// let implies = tree.implies(left, right).unwrap();
/// let forall = tree.forall("x", implies);
/// tree.set_root(forall);
///
/// assert_eq!("@x(>(P(x),=(x,0)))", tree.to_string());
/// assert_eq!("@x((P(x) > (x = 0)))", tree.standard().to_string());
/// ```
///
/// [`Symbol`]: crate::syntax::Symbol
#[derive(Clone)]
pub struct ExpressionTree {
    arena: Arena,
    root: NodeId,
}

impl ExpressionTree {
    /// Creates a tree consisting of a single node labeled `value`.
    pub fn new<S: Into<String>>(value: S) -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc(value, Vec::new());
        Self { arena, root }
    }

    // Builds a tree from the part of `arena` reachable from `root`, dropping the rest.
    pub(crate) fn from_arena(arena: &Arena, root: NodeId) -> Self {
        let mut compact = Arena::new();
        let root = compact.copy(arena.get(root));
        Self {
            arena: compact,
            root,
        }
    }

    /// Returns the root of the tree.
    #[inline(always)]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Makes `node` the root of the tree, detaching it from its parent if necessary.
    pub fn set_root(&mut self, node: NodeId) {
        self.arena.detach(node);
        self.root = node;
    }

    /// Returns a view of the root node.
    pub fn view(&self) -> NodeRef {
        self.get(self.root)
    }

    /// Returns a view of `node`.
    pub fn get(&self, node: NodeId) -> NodeRef {
        self.arena.get(node)
    }

    /// Allocates a new detached node labeled `value` with no children.
    pub fn add_node<S: Into<String>>(&mut self, value: S) -> NodeId {
        self.arena.alloc(value, Vec::new())
    }

    /// Allocates a new detached node labeled `value` over `children`. Children that are attached
    /// elsewhere are moved.
    ///
    /// **Note**: fails with [`Error::DuplicateChild`] if a node appears twice in `children`.
    ///
    /// [`Error::DuplicateChild`]: crate::syntax::Error::DuplicateChild
    pub fn add_parent<S: Into<String>>(
        &mut self,
        value: S,
        children: Vec<NodeId>,
    ) -> Result<NodeId, Error> {
        Arena::check_distinct(&children)?;
        Ok(self.arena.alloc(value, children))
    }

    /// Appends `child` to the children of `parent`, moving it out of its current parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        self.arena.push_child(parent, child)
    }

    /// Puts `child` in position `slot` of `parent`. The node previously in that slot is left
    /// detached, unless `child` is another child of `parent`, in which case the two trade places.
    pub fn set_child(&mut self, parent: NodeId, slot: usize, child: NodeId) -> Result<(), Error> {
        self.arena.set_child(parent, slot, child)
    }

    /// Replaces `old`, together with its subtree, by `new` in the position `old` occupies.
    /// Replacing the root makes `new` the root. A sibling of `old` trades places with it.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> Result<(), Error> {
        if old == self.root {
            self.set_root(new);
            return Ok(());
        }
        let parent = self[old]
            .parent()
            .ok_or(Error::DetachedNode { node: old })?;
        let slot = self[parent]
            .children()
            .iter()
            .position(|&c| c == old)
            .ok_or(Error::DetachedNode { node: old })?;
        self.arena.set_child(parent, slot, new)
    }

    /// Allocates an equation `=(left,right)`.
    pub fn equals(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, Error> {
        self.add_parent(EQUALS, vec![left, right])
    }

    /// Allocates a negation `!(formula)`.
    pub fn not(&mut self, formula: NodeId) -> NodeId {
        self.arena.alloc(NOT, vec![formula])
    }

    /// Allocates a conjunction `&(left,right)`.
    pub fn and(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, Error> {
        self.add_parent(AND, vec![left, right])
    }

    /// Allocates a disjunction `|(left,right)`.
    pub fn or(&mut self, left: NodeId, right: NodeId) -> Result<NodeId, Error> {
        self.add_parent(OR, vec![left, right])
    }

    /// Allocates an implication `>(premise,consequence)`.
    pub fn implies(&mut self, premise: NodeId, consequence: NodeId) -> Result<NodeId, Error> {
        self.add_parent(IMPLIES, vec![premise, consequence])
    }

    /// Allocates `@variable(formula)`.
    pub fn forall(&mut self, variable: &str, formula: NodeId) -> NodeId {
        self.quantify(Quantifier::Forall, variable, formula)
    }

    /// Allocates `#variable(formula)`.
    pub fn exists(&mut self, variable: &str, formula: NodeId) -> NodeId {
        self.quantify(Quantifier::Exists, variable, formula)
    }

    /// Allocates a node quantifying `variable` in `formula` with `quantifier`.
    pub fn quantify(&mut self, quantifier: Quantifier, variable: &str, formula: NodeId) -> NodeId {
        self.arena.alloc(quantifier.label(variable), vec![formula])
    }

    /// Copies `other` into the receiver and returns the (detached) copy of its root.
    pub fn graft(&mut self, other: &ExpressionTree) -> NodeId {
        self.arena.copy(other.view())
    }

    /// Returns a new tree holding a copy of the subtree rooted at `node`.
    pub fn subtree(&self, node: NodeId) -> ExpressionTree {
        Self::from_arena(&self.arena, node)
    }
}

impl Index<NodeId> for ExpressionTree {
    type Output = Node;

    fn index(&self, index: NodeId) -> &Self::Output {
        self.arena.node(index)
    }
}

impl PartialEq for ExpressionTree {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl Eq for ExpressionTree {}

/// Is a read-only view of a node together with the tree it belongs to.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    nodes: &'t Arena,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    /// Returns the handle of the node.
    #[inline(always)]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline(always)]
    fn node(&self) -> &'t Node {
        self.nodes.node(self.id)
    }

    #[inline(always)]
    fn at(&self, id: NodeId) -> NodeRef<'t> {
        NodeRef {
            nodes: self.nodes,
            id,
        }
    }

    /// Returns the label of the node.
    pub fn value(&self) -> &'t str {
        self.node().value()
    }

    /// Returns the number of children.
    pub fn arity(&self) -> usize {
        self.node().arity()
    }

    /// Classifies the label of the node.
    pub fn symbol(&self) -> Symbol<'t> {
        Symbol::classify(self.value(), self.arity())
    }

    /// Returns the children of the node in order.
    pub fn children(
        &self,
    ) -> impl DoubleEndedIterator<Item = NodeRef<'t>> + ExactSizeIterator + 't {
        let this = *self;
        this.node().children().iter().map(move |&id| this.at(id))
    }

    /// Returns the child at position `slot`.
    pub fn child_at(&self, slot: usize) -> Option<NodeRef<'t>> {
        self.node().children().get(slot).map(|&id| self.at(id))
    }

    /// Returns the only child of a negation or a quantifier.
    pub fn child(&self) -> Option<NodeRef<'t>> {
        self.child_at(0)
    }

    /// Returns the left child of a binary connective.
    pub fn left(&self) -> Option<NodeRef<'t>> {
        self.child_at(0)
    }

    /// Returns the right child of a binary connective.
    pub fn right(&self) -> Option<NodeRef<'t>> {
        self.child_at(1)
    }

    /// Returns the parent of the node, if any.
    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.node().parent().map(|id| self.at(id))
    }
}

// Structural equality: same labels, same children in the same order.
impl<'a, 'b> PartialEq<NodeRef<'b>> for NodeRef<'a> {
    fn eq(&self, other: &NodeRef<'b>) -> bool {
        let mut pending = vec![(*self, *other)];
        while let Some((left, right)) = pending.pop() {
            if left.value() != right.value() || left.arity() != right.arity() {
                return false;
            }
            pending.extend(left.children().zip(right.children()));
        }
        true
    }
}
