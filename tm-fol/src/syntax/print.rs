/*! Implements the textual renderings of [`ExpressionTree`].

The prefix notation, `Label(Child,...)`, is the `Display` (and `Debug`) form of a tree and is
the only rendering that [`parse_prefix`] reads back. The standard, postfix and indented tree
renderings are for output only.

[`ExpressionTree`]: crate::syntax::ExpressionTree
[`parse_prefix`]: crate::parser::parse_prefix
*/
use super::{symbol::Connective, tree::NodeRef, ExpressionTree, Symbol};
use std::fmt;

const INDENT: &str = "    ";

// Is a piece of output: literal text or a node still to be expanded.
enum Piece<'t> {
    Text(&'t str),
    Node(NodeRef<'t>),
}

// Writes `root` by repeatedly expanding nodes into pieces with `expand`. The pending pieces live
// on an explicit stack, so deep trees do not exhaust the call stack.
fn render<'t>(
    f: &mut fmt::Formatter,
    root: NodeRef<'t>,
    expand: fn(NodeRef<'t>, &mut Vec<Piece<'t>>),
) -> fmt::Result {
    let mut stack = vec![Piece::Node(root)];
    let mut pieces = Vec::new();
    while let Some(piece) = stack.pop() {
        match piece {
            Piece::Text(text) => f.write_str(text)?,
            Piece::Node(node) => {
                expand(node, &mut pieces);
                stack.extend(pieces.drain(..).rev());
            }
        }
    }
    Ok(())
}

fn children<'t>(node: NodeRef<'t>, separator: &'static str, out: &mut Vec<Piece<'t>>) {
    out.push(Piece::Text("("));
    for (i, child) in node.children().enumerate() {
        if i > 0 {
            out.push(Piece::Text(separator));
        }
        out.push(Piece::Node(child));
    }
    out.push(Piece::Text(")"));
}

fn prefix<'t>(node: NodeRef<'t>, out: &mut Vec<Piece<'t>>) {
    out.push(Piece::Text(node.value()));
    if node.arity() > 0 {
        children(node, ",", out);
    }
}

fn standard<'t>(node: NodeRef<'t>, out: &mut Vec<Piece<'t>>) {
    let infix = match node.symbol() {
        Symbol::Connective(Connective::Not) => false,
        Symbol::Connective(_) => node.arity() == 2,
        _ => false,
    };
    if let (true, Some(left), Some(right)) = (infix, node.left(), node.right()) {
        out.extend(vec![
            Piece::Text("("),
            Piece::Node(left),
            Piece::Text(" "),
            Piece::Text(node.value()),
            Piece::Text(" "),
            Piece::Node(right),
            Piece::Text(")"),
        ]);
    } else {
        out.push(Piece::Text(node.value()));
        if node.arity() > 0 {
            children(node, ", ", out);
        }
    }
}

fn postfix<'t>(node: NodeRef<'t>, out: &mut Vec<Piece<'t>>) {
    if node.arity() > 0 {
        children(node, ", ", out);
    }
    out.push(Piece::Text(node.value()));
}

fn write_dump(f: &mut fmt::Formatter, root: NodeRef) -> fmt::Result {
    let mut stack = vec![(root, 0)];
    while let Some((node, depth)) = stack.pop() {
        writeln!(f, "{}{}", INDENT.repeat(depth), node.value())?;
        stack.extend(node.children().rev().map(|child| (child, depth + 1)));
    }
    Ok(())
}

impl<'t> fmt::Display for NodeRef<'t> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(f, *self, prefix)
    }
}

impl<'t> fmt::Debug for NodeRef<'t> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(f, *self, prefix)
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(f, self.view(), prefix)
    }
}

impl fmt::Debug for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(f, self.view(), prefix)
    }
}

/// Renders a tree in standard notation: binary connectives are written infix as
/// `(Left OP Right)` and every other node as `Label(Child, ...)`.
#[derive(Clone, Copy)]
pub struct Standard<'t>(NodeRef<'t>);

impl<'t> fmt::Display for Standard<'t> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(f, self.0, standard)
    }
}

/// Renders a tree in postfix notation: `(Child, ...)Label`.
#[derive(Clone, Copy)]
pub struct Postfix<'t>(NodeRef<'t>);

impl<'t> fmt::Display for Postfix<'t> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(f, self.0, postfix)
    }
}

/// Renders a tree one node per line, indented four spaces per level of depth.
#[derive(Clone, Copy)]
pub struct Dump<'t>(NodeRef<'t>);

impl<'t> fmt::Display for Dump<'t> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_dump(f, self.0)
    }
}

impl<'t> NodeRef<'t> {
    /// Returns a displayable standard (infix) rendering of the subtree at the receiver.
    pub fn standard(self) -> Standard<'t> {
        Standard(self)
    }

    /// Returns a displayable postfix rendering of the subtree at the receiver.
    pub fn postfix(self) -> Postfix<'t> {
        Postfix(self)
    }

    /// Returns a displayable indented dump of the subtree at the receiver.
    pub fn dump(self) -> Dump<'t> {
        Dump(self)
    }
}

impl ExpressionTree {
    /// Returns a displayable standard (infix) rendering of the tree.
    ///
    /// **Example**:
    /// ```rust
    /// use tm_fol::parser::parse_prefix;
    ///
    /// let tree = parse_prefix("@x(>(&(P(x),!(=(x,0))),Q(s(x),x)))");
    /// assert_eq!("@x(((P(x) & !((x = 0))) > Q(s(x), x)))", tree.standard().to_string());
    /// ```
    pub fn standard(&self) -> Standard {
        self.view().standard()
    }

    /// Returns a displayable postfix rendering of the tree.
    ///
    /// **Example**:
    /// ```rust
    /// use tm_fol::parser::parse_prefix;
    ///
    /// let tree = parse_prefix("&(P(x),!(Q))");
    /// assert_eq!("((x)P, (Q)!)&", tree.postfix().to_string());
    /// ```
    pub fn postfix(&self) -> Postfix {
        self.view().postfix()
    }

    /// Returns a displayable indented dump of the tree.
    pub fn dump(&self) -> Dump {
        self.view().dump()
    }
}
