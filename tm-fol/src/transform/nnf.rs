/*! Implements the transformation of an [`ExpressionTree`] into Negation Normal Form (NNF).

[`ExpressionTree`]: crate::syntax::ExpressionTree
*/
use crate::syntax::{
    Arena, Connective, ExpressionTree, NodeId, NodeRef, Quantifier, Symbol, AND, NOT, OR,
};

/// Is the trait of formulae that can be transformed to Negation Normal Form.
///
/// **Hint**: in NNF, implications are eliminated and negation is applied only to atomic
/// formulae, including equations.
pub trait ToNnf {
    /// Returns a new tree in Negation Normal Form, leaving the receiver untouched.
    ///
    /// A node is rewritten only if it has the arity its connective or quantifier expects; any
    /// other node keeps its label and gets its children transformed.
    ///
    /// **Example**:
    /// ```rust
    /// use tm_fol::{parser::parse_prefix, transform::ToNnf};
    ///
    /// let formula = parse_prefix("!(@x(>(P(x),#y(!(Q(x,y))))))");
    /// assert_eq!("#x(&(P(x),@y(Q(x,y))))", formula.nnf().to_string());
    /// ```
    fn nnf(&self) -> ExpressionTree;
}

impl ToNnf for ExpressionTree {
    fn nnf(&self) -> ExpressionTree {
        self.view().nnf()
    }
}

impl<'t> ToNnf for NodeRef<'t> {
    fn nnf(&self) -> ExpressionTree {
        let mut rewriter = Rewriter {
            arena: Arena::new(),
            tasks: vec![Task::Visit(*self, false)],
            done: Vec::new(),
        };
        let root = rewriter.run();
        ExpressionTree::from_arena(&rewriter.arena, root)
    }
}

enum Task<'t> {
    // Rewrites a node, or its negation if the flag is set.
    Visit(NodeRef<'t>, bool),
    // Allocates a node over the last `arity` rewritten nodes.
    Build(&'t str, usize),
    // Allocates a node with a label that is not in the source tree.
    BuildOwned(String, usize),
}

// Builds the NNF of a tree top-down, carrying whether the node at hand sits under an odd number of
// negations. Pending work lives on `tasks` and finished nodes on `done`, so the rewrite does not
// recurse.
struct Rewriter<'t> {
    arena: Arena,
    tasks: Vec<Task<'t>>,
    done: Vec<NodeId>,
}

impl<'t> Rewriter<'t> {
    fn run(&mut self) -> NodeId {
        while let Some(task) = self.tasks.pop() {
            match task {
                Task::Visit(node, negated) => self.visit(node, negated),
                Task::Build(label, arity) => self.build(label, arity),
                Task::BuildOwned(label, arity) => self.build(label, arity),
            }
        }
        match self.done.pop() {
            Some(root) => root,
            None => self.arena.alloc("", Vec::new()),
        }
    }

    fn build<S: Into<String>>(&mut self, label: S, arity: usize) {
        let children = self.done.split_off(self.done.len() - arity);
        let node = self.arena.alloc(label, children);
        self.done.push(node);
    }

    // Schedules `build` to run over the rewritten `children`, each negated or not. Tasks run
    // last-in first-out, so the children are pushed in reverse.
    fn schedule(&mut self, build: Task<'t>, children: Vec<(NodeRef<'t>, bool)>) {
        self.tasks.push(build);
        self.tasks.extend(
            children
                .into_iter()
                .rev()
                .map(|(child, negated)| Task::Visit(child, negated)),
        );
    }

    fn visit(&mut self, node: NodeRef<'t>, negated: bool) {
        let children: Vec<NodeRef<'t>> = node.children().collect();
        match (node.symbol(), children.as_slice(), negated) {
            (Symbol::Connective(Connective::Not), &[inner], _) => {
                if negated {
                    fired("double-negation", node);
                }
                self.tasks.push(Task::Visit(inner, !negated));
            }
            (Symbol::Connective(Connective::Implies), &[premise, consequence], false) => {
                fired("implication", node);
                self.schedule(Task::Build(OR, 2), vec![(premise, true), (consequence, false)]);
            }
            (Symbol::Connective(Connective::Implies), &[premise, consequence], true) => {
                fired("negated-implication", node);
                self.schedule(Task::Build(AND, 2), vec![(premise, false), (consequence, true)]);
            }
            (Symbol::Connective(Connective::Or), &[left, right], true) => {
                fired("negated-disjunction", node);
                self.schedule(Task::Build(AND, 2), vec![(left, true), (right, true)]);
            }
            (Symbol::Connective(Connective::And), &[left, right], true) => {
                fired("negated-conjunction", node);
                self.schedule(Task::Build(OR, 2), vec![(left, true), (right, true)]);
            }
            (Symbol::Quantifier(quantifier, variable), &[body], true) => {
                let rule = match quantifier {
                    Quantifier::Forall => "negated-forall",
                    Quantifier::Exists => "negated-exists",
                };
                fired(rule, node);
                let label = quantifier.dual().label(variable);
                self.schedule(Task::BuildOwned(label, 1), vec![(body, true)]);
            }
            _ => {
                // a literal, or a node left as is with its children rewritten
                if negated {
                    self.tasks.push(Task::Build(NOT, 1));
                }
                self.schedule(
                    Task::Build(node.value(), children.len()),
                    children.iter().map(|&child| (child, false)).collect(),
                );
            }
        }
    }
}

fn fired(rule: &str, node: NodeRef) {
    trace!(event = crate::trace::REWRITE, rule = rule, formula = %node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_rewrite, parser::parse_prefix};

    fn nnf(tree: &ExpressionTree) -> ExpressionTree {
        tree.nnf()
    }

    #[test]
    fn test_atoms() {
        assert_rewrite!("P", "P", nnf);
        assert_rewrite!("P(x,f(y))", "P(x,f(y))", nnf);
        assert_rewrite!("=(x,0)", "=(x,0)", nnf);
        assert_rewrite!("!(P)", "!(P)", nnf);
        assert_rewrite!("!(=(x,y))", "!(=(x,y))", nnf);
        assert_rewrite!("x", "x", nnf);
    }

    #[test]
    fn test_implication() {
        assert_rewrite!("|(!(P),Q)", ">(P,Q)", nnf);
        assert_rewrite!("|(&(P,!(Q)),R)", ">(>(P,Q),R)", nnf);
        assert_rewrite!("|(P,Q)", ">(!(P),Q)", nnf);
        assert_rewrite!(
            "@x(|(!(P(x)),#y(Q(x,y))))",
            "@x(>(P(x),#y(Q(x,y))))",
            nnf
        );
    }

    #[test]
    fn test_double_negation() {
        assert_rewrite!("P", "!(!(P))", nnf);
        assert_rewrite!("!(P)", "!(!(!(P)))", nnf);
        assert_rewrite!("P(x)", "!(!(!(!(P(x)))))", nnf);
    }

    #[test]
    fn test_de_morgan() {
        assert_rewrite!("|(!(P),!(Q))", "!(&(P,Q))", nnf);
        assert_rewrite!("&(!(P),!(Q))", "!(|(P,Q))", nnf);
        assert_rewrite!("&(!(P),Q)", "!(|(P,!(Q)))", nnf);
        assert_rewrite!("&(P,!(Q))", "!(>(P,Q))", nnf);
        assert_rewrite!("|(&(!(P),!(Q)),!(R))", "!(&(|(P,Q),R))", nnf);
    }

    #[test]
    fn test_quantifiers() {
        assert_rewrite!("#x(!(P(x)))", "!(@x(P(x)))", nnf);
        assert_rewrite!("@x(!(P(x)))", "!(#x(P(x)))", nnf);
        assert_rewrite!(
            "#x(#y(&(P(x),!(Q(y)))))",
            "!(@x(!(#y(&(P(x),!(Q(y)))))))",
            nnf
        );
        assert_rewrite!(
            "#x(@y(&(=(x,y),!(R(x,y)))))",
            "!(@x(#y(>(=(x,y),R(x,y)))))",
            nnf
        );
    }

    #[test]
    fn test_unexpected_arity_passes_through() {
        assert_rewrite!(">(P)", ">(P)", nnf);
        assert_rewrite!("!(P,Q)", "!(P,Q)", nnf);
        assert_rewrite!("!(&(P))", "!(&(P))", nnf);
        assert_rewrite!("!(@x(P,Q))", "!(@x(P,Q))", nnf);
        assert_rewrite!("!(P,|(!(Q),R))", "!(P,>(Q,R))", nnf);
    }

    #[test]
    fn test_input_untouched() {
        let tree = parse_prefix("!(>(P,!(!(Q))))");
        let result = tree.nnf();
        assert_eq!("&(P,!(Q))", result.to_string());
        assert_eq!("!(>(P,!(!(Q))))", tree.to_string());
    }

    #[test]
    fn test_subtree() {
        let tree = parse_prefix("&(!(>(P,Q)),R)");
        let left = tree.view().left().unwrap();
        assert_eq!("&(P,!(Q))", left.nnf().to_string());
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 10_000;
        let tree = parse_prefix(&format!(
            "{}P{}",
            "!(&(Q,".repeat(depth),
            "))".repeat(depth)
        ));
        // odd levels become disjunctions and even levels stay conjunctions
        let pairs = depth / 2;
        let expected = format!("{}P{}", "|(!(Q),&(Q,".repeat(pairs), "))".repeat(pairs));
        assert_eq!(expected, tree.nnf().to_string());
    }

    #[test]
    fn test_idempotent() {
        let once = parse_prefix("!(@x(>(&(P(x),!(Q)),#y(|(R(x,y),!(=(x,y)))))))").nnf();
        assert_eq!(once, once.nnf());
    }
}
