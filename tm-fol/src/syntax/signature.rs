/*! Defines a [`Sig`] to represent the non-logical symbols and the variables of a formula.

[`Sig`]: crate::syntax::Sig
*/
use super::{tree::NodeRef, ExpressionTree, Symbol};
use itertools::Itertools;
use std::{collections::HashSet, fmt};

/// Is the signature of a formula, together with its variables.
///
/// Symbols are kept by their exact label, so `x` and `x[1]` are different variables.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Sig {
    /// Is the variables in a formula.
    variables: HashSet<String>,

    /// Is the function symbols in a formula.
    functions: HashSet<String>,

    /// Is the constant symbols in a formula.
    constants: HashSet<String>,

    /// Is the predicate symbols in a formula.
    predicates: HashSet<String>,
}

impl Sig {
    /// Creates an empty signature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the label of `node` in the set matching its classification.
    ///
    /// **Note**: connectives, quantifiers and labels of unknown shape are not recorded.
    pub fn add(&mut self, node: NodeRef) {
        match node.symbol() {
            Symbol::Variable(v) => {
                self.variables.insert(v.to_owned());
            }
            Symbol::Function(f) => {
                self.functions.insert(f.to_owned());
            }
            Symbol::Constant(c) => {
                self.constants.insert(c.to_owned());
            }
            Symbol::Predicate(p) => {
                self.predicates.insert(p.to_owned());
            }
            Symbol::Connective(_) | Symbol::Quantifier(..) | Symbol::Unknown(_) => {}
        }
    }

    /// Returns a signature that combines the receiver with `other`.
    pub fn merge(mut self, other: Self) -> Self {
        self.variables.extend(other.variables);
        self.functions.extend(other.functions);
        self.constants.extend(other.constants);
        self.predicates.extend(other.predicates);
        self
    }

    /// Returns the variables of this signature.
    pub fn variables(&self) -> &HashSet<String> {
        &self.variables
    }

    /// Returns the function symbols of this signature.
    pub fn functions(&self) -> &HashSet<String> {
        &self.functions
    }

    /// Returns the constants of this signature.
    pub fn constants(&self) -> &HashSet<String> {
        &self.constants
    }

    /// Returns the predicates of this signature.
    pub fn predicates(&self) -> &HashSet<String> {
        &self.predicates
    }
}

impl fmt::Display for Sig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let show = |set: &HashSet<String>| set.iter().sorted().into_iter().join(", ");
        writeln!(f, "variables: {{{}}}", show(&self.variables))?;
        writeln!(f, "functions: {{{}}}", show(&self.functions))?;
        writeln!(f, "constants: {{{}}}", show(&self.constants))?;
        write!(f, "predicates: {{{}}}", show(&self.predicates))
    }
}

impl<'t> NodeRef<'t> {
    /// Returns the signature of the subtree at the receiver.
    pub fn signature(self) -> Sig {
        let mut sig = Sig::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            sig.add(node);
            stack.extend(node.children());
        }
        sig
    }
}

impl ExpressionTree {
    /// Returns the signature of the tree.
    ///
    /// **Example**:
    /// ```rust
    /// use tm_fol::parser::parse_prefix;
    ///
    /// let tree = parse_prefix("@x(>(Q[1](x,t[0]),=(s(x),0)))");
    /// let sig = tree.signature();
    ///
    /// assert!(sig.variables().contains("x"));
    /// assert!(sig.variables().contains("t[0]"));
    /// assert!(sig.functions().contains("s"));
    /// assert!(sig.constants().contains("0"));
    /// assert!(sig.predicates().contains("Q[1]"));
    /// ```
    pub fn signature(&self) -> Sig {
        self.view().signature()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq_sorted_vecs, parser::parse_prefix};

    fn sorted(set: &HashSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_sig_from_tree() {
        {
            let sig = parse_prefix("P").signature();
            assert!(sig.variables().is_empty());
            assert_eq_sorted_vecs!(vec!["P"], sorted(sig.predicates()));
        }
        {
            let sig = parse_prefix("=(x,0)").signature();
            assert_eq_sorted_vecs!(vec!["x"], sorted(sig.variables()));
            assert_eq_sorted_vecs!(vec!["0"], sorted(sig.constants()));
            assert!(sig.predicates().is_empty());
        }
        {
            let sig = parse_prefix("&(P(x,f(y,0)),#z(!(Q(z,x))))").signature();
            assert_eq_sorted_vecs!(vec!["x", "y", "z"], sorted(sig.variables()));
            assert_eq_sorted_vecs!(vec!["f"], sorted(sig.functions()));
            assert_eq_sorted_vecs!(vec!["0"], sorted(sig.constants()));
            assert_eq_sorted_vecs!(vec!["P", "Q"], sorted(sig.predicates()));
        }
    }

    #[test]
    fn test_arity_decides_function() {
        // the same label is a variable as a leaf and a function when applied
        let sig = parse_prefix("P(s,s(s))").signature();
        assert_eq_sorted_vecs!(vec!["s"], sorted(sig.variables()));
        assert_eq_sorted_vecs!(vec!["s"], sorted(sig.functions()));
    }

    #[test]
    fn test_indexed_families() {
        let sig = parse_prefix("&(Q[0](t[1]),S[12](t[1],c[3](0)))").signature();
        assert_eq_sorted_vecs!(vec!["t[1]"], sorted(sig.variables()));
        assert_eq_sorted_vecs!(vec!["c[3]"], sorted(sig.functions()));
        assert_eq_sorted_vecs!(vec!["Q[0]", "S[12]"], sorted(sig.predicates()));
    }

    #[test]
    fn test_unknown_labels_ignored() {
        let sig = parse_prefix("Px(x1,_,0a)").signature();
        assert_eq!(Sig::new(), sig);
    }

    #[test]
    fn test_merge() {
        let first = parse_prefix("P(x)").signature();
        let second = parse_prefix("Q(f(x),1)").signature();
        let sig = first.merge(second);
        assert_eq_sorted_vecs!(vec!["x"], sorted(sig.variables()));
        assert_eq_sorted_vecs!(vec!["f"], sorted(sig.functions()));
        assert_eq_sorted_vecs!(vec!["1"], sorted(sig.constants()));
        assert_eq_sorted_vecs!(vec!["P", "Q"], sorted(sig.predicates()));
    }

    #[test]
    fn test_display() {
        let sig = parse_prefix("&(P(y,x),Q(f(0)))").signature();
        assert_eq!(
            "variables: {x, y}\nfunctions: {f}\nconstants: {0}\npredicates: {P, Q}",
            sig.to_string()
        );
    }
}
