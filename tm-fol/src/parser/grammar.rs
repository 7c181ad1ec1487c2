/*! Implements a backtracking recursive-descent parser that decides whether a token sequence is a
well-formed formula, a well-formed term or neither.

Formulae:
```text
formula  ::= ("@" | "#") bound "(" formula ")"
           | "!" "(" formula ")"
           | ("&" | "|" | ">" | "=") "(" either "," either ")"
           | "(" formula ")"
           | predicate [ args ]
term     ::= numeral | function [ args ]
either   ::= formula | term
args     ::= "(" [ either { "," either } ] ")"
```
where `bound` is a single lowercase letter, `predicate` matches `[A-Z][A-Z0-9]*` and `function`
matches `[a-z][a-z0-9]*`.

Every production takes the position of its first token and, on success, returns the position
after its last token together with the node it built. A failed production rolls back the nodes it
allocated so the alternatives tried after it start from a clean arena. Formulae and terms nested
deeper than [`MAX_DEPTH`] fail to parse.

[`MAX_DEPTH`]: crate::syntax::MAX_DEPTH
*/
use super::{tokenize, Error, Token};
use crate::syntax::{Arena, ExpressionTree, NodeId, Quantifier, EXISTS, FORALL, MAX_DEPTH, NOT};
use std::{fmt, str::FromStr};

/// Is the kind of expression a string was classified as.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ExpressionType {
    Formula,
    Term,
    None,
}

impl fmt::Display for ExpressionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Formula => "Formula",
            Self::Term => "Term",
            Self::None => "None",
        };
        write!(f, "{}", name)
    }
}

/// Is the outcome of classifying a string, carrying the tree of a well-formed expression.
#[derive(Clone, PartialEq, Debug)]
pub enum Classification {
    /// Is a well-formed formula.
    Formula(ExpressionTree),

    /// Is a well-formed term.
    Term(ExpressionTree),

    /// Is neither a formula nor a term.
    None,
}

impl Classification {
    /// Returns the kind of expression without the tree.
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            Self::Formula(_) => ExpressionType::Formula,
            Self::Term(_) => ExpressionType::Term,
            Self::None => ExpressionType::None,
        }
    }

    /// Returns the tree of a well-formed expression.
    pub fn tree(&self) -> Option<&ExpressionTree> {
        match self {
            Self::Formula(tree) | Self::Term(tree) => Some(tree),
            Self::None => None,
        }
    }

    /// Consumes the receiver and returns the tree of a well-formed expression.
    pub fn into_tree(self) -> Option<ExpressionTree> {
        match self {
            Self::Formula(tree) | Self::Term(tree) => Some(tree),
            Self::None => None,
        }
    }
}

/// Classifies `input` as a formula, a term or neither.
///
/// The whole input is first tried as a formula and, failing that, as a term. An input that does
/// not tokenize, has no tokens or nests deeper than [`MAX_DEPTH`] is neither.
///
/// [`MAX_DEPTH`]: crate::syntax::MAX_DEPTH
///
/// **Example**:
/// ```rust
/// use tm_fol::parser::{classify, Classification};
///
/// let formula = classify("@x(P(x))");
/// assert_eq!("@x(P(x))", formula.tree().unwrap().to_string());
///
/// assert!(matches!(classify("f(x,y)"), Classification::Term(_)));
/// assert_eq!(Classification::None, classify("@x(P(x)"));
/// ```
pub fn classify(input: &str) -> Classification {
    let result = match tokenize(input) {
        Ok(tokens) => classify_tokens(&tokens),
        Err(_) => Classification::None,
    };
    debug!(
        event = crate::trace::CLASSIFY,
        input = input,
        outcome = %result.expression_type(),
    );
    result
}

/// Returns the kind of expression `input` is; its `Display` is `Formula`, `Term` or `None`.
///
/// **Example**:
/// ```rust
/// use tm_fol::parser::well_formed_expression_type;
///
/// assert_eq!("Formula", well_formed_expression_type("&(P, Q(x))").to_string());
/// assert_eq!("Term", well_formed_expression_type("s(s(0))").to_string());
/// assert_eq!("None", well_formed_expression_type("Q[1](x)").to_string());
/// ```
pub fn well_formed_expression_type(input: &str) -> ExpressionType {
    classify(input).expression_type()
}

pub(crate) fn classify_tokens(tokens: &[Token]) -> Classification {
    if tokens.is_empty() {
        return Classification::None;
    }

    let mut grammar = Grammar::new(tokens);
    if let Some(tree) = grammar.complete(Grammar::formula) {
        return Classification::Formula(tree);
    }
    let mut grammar = Grammar::new(tokens);
    if let Some(tree) = grammar.complete(Grammar::term) {
        return Classification::Term(tree);
    }
    Classification::None
}

impl FromStr for ExpressionTree {
    type Err = Error;

    /// Parses a well-formed formula or term.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s)?;
        classify_tokens(&tokens)
            .into_tree()
            .ok_or_else(|| Error::IllFormed { input: s.to_owned() })
    }
}

type Parsed = Option<(usize, NodeId)>;

struct Grammar<'t> {
    tokens: &'t [Token],
    arena: Arena,
    depth: usize,
}

impl<'t> Grammar<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            arena: Arena::new(),
            depth: 0,
        }
    }

    // Runs `production` from the first token and accepts it only if it consumes every token.
    fn complete(&mut self, production: fn(&mut Self, usize) -> Parsed) -> Option<ExpressionTree> {
        match production(self, 0) {
            Some((end, root)) if end == self.tokens.len() => {
                Some(ExpressionTree::from_arena(&self.arena, root))
            }
            _ => None,
        }
    }

    fn formula(&mut self, at: usize) -> Parsed {
        self.nested(at, Self::formula_at)
    }

    fn term(&mut self, at: usize) -> Parsed {
        self.nested(at, Self::term_at)
    }

    // Runs `production` one level deeper than the caller and rolls back its nodes if it fails.
    fn nested(&mut self, at: usize, production: fn(&mut Self, usize) -> Parsed) -> Parsed {
        if self.depth == MAX_DEPTH {
            return None;
        }
        self.depth += 1;
        let mark = self.arena.len();
        let result = production(self, at);
        if result.is_none() {
            self.arena.truncate(mark);
        }
        self.depth -= 1;
        result
    }

    fn formula_or_term(&mut self, at: usize) -> Parsed {
        self.formula(at).or_else(|| self.term(at))
    }

    fn formula_at(&mut self, at: usize) -> Parsed {
        let tokens = self.tokens;
        match tokens.get(at)? {
            Token::Symbol(c @ FORALL) | Token::Symbol(c @ EXISTS) => {
                let quantifier = if *c == FORALL {
                    Quantifier::Forall
                } else {
                    Quantifier::Exists
                };
                let variable = match tokens.get(at + 1)? {
                    Token::Identifier(v) if is_bound_name(v) => v,
                    _ => return None,
                };
                let (next, body) = self.enclosed(at + 2, Self::formula)?;
                let node = self.arena.alloc(quantifier.label(variable), vec![body]);
                Some((next, node))
            }
            Token::Symbol('!') => {
                let (next, body) = self.enclosed(at + 1, Self::formula)?;
                Some((next, self.arena.alloc(NOT, vec![body])))
            }
            Token::Symbol(c @ '&') | Token::Symbol(c @ '|') | Token::Symbol(c @ '>')
            | Token::Symbol(c @ '=') => {
                let next = self.expect(at + 1, '(')?;
                let (next, left) = self.formula_or_term(next)?;
                let next = self.expect(next, ',')?;
                let (next, right) = self.formula_or_term(next)?;
                let next = self.expect(next, ')')?;
                Some((next, self.arena.alloc(c.to_string(), vec![left, right])))
            }
            Token::Symbol('(') => self.enclosed(at, Self::formula),
            Token::Identifier(name) if is_predicate_name(name) => self.application(at + 1, name),
            _ => None,
        }
    }

    fn term_at(&mut self, at: usize) -> Parsed {
        let tokens = self.tokens;
        match tokens.get(at)? {
            Token::Numeral(n) => Some((at + 1, self.arena.alloc(n.as_str(), Vec::new()))),
            Token::Identifier(name) if is_function_name(name) => self.application(at + 1, name),
            _ => None,
        }
    }

    // `name` followed by an optional argument list starting at `at`.
    fn application(&mut self, at: usize, name: &str) -> Parsed {
        let (next, args) = match self.expect(at, '(') {
            Some(_) => self.args(at)?,
            None => (at, Vec::new()),
        };
        Some((next, self.arena.alloc(name, args)))
    }

    fn args(&mut self, at: usize) -> Option<(usize, Vec<NodeId>)> {
        let mut next = self.expect(at, '(')?;
        let mut args = Vec::new();
        if let Some(end) = self.expect(next, ')') {
            return Some((end, args));
        }
        loop {
            let (after, arg) = self.formula_or_term(next)?;
            args.push(arg);
            if let Some(after) = self.expect(after, ',') {
                next = after;
            } else {
                return self.expect(after, ')').map(|end| (end, args));
            }
        }
    }

    // `( production )` starting at `at`.
    fn enclosed(&mut self, at: usize, production: fn(&mut Self, usize) -> Parsed) -> Parsed {
        let next = self.expect(at, '(')?;
        let (next, node) = production(self, next)?;
        let next = self.expect(next, ')')?;
        Some((next, node))
    }

    fn expect(&self, at: usize, symbol: char) -> Option<usize> {
        self.tokens
            .get(at)
            .filter(|token| token.is_symbol(symbol))
            .map(|_| at + 1)
    }
}

// A bound variable is a single lowercase letter.
fn is_bound_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

fn is_predicate_name(name: &str) -> bool {
    is_name(name, |c| c.is_ascii_uppercase())
}

fn is_function_name(name: &str) -> bool {
    is_name(name, |c| c.is_ascii_lowercase())
}

fn is_name(name: &str, head: impl Fn(char) -> bool) -> bool {
    let mut chars = name.chars();
    chars.next().map_or(false, &head) && chars.all(|c| head(c) || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_debug_string;

    fn kind(input: &str) -> String {
        well_formed_expression_type(input).to_string()
    }

    #[test]
    fn test_formulae() {
        assert_eq!("Formula", kind("P"));
        assert_eq!("Formula", kind("P()"));
        assert_eq!("Formula", kind("@x(P(x))"));
        assert_eq!("Formula", kind("#y(!(Q(y,0)))"));
        assert_eq!("Formula", kind("&(P,|(Q,R))"));
        assert_eq!("Formula", kind(">(P(x),=(f(x),1))"));
        assert_eq!("Formula", kind("=(x,y)"));
        assert_eq!("Formula", kind("(P(x))"));
        assert_eq!("Formula", kind("((P))"));
        assert_eq!("Formula", kind("PQ1(x, s(0), R)"));
        assert_eq!("Formula", kind(" @x ( & ( P ( x ) , Q ) ) "));
        // either side of a binary connective may be a term
        assert_eq!("Formula", kind("&(x,0)"));
        assert_eq!("Formula", kind("=(P,Q)"));
        // arguments may be formulae
        assert_eq!("Formula", kind("P(Q(x),!(R))"));
    }

    #[test]
    fn test_terms() {
        assert_eq!("Term", kind("x"));
        assert_eq!("Term", kind("0"));
        assert_eq!("Term", kind("1024"));
        assert_eq!("Term", kind("f(x,y)"));
        assert_eq!("Term", kind("f()"));
        assert_eq!("Term", kind("s(s(0))"));
        assert_eq!("Term", kind("abc12(x1)"));
        assert_eq!("Term", kind("f(P(x),g(y))"));
    }

    #[test]
    fn test_neither() {
        assert_eq!("None", kind(""));
        assert_eq!("None", kind("   "));
        assert_eq!("None", kind("@x(P(x)"));
        assert_eq!("None", kind("@x(P(x)))"));
        assert_eq!("None", kind("@xy(P(x))"));
        assert_eq!("None", kind("@X(P(X))"));
        assert_eq!("None", kind("@1(P)"));
        assert_eq!("None", kind("!(x)"));
        assert_eq!("None", kind("!(P,Q)"));
        assert_eq!("None", kind("&(P)"));
        assert_eq!("None", kind("&(P,Q,R)"));
        assert_eq!("None", kind("P(x,)"));
        assert_eq!("None", kind("P(,x)"));
        assert_eq!("None", kind("P,Q"));
        assert_eq!("None", kind("(x)"));
        assert_eq!("None", kind("Px(y)"));
        assert_eq!("None", kind("x_1"));
        assert_eq!("None", kind("P;"));
        assert_eq!("None", kind("Q[1](x)"));
        assert_eq!("None", kind("x[0]"));
    }

    #[test]
    fn test_depth_limit() {
        let negations = |depth: usize| format!("{}P{}", "!(".repeat(depth), ")".repeat(depth));
        assert_eq!("Formula", kind(&negations(MAX_DEPTH - 1)));
        assert_eq!("None", kind(&negations(MAX_DEPTH)));
        assert_eq!("None", kind(&negations(3_000)));
        assert!(matches!(
            negations(3_000).parse::<ExpressionTree>(),
            Err(Error::IllFormed { .. })
        ));

        let successors = |depth: usize| format!("{}0{}", "s(".repeat(depth), ")".repeat(depth));
        assert_eq!("Term", kind(&successors(MAX_DEPTH - 1)));
        assert_eq!("None", kind(&successors(MAX_DEPTH)));
    }

    #[test]
    fn test_trees() {
        assert_debug_string!("@x(P(x))", classify("@x(P(x))").tree().unwrap());
        assert_debug_string!("P(x)", classify("((P(x)))").tree().unwrap());
        assert_debug_string!("P", classify("P()").tree().unwrap());
        assert_debug_string!(
            ">(&(x,Q),=(f(y),0))",
            classify(">(&(x,Q),=(f(y),0))").tree().unwrap()
        );
        assert_debug_string!("f(x,s(0))", classify("f (x, s(0))").tree().unwrap());
    }

    #[test]
    fn test_backtracking_leaves_no_trace() {
        // `P` is tried as a formula argument and `x(...)` falls back to a term
        let tree = classify("P(Q(x(y)),z)").into_tree().unwrap();
        assert_debug_string!("P(Q(x(y)),z)", tree);
        assert_eq!(
            vec!["Q(x(y))", "z"],
            tree.view()
                .children()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
        );
        assert!(matches!(classify("f(P(x),y)"), Classification::Term(_)));
        assert_debug_string!("f(P(x),y)", classify("f(P(x),y)").tree().unwrap());
    }

    #[test]
    fn test_failed_production_rolls_back() {
        let tokens = tokenize("&(P(x),#y(Q(y))").unwrap();
        let mut grammar = Grammar::new(&tokens);
        assert!(grammar.formula(0).is_none());
        assert_eq!(0, grammar.arena.len());

        let tokens = tokenize("|(P,Q)").unwrap();
        let mut grammar = Grammar::new(&tokens);
        assert_eq!(Some(6), grammar.formula(0).map(|(end, _)| end));
        assert_eq!(3, grammar.arena.len());
    }

    #[test]
    fn test_from_str() {
        let tree: ExpressionTree = "#x(=(x, 0))".parse().unwrap();
        assert_debug_string!("#x(=(x,0))", tree);
        let term: ExpressionTree = "g(0)".parse().unwrap();
        assert_debug_string!("g(0)", term);
        assert_eq!(
            Err(Error::IllFormed {
                input: "&(P".to_string()
            }),
            "&(P".parse::<ExpressionTree>()
        );
        assert_eq!(
            Err(Error::InvalidCharacter {
                character: '$',
                position: 0
            }),
            "$".parse::<ExpressionTree>()
        );
    }
}
