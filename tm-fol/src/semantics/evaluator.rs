/*! Implements the evaluation of formulae in a [`Model`].

[`Model`]: crate::semantics::Model
*/
use super::{Error, Interpretation, Model};
use crate::syntax::{Connective, ExpressionTree, NodeRef, Quantifier, Symbol, MAX_DEPTH};
use std::collections::HashMap;

/// Is an assignment of domain elements to variables.
pub type Assignment = HashMap<String, String>;

/// Decides when an atomic formula with no arguments, such as `P`, is true.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NullaryTruth {
    /// `P` is true if `P` is interpreted and its interpretation equals the interpretation of the
    /// empty tuple key `""`, which defaults to the constant `""` when `""` is not interpreted.
    ///
    /// **Note**: under this reading a model with `"P": ""` makes `P` true, while `"P": [""]`
    /// does not.
    SelfKeyed,

    /// `P` is true if `P` is interpreted as a predicate holding for the empty tuple `""`.
    Membership,
}

impl Default for NullaryTruth {
    fn default() -> Self {
        Self::SelfKeyed
    }
}

/// Configures an [`Evaluator`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct EvalConfig {
    /// Decides the truth of atomic formulae with no arguments.
    pub nullary: NullaryTruth,

    /// If true, an atomic formula over an uninterpreted symbol fails with
    /// [`Error::UndefinedPredicate`] instead of being false.
    ///
    /// [`Error::UndefinedPredicate`]: crate::semantics::Error::UndefinedPredicate
    pub strict: bool,
}

/// Evaluates formulae in a borrowed [`Model`].
///
/// Quantifiers visit the domain in order and stop at the first element that decides the result;
/// `&`, `|` and `>` evaluate their left side first and skip the right side when it cannot change
/// the result. Formulae nested deeper than [`MAX_DEPTH`] fail with [`Error::TooDeep`].
///
/// [`MAX_DEPTH`]: crate::syntax::MAX_DEPTH
/// [`Error::TooDeep`]: crate::semantics::Error::TooDeep
///
/// **Example**:
/// ```rust
/// use tm_fol::{parser::parse_prefix, semantics::{Assignment, Evaluator, Interpretation, Model}};
///
/// let model = Model::new(vec!["0", "1"])
///     .with("s", Interpretation::function(vec![("0", "1"), ("1", "0")]))
///     .with("P", Interpretation::predicate(vec!["1"]));
/// let evaluator = Evaluator::new(&model);
///
/// let formula = parse_prefix("@x(|(P(x),P(s(x))))");
/// assert_eq!(Ok(true), evaluator.evaluate(&formula, &Assignment::new()));
///
/// let mut assignment = Assignment::new();
/// assignment.insert("y".into(), "0".into());
/// assert_eq!(Ok(false), evaluator.evaluate(&parse_prefix("P(y)"), &assignment));
/// ```
///
/// [`Model`]: crate::semantics::Model
pub struct Evaluator<'m> {
    model: &'m Model,
    config: EvalConfig,
}

impl<'m> Evaluator<'m> {
    /// Creates an evaluator for `model` with the default configuration.
    pub fn new(model: &'m Model) -> Self {
        Self::with_config(model, EvalConfig::default())
    }

    /// Creates an evaluator for `model` with `config`.
    pub fn with_config(model: &'m Model, config: EvalConfig) -> Self {
        Self { model, config }
    }

    /// Returns the configuration of the evaluator.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates `formula` under `assignment`. The assignment is not modified; quantifiers extend
    /// copies of it.
    pub fn evaluate(
        &self,
        formula: &ExpressionTree,
        assignment: &Assignment,
    ) -> Result<bool, Error> {
        let span = span!(
            tracing::Level::TRACE,
            crate::trace::EVALUATE,
            formula = %formula,
        );
        let _enter = span.enter();
        self.formula(formula.view(), assignment, 0)
    }

    fn formula(&self, node: NodeRef, assignment: &Assignment, depth: usize) -> Result<bool, Error> {
        let depth = descend(depth)?;
        match node.symbol() {
            Symbol::Connective(connective) => {
                if node.arity() != connective.arity() {
                    return Err(malformed(node));
                }
                let left = operand(node, 0)?;
                match connective {
                    Connective::Equals => {
                        let right = operand(node, 1)?;
                        Ok(self.term(left, assignment, depth)?
                            == self.term(right, assignment, depth)?)
                    }
                    Connective::Not => Ok(!self.formula(left, assignment, depth)?),
                    Connective::And => Ok(self.formula(left, assignment, depth)?
                        && self.formula(operand(node, 1)?, assignment, depth)?),
                    Connective::Or => Ok(self.formula(left, assignment, depth)?
                        || self.formula(operand(node, 1)?, assignment, depth)?),
                    Connective::Implies => Ok(!self.formula(left, assignment, depth)?
                        || self.formula(operand(node, 1)?, assignment, depth)?),
                }
            }
            Symbol::Quantifier(quantifier, variable) => {
                if node.arity() != 1 {
                    return Err(malformed(node));
                }
                let body = operand(node, 0)?;
                self.quantified(quantifier, variable, body, assignment, depth)
            }
            _ => self.atom(node, assignment, depth),
        }
    }

    fn quantified(
        &self,
        quantifier: Quantifier,
        variable: &str,
        body: NodeRef,
        assignment: &Assignment,
        depth: usize,
    ) -> Result<bool, Error> {
        // `@x` fails on the first false instance and `#x` succeeds on the first true one
        let decisive = quantifier == Quantifier::Exists;
        for element in self.model.domain() {
            let mut extended = assignment.clone();
            extended.insert(variable.to_owned(), element.clone());
            trace!(
                event = crate::trace::INSTANTIATE,
                variable = variable,
                element = element.as_str(),
            );
            if self.formula(body, &extended, depth)? == decisive {
                return Ok(decisive);
            }
        }
        Ok(!decisive)
    }

    fn atom(&self, node: NodeRef, assignment: &Assignment, depth: usize) -> Result<bool, Error> {
        let symbol = node.value();
        if node.arity() == 0 {
            return self.nullary(symbol);
        }

        let arguments = self.arguments(node, assignment, depth)?;
        match self.model.interpretation(symbol) {
            Some(Interpretation::Predicate(tuples)) => Ok(tuples.contains(&arguments)),
            Some(_) => Err(Error::NotAPredicate {
                symbol: symbol.to_owned(),
            }),
            None => self.uninterpreted(symbol),
        }
    }

    fn nullary(&self, symbol: &str) -> Result<bool, Error> {
        let interpretation = match self.model.interpretation(symbol) {
            Some(interpretation) => interpretation,
            None => return self.uninterpreted(symbol),
        };
        match self.config.nullary {
            NullaryTruth::SelfKeyed => {
                let empty = Interpretation::Constant(String::new());
                let keyed = self.model.interpretation("").unwrap_or(&empty);
                Ok(interpretation == keyed)
            }
            NullaryTruth::Membership => match interpretation {
                Interpretation::Predicate(tuples) => Ok(tuples.contains("")),
                _ => Err(Error::NotAPredicate {
                    symbol: symbol.to_owned(),
                }),
            },
        }
    }

    fn uninterpreted(&self, symbol: &str) -> Result<bool, Error> {
        if self.config.strict {
            Err(Error::UndefinedPredicate {
                predicate: symbol.to_owned(),
            })
        } else {
            Ok(false)
        }
    }

    fn term(&self, node: NodeRef, assignment: &Assignment, depth: usize) -> Result<String, Error> {
        let depth = descend(depth)?;
        let symbol = node.value();
        if node.arity() == 0 {
            if let Some(element) = assignment.get(symbol) {
                return Ok(element.clone());
            }
            if let Some(Interpretation::Constant(element)) = self.model.interpretation(symbol) {
                return Ok(element.clone());
            }
            return Ok(symbol.to_owned());
        }

        let arguments = self.arguments(node, assignment, depth)?;
        match self.model.interpretation(symbol) {
            Some(Interpretation::Function(table)) => {
                table
                    .get(&arguments)
                    .cloned()
                    .ok_or_else(|| Error::MissingFunctionValue {
                        function: symbol.to_owned(),
                        arguments,
                    })
            }
            _ => Err(Error::NotAFunction {
                symbol: symbol.to_owned(),
            }),
        }
    }

    // Evaluates the children of `node` as terms and joins them into a tuple key.
    fn arguments(
        &self,
        node: NodeRef,
        assignment: &Assignment,
        depth: usize,
    ) -> Result<String, Error> {
        let elements = node
            .children()
            .map(|child| self.term(child, assignment, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(elements.join(","))
    }
}

// Returns the depth one level below `depth`, if it is within the limit.
fn descend(depth: usize) -> Result<usize, Error> {
    if depth == MAX_DEPTH {
        Err(Error::TooDeep { limit: MAX_DEPTH })
    } else {
        Ok(depth + 1)
    }
}

fn operand<'t>(node: NodeRef<'t>, slot: usize) -> Result<NodeRef<'t>, Error> {
    node.child_at(slot).ok_or_else(|| malformed(node))
}

fn malformed(node: NodeRef) -> Error {
    Error::Malformed {
        formula: node.to_string(),
    }
}
