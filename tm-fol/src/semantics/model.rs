/*! Defines finite models and the interpretations of symbols in them. */
use super::{Assignment, Error, Evaluator};
use crate::syntax::ExpressionTree;
use serde_derive::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Is the meaning of a non-logical symbol in a [`Model`].
///
/// Tuples of arguments are written as their elements joined by `,` with no spaces, so the
/// arguments `0` and `1` become the key `"0,1"`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Interpretation {
    /// Interprets a constant (or a variable with no assignment) as an element.
    Constant(String),

    /// Interprets a function symbol as a table from argument tuples to elements.
    Function(HashMap<String, String>),

    /// Interprets a predicate symbol as the set of argument tuples it holds for.
    Predicate(HashSet<String>),
}

impl Interpretation {
    /// Creates the interpretation of a constant.
    pub fn constant<S: Into<String>>(element: S) -> Self {
        Self::Constant(element.into())
    }

    /// Creates the interpretation of a function from `(arguments, value)` entries.
    pub fn function<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Function(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates the interpretation of a predicate from the tuples it holds for.
    pub fn predicate<I, T>(tuples: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Predicate(tuples.into_iter().map(Into::into).collect())
    }
}

/// Is a finite model: a domain of elements and the interpretations of symbols.
///
/// **Example**:
/// ```rust
/// use tm_fol::semantics::{Interpretation, Model};
///
/// let model = Model::new(vec!["0", "1"])
///     .with("c", Interpretation::constant("1"))
///     .with("s", Interpretation::function(vec![("0", "1"), ("1", "0")]))
///     .with("R", Interpretation::predicate(vec!["0,1", "1,0"]));
///
/// let json = r#"{
///     "domain": ["0", "1"],
///     "interpretations": {
///         "c": "1",
///         "s": {"0": "1", "1": "0"},
///         "R": ["0,1", "1,0"]
///     }
/// }"#;
/// assert_eq!(model, serde_json::from_str(json).unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Model {
    /// Is the elements of the model in the order quantifiers visit them.
    domain: Vec<String>,

    /// Maps symbols to their interpretations.
    #[serde(default)]
    interpretations: HashMap<String, Interpretation>,
}

impl Model {
    /// Creates a model over `domain` with no interpretations.
    pub fn new<I, S>(domain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            interpretations: HashMap::new(),
        }
    }

    /// Interprets `symbol` by `interpretation`, replacing any existing interpretation.
    pub fn with<S: Into<String>>(mut self, symbol: S, interpretation: Interpretation) -> Self {
        self.interpretations.insert(symbol.into(), interpretation);
        self
    }

    /// Returns the domain of the model.
    #[inline(always)]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns the interpretations of the model.
    #[inline(always)]
    pub fn interpretations(&self) -> &HashMap<String, Interpretation> {
        &self.interpretations
    }

    /// Returns the interpretation of `symbol`, if any.
    #[inline(always)]
    pub fn interpretation(&self, symbol: &str) -> Option<&Interpretation> {
        self.interpretations.get(symbol)
    }

    /// Evaluates `formula` in the model with the default configuration and an empty assignment.
    pub fn evaluate(&self, formula: &ExpressionTree) -> Result<bool, Error> {
        Evaluator::new(self).evaluate(formula, &Assignment::new())
    }
}
