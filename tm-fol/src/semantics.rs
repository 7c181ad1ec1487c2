//! Evaluates first-order formulae in finite models.
//!
//! A [`Model`] consists of a domain of string elements and the interpretations of the non-logical
//! symbols. An [`Evaluator`] borrows a model and decides the truth of an [`ExpressionTree`] under
//! an [`Assignment`] of elements to variables.
//!
//! **Example**:
//! ```rust
//! use tm_fol::{parser::parse_prefix, semantics::Model};
//!
//! let model: Model = serde_json::from_str(
//!     r#"{ "domain": ["0", "1"], "interpretations": { "P": ["0"] } }"#,
//! ).unwrap();
//!
//! assert_eq!(Ok(false), model.evaluate(&parse_prefix("@x(P(x))")));
//! assert_eq!(Ok(true), model.evaluate(&parse_prefix("#x(P(x))")));
//! ```
//!
//! [`ExpressionTree`]: crate::syntax::ExpressionTree
mod evaluator;
mod model;

pub use evaluator::{Assignment, EvalConfig, Evaluator, NullaryTruth};
pub use model::{Interpretation, Model};

use thiserror::Error;

/// Is the type of errors arising from evaluating a formula in a model.
#[derive(Error, PartialEq, Eq, Debug)]
pub enum Error {
    /// Is returned when a function is applied to arguments its table has no entry for.
    #[error("function `{function}` has no value for `({arguments})`")]
    MissingFunctionValue { function: String, arguments: String },

    /// Is returned when a symbol applied to arguments in a term is not interpreted as a function.
    #[error("symbol `{symbol}` is not interpreted as a function")]
    NotAFunction { symbol: String },

    /// Is returned when an atomic formula is built on a symbol interpreted as a constant or a
    /// function.
    #[error("symbol `{symbol}` is not interpreted as a predicate")]
    NotAPredicate { symbol: String },

    /// Is returned in strict mode when an atomic formula is built on an uninterpreted symbol.
    #[error("predicate `{predicate}` is not interpreted")]
    UndefinedPredicate { predicate: String },

    /// Is returned when a connective or a quantifier has an unexpected number of children.
    #[error("`{formula}` is not a well-formed formula")]
    Malformed { formula: String },

    /// Is returned when a formula nests deeper than the evaluator descends.
    #[error("formula nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}
