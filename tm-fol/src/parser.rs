//! Implements the tokenizer and the two parsers of the crate.
//!
//! [`classify`] runs a backtracking grammar over the tokens of a string and decides whether the
//! string is a well-formed formula, a well-formed term or neither. The same grammar backs
//! [`FromStr`] for [`ExpressionTree`]. [`parse_prefix`] reads the prefix notation printed by
//! [`ExpressionTree`] without checking that labels make sense.
//!
//! **Example**:
//! ```rust
//! use tm_fol::{parser::{parse_prefix, well_formed_expression_type}, syntax::ExpressionTree};
//!
//! assert_eq!("Formula", well_formed_expression_type("@x(P(x))").to_string());
//! assert_eq!("Term", well_formed_expression_type("f(x,y)").to_string());
//! assert_eq!("None", well_formed_expression_type("@x(P(x)").to_string());
//!
//! let tree: ExpressionTree = "!(!(P))".parse().unwrap();
//! assert_eq!(parse_prefix("!(!(P))"), tree);
//! ```
//!
//! [`ExpressionTree`]: crate::syntax::ExpressionTree
//! [`FromStr`]: std::str::FromStr
mod grammar;
mod prefix;
#[cfg(test)]
mod proptest_tests;
mod token;

pub use grammar::{classify, well_formed_expression_type, Classification, ExpressionType};
pub use prefix::parse_prefix;
pub use token::{tokenize, Token, SYMBOLS};

use thiserror::Error;

/// Is the type of errors returned by the tokenizer and the grammar.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when the input contains a character that cannot start or continue a token.
    #[error("invalid character `{character}` at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Is returned when the input is neither a well-formed formula nor a well-formed term.
    #[error("`{input}` is neither a well-formed formula nor a well-formed term")]
    IllFormed { input: String },
}
