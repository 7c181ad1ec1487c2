/*! Provides a small engine for first-order formulae written in a compact prefix notation: a
tokenizer, a classifier that decides whether a string is a well-formed formula or term, a prefix
parser, renderings of the expression tree, the signature of a formula, a transformation into
negation normal form and an evaluator over finite models.

**Example**:
```rust
use tm_fol::{parser::classify, transform::ToNnf};

let tree = classify("!(@x(>(P(x),Q(x))))").tree().cloned().unwrap();
assert_eq!("#x(&(P(x),!(Q(x))))", tree.nnf().to_string());
```
*/
#[macro_use]
extern crate tracing;

pub mod parser;
pub mod semantics;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
#[cfg(test)]
mod test_prelude;
pub mod trace;
pub mod transform;
