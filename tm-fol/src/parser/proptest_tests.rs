//! Property-based tests for the tokenizer and the parsers using proptest.

use super::{classify, parse_prefix, tokenize, well_formed_expression_type, ExpressionType};
use crate::{syntax::ExpressionTree, test_prelude::*};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tokens_reproduce_input(input in "[@#&|!>=(),\\[\\]a-zA-Z0-9 ]{0,32}") {
        let tokens = tokenize(&input).unwrap();
        let text: String = tokens.iter().map(ToString::to_string).collect();
        prop_assert_eq!(input.replace(' ', ""), text);
    }

    #[test]
    fn classification_is_consistent(input in "[@#&|!>=(),PQxyf01 ]{0,16}") {
        let classification = classify(&input);
        let kind = classification.expression_type();
        prop_assert_eq!(kind, well_formed_expression_type(&input));
        prop_assert_eq!(kind != ExpressionType::None, classification.tree().is_some());
        prop_assert_eq!(kind != ExpressionType::None, input.parse::<ExpressionTree>().is_ok());
    }

    #[test]
    fn generated_formulae_are_formulae(formula in arb_formula()) {
        prop_assert_eq!(ExpressionType::Formula, well_formed_expression_type(&formula));
        let classified = classify(&formula).into_tree();
        prop_assert_eq!(Some(parse_prefix(&formula)), classified);
    }

    #[test]
    fn generated_terms_are_terms(term in arb_term()) {
        prop_assert_eq!(ExpressionType::Term, well_formed_expression_type(&term));
    }

    #[test]
    fn prefix_round_trip(formula in arb_formula()) {
        let tree = parse_prefix(&formula);
        let printed = tree.to_string();
        let reparsed = parse_prefix(&printed);
        prop_assert_eq!(&formula, &printed);
        prop_assert_eq!(tree, reparsed);
    }
}
