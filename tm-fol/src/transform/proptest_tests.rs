//! Property-based tests for the NNF transformation using proptest.

use super::ToNnf;
use crate::{
    parser::parse_prefix,
    semantics::{Assignment, Evaluator},
    syntax::{Connective, NodeRef, Symbol},
    test_prelude::*,
};
use proptest::prelude::*;

// Returns true if no node under `node` is an implication or a negation over a compound formula.
fn is_nnf(node: NodeRef) -> bool {
    let local = match node.symbol() {
        Symbol::Connective(Connective::Implies) => false,
        Symbol::Connective(Connective::Not) => node.children().all(|child| {
            !matches!(
                child.symbol(),
                Symbol::Connective(Connective::Not)
                    | Symbol::Connective(Connective::And)
                    | Symbol::Connective(Connective::Or)
                    | Symbol::Quantifier(..)
            )
        }),
        _ => true,
    };
    local && node.children().all(is_nnf)
}

fn assignments() -> Vec<Assignment> {
    let mut result = Vec::new();
    for x in &["0", "1"] {
        for y in &["0", "1"] {
            let mut assignment = Assignment::new();
            assignment.insert("x".to_string(), x.to_string());
            assignment.insert("y".to_string(), y.to_string());
            result.push(assignment);
        }
    }
    result
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn nnf_has_no_implication_or_compound_negation(formula in arb_formula()) {
        let nnf = parse_prefix(&formula).nnf();
        prop_assert!(is_nnf(nnf.view()), "{} => {}", formula, nnf);
    }

    #[test]
    fn nnf_is_idempotent(formula in arb_formula()) {
        let once = parse_prefix(&formula).nnf();
        let twice = once.nnf();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn nnf_preserves_truth(formula in arb_formula()) {
        let tree = parse_prefix(&formula);
        let nnf = tree.nnf();
        for model in models() {
            let evaluator = Evaluator::new(&model);
            for assignment in assignments() {
                prop_assert_eq!(
                    evaluator.evaluate(&tree, &assignment),
                    evaluator.evaluate(&nnf, &assignment),
                    "{} => {}",
                    formula,
                    nnf
                );
            }
        }
    }

    #[test]
    fn nnf_dualizes_negated_quantifiers(formula in arb_formula()) {
        let negated = parse_prefix(&format!("!({})", formula)).nnf();

        let forall = parse_prefix(&format!("!(@x({}))", formula)).nnf();
        prop_assert_eq!(format!("#x({})", negated), forall.to_string());

        let exists = parse_prefix(&format!("!(#y({}))", formula)).nnf();
        prop_assert_eq!(format!("@y({})", negated), exists.to_string());
    }
}
