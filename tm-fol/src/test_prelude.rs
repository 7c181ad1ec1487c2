//! Strategies shared by the property tests.
use crate::semantics::{Interpretation, Model};
use proptest::prelude::*;

/// Generates a term over the variables `x` and `y`, the numerals `0` and `1`, and the unary
/// function `f`, in prefix notation.
pub fn arb_term() -> impl Strategy<Value = String> {
    prop_oneof![Just("x"), Just("y"), Just("0"), Just("1")]
        .prop_map(String::from)
        .prop_recursive(2, 4, 1, |inner| inner.prop_map(|t| format!("f({})", t)))
}

/// Generates an atomic formula over the nullary `Q`, the unary `P`, the binary `R` and equality.
pub fn arb_atom() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Q".to_string()),
        arb_term().prop_map(|t| format!("P({})", t)),
        (arb_term(), arb_term()).prop_map(|(a, b)| format!("R({},{})", a, b)),
        (arb_term(), arb_term()).prop_map(|(a, b)| format!("=({},{})", a, b)),
    ]
}

/// Generates a formula in prefix notation using every connective and both quantifiers.
pub fn arb_formula() -> impl Strategy<Value = String> {
    arb_atom().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|a| format!("!({})", a)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("&({},{})", a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("|({},{})", a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!(">({},{})", a, b)),
            (prop_oneof![Just('x'), Just('y')], inner.clone())
                .prop_map(|(v, a)| format!("@{}({})", v, a)),
            (prop_oneof![Just('x'), Just('y')], inner).prop_map(|(v, a)| format!("#{}({})", v, a)),
        ]
    })
}

/// Returns models over `{0, 1}` that interpret every symbol generated by [`arb_formula`].
pub fn models() -> Vec<Model> {
    let f = Interpretation::function(vec![("0", "1"), ("1", "0")]);
    vec![
        Model::new(vec!["0", "1"])
            .with("f", f.clone())
            .with("P", Interpretation::predicate(vec!["0"]))
            .with("R", Interpretation::predicate(vec!["0,1", "1,1"]))
            .with("Q", Interpretation::constant("")),
        Model::new(vec!["0", "1"])
            .with("f", Interpretation::function(vec![("0", "0"), ("1", "0")]))
            .with("P", Interpretation::predicate(vec!["0", "1"]))
            .with("R", Interpretation::predicate(vec!["1,0"])),
        Model::new(vec!["0", "1"])
            .with("f", f)
            .with("P", Interpretation::predicate(Vec::<String>::new()))
            .with("R", Interpretation::predicate(vec!["0,0", "0,1", "1,0", "1,1"]))
            .with("Q", Interpretation::constant("1")),
    ]
}
