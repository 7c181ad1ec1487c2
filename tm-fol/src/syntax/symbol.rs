/*! Defines the alphabet of logical symbols and classifies node labels into [`Symbol`]s.

A label is classified once, by its lexical shape and the arity of the node carrying it, and the
rest of the crate matches on the resulting tag instead of inspecting strings again.

[`Symbol`]: crate::syntax::Symbol
*/
use std::fmt;

/// Label of an equation between two terms.
pub const EQUALS: &str = "=";

/// Label of a negation.
pub const NOT: &str = "!";

/// Label of a conjunction.
pub const AND: &str = "&";

/// Label of a disjunction.
pub const OR: &str = "|";

/// Label of an implication.
pub const IMPLIES: &str = ">";

/// Prefix of a universally quantified label, followed by the bound variable.
pub const FORALL: char = '@';

/// Prefix of an existentially quantified label, followed by the bound variable.
pub const EXISTS: char = '#';

/// Is the set of logical connectives.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Connective {
    Equals,
    Not,
    And,
    Or,
    Implies,
}

impl Connective {
    /// Returns the label of the receiver.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Equals => EQUALS,
            Self::Not => NOT,
            Self::And => AND,
            Self::Or => OR,
            Self::Implies => IMPLIES,
        }
    }

    /// Returns the number of children a node labeled by the receiver has.
    pub fn arity(&self) -> usize {
        match self {
            Self::Not => 1,
            _ => 2,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            EQUALS => Some(Self::Equals),
            NOT => Some(Self::Not),
            AND => Some(Self::And),
            OR => Some(Self::Or),
            IMPLIES => Some(Self::Implies),
            _ => None,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Is the set of quantifiers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl Quantifier {
    /// Returns the prefix character of the receiver.
    pub fn prefix(&self) -> char {
        match self {
            Self::Forall => FORALL,
            Self::Exists => EXISTS,
        }
    }

    /// Returns the dual quantifier.
    pub fn dual(&self) -> Self {
        match self {
            Self::Forall => Self::Exists,
            Self::Exists => Self::Forall,
        }
    }

    /// Returns the label of a node quantifying `variable`.
    pub fn label(&self, variable: &str) -> String {
        format!("{}{}", self.prefix(), variable)
    }
}

/// Is the classification of a node label.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol<'a> {
    /// Is one of the connectives `=`, `!`, `&`, `|` and `>`.
    Connective(Connective),

    /// Is a quantifier, wrapping the name of the variable it binds.
    Quantifier(Quantifier, &'a str),

    /// Is a predicate symbol, such as `P` or `Q[2]`.
    Predicate(&'a str),

    /// Is a function symbol: a variable-shaped label applied to at least one argument.
    Function(&'a str),

    /// Is a variable, such as `x` or `t[3]`.
    Variable(&'a str),

    /// Is a constant, i.e., a run of digits.
    Constant(&'a str),

    /// Is a label that fits none of the above.
    Unknown(&'a str),
}

impl<'a> Symbol<'a> {
    /// Classifies `label` carried by a node with `arity` children.
    ///
    /// **Example**:
    /// ```rust
    /// use tm_fol::syntax::{Quantifier, Symbol};
    ///
    /// assert_eq!(Symbol::Variable("x"), Symbol::classify("x", 0));
    /// assert_eq!(Symbol::Function("x"), Symbol::classify("x", 2));
    /// assert_eq!(Symbol::Quantifier(Quantifier::Exists, "y"), Symbol::classify("#y", 1));
    /// assert_eq!(Symbol::Predicate("S[1]"), Symbol::classify("S[1]", 2));
    /// ```
    pub fn classify(label: &'a str, arity: usize) -> Self {
        if let Some(connective) = Connective::from_label(label) {
            return Self::Connective(connective);
        }
        if let Some(variable) = label.strip_prefix(FORALL) {
            return Self::Quantifier(Quantifier::Forall, variable);
        }
        if let Some(variable) = label.strip_prefix(EXISTS) {
            return Self::Quantifier(Quantifier::Exists, variable);
        }

        if is_variable_shape(label) {
            if arity == 0 {
                Self::Variable(label)
            } else {
                Self::Function(label)
            }
        } else if is_constant_shape(label) {
            Self::Constant(label)
        } else if is_predicate_shape(label) {
            Self::Predicate(label)
        } else {
            Self::Unknown(label)
        }
    }
}

/// Returns true if `label` is a run of lowercase letters, optionally indexed as in `x[12]`.
pub fn is_variable_shape(label: &str) -> bool {
    indexed_run(label, |c| c.is_ascii_lowercase())
}

/// Returns true if `label` is a run of uppercase letters, optionally indexed as in `Q[0]`.
pub fn is_predicate_shape(label: &str) -> bool {
    indexed_run(label, |c| c.is_ascii_uppercase())
}

/// Returns true if `label` is a run of digits.
pub fn is_constant_shape(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_digit())
}

// `<head>` or `<head>[<digits>]` where every character of `<head>` satisfies `class`.
fn indexed_run(label: &str, class: impl Fn(char) -> bool) -> bool {
    let (head, index) = match label.find('[') {
        Some(i) => (&label[..i], Some(&label[i + 1..])),
        None => (label, None),
    };
    if head.is_empty() || !head.chars().all(class) {
        return false;
    }
    match index {
        None => true,
        Some(rest) => rest
            .strip_suffix(']')
            .map_or(false, |digits| is_constant_shape(digits)),
    }
}
