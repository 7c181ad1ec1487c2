/*! Implements the tokenizer that breaks an input string into [`Token`]s.

[`Token`]: crate::parser::Token
*/
use super::Error;
use std::fmt;

/// Is the set of characters that form a token on their own.
pub const SYMBOLS: [char; 12] = ['@', '#', '&', '|', '!', '>', '=', '(', ')', ',', '[', ']'];

/// Is a token of the input string.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Token {
    /// Is a single character from [`SYMBOLS`].
    Symbol(char),

    /// Is an ASCII letter followed by ASCII letters, digits and underscores.
    Identifier(String),

    /// Is a run of ASCII digits.
    Numeral(String),
}

impl Token {
    /// Returns true if the token is the symbol `c`.
    pub fn is_symbol(&self, c: char) -> bool {
        matches!(self, Self::Symbol(s) if *s == c)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Symbol(c) => write!(f, "{}", c),
            Self::Identifier(s) | Self::Numeral(s) => write!(f, "{}", s),
        }
    }
}

/// Breaks `input` into a sequence of tokens after dropping its spaces, so `a b` is the single
/// identifier `ab`.
///
/// Leading and trailing whitespace is ignored. Any character other than a space, a symbol, an
/// ASCII letter or digit, or an underscore inside an identifier fails the whole input.
///
/// **Example**:
/// ```rust
/// use tm_fol::parser::{tokenize, Token};
///
/// let tokens = tokenize("@x (P1(x, 10))").unwrap();
/// assert_eq!(Token::Symbol('@'), tokens[0]);
/// assert_eq!(Token::Identifier("P1".into()), tokens[3]);
/// assert_eq!(Token::Numeral("10".into()), tokens[7]);
///
/// assert!(tokenize("P(x);").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let offset = input.len() - input.trim_start().len();
    let mut chars = input
        .trim()
        .char_indices()
        .filter(|&(_, c)| c != ' ')
        .peekable();
    let mut tokens = Vec::new();

    while let Some((start, c)) = chars.next() {
        if SYMBOLS.contains(&c) {
            tokens.push(Token::Symbol(c));
        } else if c.is_ascii_alphabetic() {
            let mut text = c.to_string();
            while let Some(&(_, next)) = chars.peek() {
                if !next.is_ascii_alphanumeric() && next != '_' {
                    break;
                }
                text.push(next);
                chars.next();
            }
            tokens.push(Token::Identifier(text));
        } else if c.is_ascii_digit() {
            let mut text = c.to_string();
            while let Some(&(_, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                text.push(next);
                chars.next();
            }
            tokens.push(Token::Numeral(text));
        } else {
            return Err(Error::InvalidCharacter {
                character: c,
                position: offset + start,
            });
        }
    }
    Ok(tokens)
}
