/*!
Tokens of a statement, and the lexer from text to tokens.

A statement may be written with Unicode or ASCII connectives, or with words:

| Connective    | Accepted                      |
|---------------|-------------------------------|
| negation      | `¬` `~` `!` `not`             |
| conjunction   | `∧` `&` `&&` `and`            |
| disjunction   | `∨` `\|` `\|\|` `or`          |
| implication   | `→` `⇒` `->` `=>`             |
| biconditional | `↔` `⇔` `<->` `<=>` `==`      |

The variables are `p` and `q`, and the constants are `True`/`true`/`⊤` and `False`/`false`/`⊥`.
*/

use crate::{
    structures::Actor,
    types::err::{self},
};

/// A token of a statement.
///
/// Variables are present only before [substitution](super::substitute), and implications only before [rewriting](super::rewrite).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    Variable(Actor),
    Value(bool),
    Not,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(actor) => write!(f, "{}", actor.variable()),
            Self::Value(true) => write!(f, "True"),
            Self::Value(false) => write!(f, "False"),
            Self::Not => write!(f, "not"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Implies => write!(f, "→"),
            Self::Iff => write!(f, "=="),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
        }
    }
}

/// A string of tokens, separated by spaces.
pub fn token_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads a statement as tokens.
///
/// ```rust
/// # use knights_knaves::expression::token::{tokenize, Token};
/// # use knights_knaves::structures::Actor;
/// assert_eq!(
///     tokenize("¬p -> q"),
///     Ok(vec![Token::Not, Token::Variable(Actor::A), Token::Implies, Token::Variable(Actor::B)])
/// );
/// assert!(tokenize("p + q").is_err());
/// ```
pub fn tokenize(statement: &str) -> Result<Vec<Token>, err::ExpressionError> {
    let mut tokens = Vec::default();
    let mut chars = statement.chars().peekable();

    while let Some(character) = chars.next() {
        let token = match character {
            c if c.is_whitespace() => continue,

            '(' => Token::Open,
            ')' => Token::Close,

            '¬' | '~' | '!' => Token::Not,

            '∧' => Token::And,
            '&' => {
                chars.next_if_eq(&'&');
                Token::And
            }

            '∨' => Token::Or,
            '|' => {
                chars.next_if_eq(&'|');
                Token::Or
            }

            '→' | '⇒' => Token::Implies,
            '↔' | '⇔' => Token::Iff,

            '⊤' => Token::Value(true),
            '⊥' => Token::Value(false),

            '-' => match chars.next_if_eq(&'>') {
                Some(_) => Token::Implies,
                None => return Err(err::ExpressionError::UnknownToken("-".to_string())),
            },

            '=' => match chars.next() {
                Some('>') => Token::Implies,
                Some('=') => Token::Iff,
                _ => return Err(err::ExpressionError::UnknownToken("=".to_string())),
            },

            '<' => {
                let middle = chars.next();
                let end = chars.next();
                match (middle, end) {
                    (Some('-'), Some('>')) | (Some('='), Some('>')) => Token::Iff,
                    _ => return Err(err::ExpressionError::UnknownToken("<".to_string())),
                }
            }

            c if c.is_alphanumeric() || c == '_' => {
                let mut word = String::from(c);
                while let Some(next) = chars.next_if(|n| n.is_alphanumeric() || *n == '_') {
                    word.push(next);
                }
                word_token(word)?
            }

            c => return Err(err::ExpressionError::UnknownToken(c.to_string())),
        };

        tokens.push(token);
    }

    Ok(tokens)
}

fn word_token(word: String) -> Result<Token, err::ExpressionError> {
    match word.as_str() {
        "p" => Ok(Token::Variable(Actor::A)),
        "q" => Ok(Token::Variable(Actor::B)),

        "not" => Ok(Token::Not),
        "and" => Ok(Token::And),
        "or" => Ok(Token::Or),

        "True" | "true" => Ok(Token::Value(true)),
        "False" | "false" => Ok(Token::Value(false)),

        _ => Err(err::ExpressionError::UnknownToken(word)),
    }
}
