//! Error types used in the library.
//!
//! - Expression errors are internal to [evaluate](crate::expression::evaluate), which reads any failure as the value false.
//!   They are exposed by [try_evaluate](crate::expression::try_evaluate) and [check](crate::expression::check) for those interested in *why* a statement failed.
//! - Argument errors arise when text is read as some structure of the library, e.g. an actor.
//! - Input errors arise when reading requests from outside the library, e.g. the command line, and are raised before any procedure is called.
//!
//! Names of the error enums overlap with the structure they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Argument(ArgumentError),
    Expression(ExpressionError),
    Input(InputError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Argument(e) => write!(f, "{e}"),
            Self::Expression(e) => write!(f, "{e}"),
            Self::Input(e) => write!(f, "{e}"),
        }
    }
}

/// Errors when reading text as a structure of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ArgumentError {
    /// Some identifier which is neither of the two actors.
    UnknownActor(String),
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownActor(name) => write!(f, "Unknown speaker '{name}', expected A or B"),
        }
    }
}

impl From<ArgumentError> for ErrorKind {
    fn from(e: ArgumentError) -> Self {
        ErrorKind::Argument(e)
    }
}

/// Noted errors when reading or evaluating a statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExpressionError {
    /// A statement with no tokens.
    Empty,

    /// Some character or word which is not a variable, constant, connective, or parenthesis.
    UnknownToken(String),

    /// A parenthesis without a partner.
    UnbalancedParentheses,

    /// An implication without some operand on one side.
    DanglingImplication,

    /// A token was found where some other token was required.
    UnexpectedToken(String),

    /// The statement ended where some further token was required.
    UnexpectedEnd,

    /// Some complete expression was read, though tokens remain.
    TrailingTokens,

    /// Groups and negations are nested beyond the [limit](crate::expression::parse::NESTING_LIMIT).
    NestingLimit,

    /// A variable remained after substitution.
    /// This is unexpected.
    Unsubstituted,
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty statement"),
            Self::UnknownToken(t) => write!(f, "Unknown token '{t}'"),
            Self::UnbalancedParentheses => write!(f, "Unbalanced parentheses"),
            Self::DanglingImplication => write!(f, "Implication is missing an operand"),
            Self::UnexpectedToken(t) => write!(f, "Unexpected token '{t}'"),
            Self::UnexpectedEnd => write!(f, "Statement ended unexpectedly"),
            Self::TrailingTokens => write!(f, "Tokens remain after a complete expression"),
            Self::NestingLimit => write!(f, "Statement is nested too deeply"),
            Self::Unsubstituted => write!(f, "Variable without a value"),
        }
    }
}

impl From<ExpressionError> for ErrorKind {
    fn from(e: ExpressionError) -> Self {
        ErrorKind::Expression(e)
    }
}

/// Errors in a request, found before any procedure is called.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputError {
    /// No statement, or a statement of only whitespace.
    MissingStatement,

    /// Testimony not of the form `speaker: statement`.
    MalformedTestimony(String),

    /// A puzzle without any testimony.
    NoTestimony,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingStatement => write!(f, "Please select a speaker and enter a statement"),
            Self::MalformedTestimony(t) => {
                write!(f, "Testimony '{t}' is not of the form 'speaker: statement'")
            }
            Self::NoTestimony => write!(f, "A puzzle requires at least one statement"),
        }
    }
}

impl From<InputError> for ErrorKind {
    fn from(e: InputError) -> Self {
        ErrorKind::Input(e)
    }
}
