/*!
Evaluation of a statement on an assignment of values to `p` and `q`.

Evaluation is a short pipeline over [tokens](token::Token):

1. The statement is [read as tokens](token::tokenize).
2. Each variable is [substituted](substitute) with its value: `p` with the value of A, and `q` with the value of B.
3. Each implication is [rewritten](rewrite) to a disjunction.
4. The remaining tokens are [evaluated](parse) by a recursive descent parser.

Statements are arbitrary text, and nothing other than the connectives, constants, and variables listed in [token] is read.

# Failure

[evaluate] is total: any failure is read as the value false, and noted in the [log](crate::misc::log).
The reason for a failure is available through [try_evaluate] or [check].

```rust
# use knights_knaves::expression::{check, evaluate, try_evaluate};
# use knights_knaves::structures::Assignment;
# use knights_knaves::types::err::ExpressionError;
let assignment = Assignment::new(true, false);

assert!(evaluate("p ∧ ¬q", assignment));
assert!(!evaluate("(p ∧ ¬q", assignment));

assert_eq!(try_evaluate("(p ∧ ¬q", assignment), Err(ExpressionError::UnbalancedParentheses));
assert_eq!(check(""), Err(ExpressionError::Empty));
```
*/

pub mod parse;
pub mod rewrite;
pub mod token;

use crate::{
    misc::log::targets::{self},
    structures::Assignment,
    types::err::{self},
};

use token::Token;

/// The value of `statement` on `assignment`, or false if the statement could not be read.
pub fn evaluate(statement: &str, assignment: Assignment) -> bool {
    match try_evaluate(statement, assignment) {
        Ok(value) => value,
        Err(e) => {
            log::debug!(target: targets::EXPRESSION, "Failed to evaluate '{statement}': {e}");
            false
        }
    }
}

/// The value of `statement` on `assignment`, or the reason the statement could not be read.
pub fn try_evaluate(statement: &str, assignment: Assignment) -> Result<bool, err::ExpressionError> {
    let mut tokens = token::tokenize(statement)?;
    substitute(&mut tokens, assignment);

    let tokens = rewrite::rewrite_implications(tokens)?;

    let value = parse::evaluate_tokens(&tokens)?;
    log::trace!(target: targets::EXPRESSION, "'{statement}' on {assignment} is {value}");
    Ok(value)
}

/// Ok if `statement` can be read, and otherwise the reason it cannot.
///
/// Whether a statement can be read does not depend on the values of `p` and `q`, and so any assignment will do.
pub fn check(statement: &str) -> Result<(), err::ExpressionError> {
    try_evaluate(statement, Assignment::ALL[0]).map(|_| ())
}

/// Replaces each variable in `tokens` with its value on `assignment`.
pub fn substitute(tokens: &mut [Token], assignment: Assignment) {
    for token in tokens.iter_mut() {
        if let Token::Variable(actor) = token {
            let value = assignment.value_of(*actor);
            *token = Token::Value(value);
        }
    }
}
