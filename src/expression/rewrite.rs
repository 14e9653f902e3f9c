/*!
Rewriting of implications.

The parser reads only negation, conjunction, disjunction, and the biconditional, and so each implication is rewritten to a disjunction before parsing:

```none
L → R   ⇝   ( not ( L ) ) or R
```

Operands are found structurally, on either side of the implication:
- An operand is some constant (or variable) or some balanced parenthesised group.
- Any negations immediately before the constant or group belong to the operand.

The disjunction introduced is not grouped, and so takes the place of `or` amongst its neighbours.
For example:
- `p → q ∧ p` is read as `¬p ∨ (q ∧ p)`.
- `p ∧ q → p` is read as `(p ∧ ¬q) ∨ p`, and parentheses are required for `(p ∧ q) → p`.

Rewrites happen left to right, one implication at a time, until no implication remains.
As the left operand of a later implication is the smallest operand before it, `p → q → p` is read as `¬p ∨ ¬q ∨ p`, i.e. `p → (q → p)`.
*/

use crate::{
    misc::log::targets::{self},
    types::err::{self},
};

use super::token::{token_string, Token};

/// Rewrites every implication in `tokens`.
///
/// ```rust
/// # use knights_knaves::expression::{rewrite::rewrite_implications, token::Token};
/// let tokens = vec![Token::Value(true), Token::Implies, Token::Not, Token::Value(false)];
/// assert_eq!(
///     rewrite_implications(tokens),
///     Ok(vec![
///         Token::Open, Token::Not, Token::Open, Token::Value(true), Token::Close, Token::Close,
///         Token::Or, Token::Not, Token::Value(false),
///     ])
/// );
/// ```
pub fn rewrite_implications(mut tokens: Vec<Token>) -> Result<Vec<Token>, err::ExpressionError> {
    while let Some(index) = tokens.iter().position(|token| *token == Token::Implies) {
        let left = operand_start(&tokens, index)?;
        // The right operand is left in place, though it must exist.
        operand_end(&tokens, index + 1)?;

        let mut rewritten = Vec::with_capacity(tokens.len() + 5);
        rewritten.extend_from_slice(&tokens[..left]);
        rewritten.extend([Token::Open, Token::Not, Token::Open]);
        rewritten.extend_from_slice(&tokens[left..index]);
        rewritten.extend([Token::Close, Token::Close, Token::Or]);
        rewritten.extend_from_slice(&tokens[index + 1..]);

        log::trace!(target: targets::REWRITE, "{} ⇝ {}", token_string(&tokens), token_string(&rewritten));
        tokens = rewritten;
    }

    Ok(tokens)
}

/// The index of the first token of the operand which ends immediately before `index`.
fn operand_start(tokens: &[Token], index: usize) -> Result<usize, err::ExpressionError> {
    let Some(last) = index.checked_sub(1) else {
        return Err(err::ExpressionError::DanglingImplication);
    };

    let mut start = match tokens[last] {
        Token::Value(_) | Token::Variable(_) => last,

        Token::Close => {
            let mut depth = 0_usize;
            let mut open = None;
            for position in (0..=last).rev() {
                match tokens[position] {
                    Token::Close => depth += 1,
                    Token::Open => {
                        depth -= 1;
                        if depth == 0 {
                            open = Some(position);
                            break;
                        }
                    }
                    _ => {}
                }
            }
            open.ok_or(err::ExpressionError::UnbalancedParentheses)?
        }

        _ => return Err(err::ExpressionError::DanglingImplication),
    };

    while start > 0 && tokens[start - 1] == Token::Not {
        start -= 1;
    }

    Ok(start)
}

/// The index immediately after the operand which begins at `index`.
fn operand_end(tokens: &[Token], index: usize) -> Result<usize, err::ExpressionError> {
    let mut position = index;
    while tokens.get(position) == Some(&Token::Not) {
        position += 1;
    }

    match tokens.get(position) {
        Some(Token::Value(_)) | Some(Token::Variable(_)) => Ok(position + 1),

        Some(Token::Open) => {
            let mut depth = 0_usize;
            for (offset, token) in tokens[position..].iter().enumerate() {
                match token {
                    Token::Open => depth += 1,
                    Token::Close => {
                        depth -= 1;
                        if depth == 0 {
                            return Ok(position + offset + 1);
                        }
                    }
                    _ => {}
                }
            }
            Err(err::ExpressionError::UnbalancedParentheses)
        }

        _ => Err(err::ExpressionError::DanglingImplication),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::expression::token::tokenize;

    fn rewritten(statement: &str) -> Result<String, err::ExpressionError> {
        let tokens = tokenize(statement)?;
        rewrite_implications(tokens).map(|tokens| token_string(&tokens))
    }

    #[test]
    fn simple() {
        assert_eq!(rewritten("p → q"), Ok("( not ( p ) ) or q".to_string()));
    }

    #[test]
    fn negated_operands() {
        assert_eq!(
            rewritten("¬p → ¬¬q"),
            Ok("( not ( not p ) ) or not not q".to_string())
        );
    }

    #[test]
    fn grouped_operands() {
        assert_eq!(
            rewritten("(p ∧ (q ∨ p)) → (q)"),
            Ok("( not ( ( p and ( q or p ) ) ) ) or ( q )".to_string())
        );
    }

    #[test]
    fn inside_group() {
        assert_eq!(
            rewritten("¬(p → q)"),
            Ok("not ( ( not ( p ) ) or q )".to_string())
        );
    }

    #[test]
    fn neighbouring_connectives() {
        assert_eq!(
            rewritten("p ∧ q → p"),
            Ok("p and ( not ( q ) ) or p".to_string())
        );
        assert_eq!(
            rewritten("p → q ∧ p"),
            Ok("( not ( p ) ) or q and p".to_string())
        );
    }

    #[test]
    fn chained() {
        assert_eq!(
            rewritten("p → q → p"),
            Ok("( not ( p ) ) or ( not ( q ) ) or p".to_string())
        );
    }

    #[test]
    fn without_implication() {
        assert_eq!(rewritten("p ∧ ¬q"), Ok("p and not q".to_string()));
    }

    #[test]
    fn dangling() {
        assert_eq!(
            rewritten("→ q"),
            Err(err::ExpressionError::DanglingImplication)
        );
        assert_eq!(
            rewritten("p →"),
            Err(err::ExpressionError::DanglingImplication)
        );
        assert_eq!(
            rewritten("p ∧ → q"),
            Err(err::ExpressionError::DanglingImplication)
        );
        assert_eq!(
            rewritten("p → ∨ q"),
            Err(err::ExpressionError::DanglingImplication)
        );
    }

    #[test]
    fn unbalanced() {
        assert_eq!(
            rewritten("p → (q"),
            Err(err::ExpressionError::UnbalancedParentheses)
        );
        assert_eq!(
            rewritten("p) → q"),
            Err(err::ExpressionError::UnbalancedParentheses)
        );
    }
}
