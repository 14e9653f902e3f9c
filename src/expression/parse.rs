/*!
A recursive descent evaluator over substituted and rewritten tokens.

The grammar, from loosest to tightest binding:

```none
disjunction := conjunction ( 'or' conjunction )*
conjunction := negation ( 'and' negation )*
negation    := 'not' negation | comparison
comparison  := atom ( '==' atom )*
atom        := 'True' | 'False' | '(' disjunction ')'
```

The biconditional is read as a comparison of values, and so binds tighter than every other connective, including negation:
- `not True == False` is `not (True == False)`.
- `True == not False` is not read, and the operand of `==` must be grouped, as in `True == (not False)`.
- A chain of comparisons holds when each adjacent pair is equal, so `False == False == False` is true.

Conjunction and disjunction associate to the left.
No tree is built, as the value of each part is all that is needed.
*/

use crate::types::err::{self};

use super::token::Token;

/// The deepest nesting of groups and negations read before giving up.
pub const NESTING_LIMIT: usize = 256;

/// The value of `tokens`, which must contain no variables or implications.
pub fn evaluate_tokens(tokens: &[Token]) -> Result<bool, err::ExpressionError> {
    if tokens.is_empty() {
        return Err(err::ExpressionError::Empty);
    }

    balance_check(tokens)?;

    let mut parser = Parser {
        tokens,
        position: 0,
        depth: 0,
    };

    let value = parser.disjunction()?;

    match parser.position < tokens.len() {
        true => Err(err::ExpressionError::TrailingTokens),
        false => Ok(value),
    }
}

fn balance_check(tokens: &[Token]) -> Result<(), err::ExpressionError> {
    let mut depth = 0_usize;
    for token in tokens {
        match token {
            Token::Open => depth += 1,
            Token::Close => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(err::ExpressionError::UnbalancedParentheses)?
            }
            _ => {}
        }
    }

    match depth {
        0 => Ok(()),
        _ => Err(err::ExpressionError::UnbalancedParentheses),
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    position: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn descend(&mut self) -> Result<(), err::ExpressionError> {
        self.depth += 1;
        match self.depth > NESTING_LIMIT {
            true => Err(err::ExpressionError::NestingLimit),
            false => Ok(()),
        }
    }

    fn disjunction(&mut self) -> Result<bool, err::ExpressionError> {
        let mut value = self.conjunction()?;
        while self.peek() == Some(Token::Or) {
            self.next();
            let other = self.conjunction()?;
            value = value || other;
        }
        Ok(value)
    }

    fn conjunction(&mut self) -> Result<bool, err::ExpressionError> {
        let mut value = self.negation()?;
        while self.peek() == Some(Token::And) {
            self.next();
            let other = self.negation()?;
            value = value && other;
        }
        Ok(value)
    }

    fn negation(&mut self) -> Result<bool, err::ExpressionError> {
        match self.peek() {
            Some(Token::Not) => {
                self.next();
                self.descend()?;
                let value = !self.negation()?;
                self.depth -= 1;
                Ok(value)
            }
            _ => self.comparison(),
        }
    }

    fn comparison(&mut self) -> Result<bool, err::ExpressionError> {
        let first = self.atom()?;
        if self.peek() != Some(Token::Iff) {
            return Ok(first);
        }

        let mut previous = first;
        let mut value = true;
        while self.peek() == Some(Token::Iff) {
            self.next();
            let other = self.atom()?;
            value = value && previous == other;
            previous = other;
        }
        Ok(value)
    }

    fn atom(&mut self) -> Result<bool, err::ExpressionError> {
        match self.next() {
            Some(Token::Value(value)) => Ok(value),

            Some(Token::Open) => {
                self.descend()?;
                let value = self.disjunction()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token::Close) => Ok(value),
                    Some(other) => Err(err::ExpressionError::UnexpectedToken(other.to_string())),
                    None => Err(err::ExpressionError::UnexpectedEnd),
                }
            }

            Some(Token::Variable(_)) => Err(err::ExpressionError::Unsubstituted),

            Some(other) => Err(err::ExpressionError::UnexpectedToken(other.to_string())),

            None => Err(err::ExpressionError::UnexpectedEnd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Token = Token::Value(true);
    const F: Token = Token::Value(false);

    #[test]
    fn constants() {
        assert_eq!(evaluate_tokens(&[T]), Ok(true));
        assert_eq!(evaluate_tokens(&[F]), Ok(false));
    }

    #[test]
    fn negation_before_conjunction() {
        // (not True) and False, rather than not (True and False)
        assert_eq!(evaluate_tokens(&[Token::Not, T, Token::And, F]), Ok(false));
        assert_eq!(evaluate_tokens(&[Token::Not, Token::Not, T]), Ok(true));
    }

    #[test]
    fn conjunction_before_disjunction() {
        // True or (False and False)
        assert_eq!(
            evaluate_tokens(&[T, Token::Or, F, Token::And, F]),
            Ok(true)
        );
    }

    #[test]
    fn biconditional_tightest() {
        // True or (True == False)
        assert_eq!(
            evaluate_tokens(&[T, Token::Or, T, Token::Iff, F]),
            Ok(true)
        );
        // False and (False == False)
        assert_eq!(
            evaluate_tokens(&[F, Token::And, F, Token::Iff, F]),
            Ok(false)
        );
        // not (True == False)
        assert_eq!(
            evaluate_tokens(&[Token::Not, T, Token::Iff, F]),
            Ok(true)
        );
    }

    #[test]
    fn biconditional_chains() {
        // (False == False) and (False == False)
        assert_eq!(evaluate_tokens(&[F, Token::Iff, F, Token::Iff, F]), Ok(true));
        // (True == False) and (False == False)
        assert_eq!(evaluate_tokens(&[T, Token::Iff, F, Token::Iff, F]), Ok(false));
        assert_eq!(evaluate_tokens(&[T, Token::Iff, T, Token::Iff, T]), Ok(true));
    }

    #[test]
    fn biconditional_operands() {
        assert_eq!(
            evaluate_tokens(&[T, Token::Iff, Token::Not, F]),
            Err(err::ExpressionError::UnexpectedToken("not".to_string()))
        );
        assert_eq!(
            evaluate_tokens(&[T, Token::Iff, Token::Open, Token::Not, F, Token::Close]),
            Ok(true)
        );
    }

    #[test]
    fn groups() {
        assert_eq!(
            evaluate_tokens(&[Token::Not, Token::Open, T, Token::Or, F, Token::Close]),
            Ok(false)
        );
        assert_eq!(
            evaluate_tokens(&[Token::Open, Token::Open, T, Token::Close, Token::Close]),
            Ok(true)
        );
    }

    #[test]
    fn errors() {
        assert_eq!(evaluate_tokens(&[]), Err(err::ExpressionError::Empty));

        assert_eq!(
            evaluate_tokens(&[Token::Open, T]),
            Err(err::ExpressionError::UnbalancedParentheses)
        );
        assert_eq!(
            evaluate_tokens(&[Token::Close, T, Token::Open]),
            Err(err::ExpressionError::UnbalancedParentheses)
        );

        assert_eq!(
            evaluate_tokens(&[T, Token::And]),
            Err(err::ExpressionError::UnexpectedEnd)
        );
        assert_eq!(
            evaluate_tokens(&[Token::And, T]),
            Err(err::ExpressionError::UnexpectedToken("and".to_string()))
        );
        assert_eq!(
            evaluate_tokens(&[Token::Open, Token::Close]),
            Err(err::ExpressionError::UnexpectedToken(")".to_string()))
        );
        assert_eq!(
            evaluate_tokens(&[T, F]),
            Err(err::ExpressionError::TrailingTokens)
        );
        assert_eq!(
            evaluate_tokens(&[Token::Variable(crate::structures::Actor::A)]),
            Err(err::ExpressionError::Unsubstituted)
        );
    }

    #[test]
    fn nesting_limit() {
        let mut tokens = vec![Token::Not; NESTING_LIMIT + 1];
        tokens.push(T);
        assert_eq!(
            evaluate_tokens(&tokens),
            Err(err::ExpressionError::NestingLimit)
        );

        let mut tokens = vec![Token::Not; NESTING_LIMIT];
        tokens.push(T);
        assert_eq!(evaluate_tokens(&tokens), Ok(true));
    }
}
