//! Arithmetic for the `time` directive.
//!
//! A recursive-descent evaluator over numbers, `+ - * /`, unary signs and
//! parentheses. There are no names, calls or other operators.
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := number | '(' expr ')'
//! ```

use thiserror::Error;

/// Nesting limit for parentheses and unary signs.
const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected '{0}' at offset {1}")]
    Unexpected(char, usize),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("expression nested too deeply")]
    TooDeep,
}

struct ExprParser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl ExprParser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().filter(|c| !c.is_whitespace()).collect(),
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn parse(&mut self) -> Result<f64, ExprError> {
        if self.chars.is_empty() {
            return Err(ExprError::Empty);
        }
        let value = self.expr()?;
        match self.peek() {
            None => Ok(value),
            Some(c) => Err(ExprError::Unexpected(c, self.pos)),
        }
    }

    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut value = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, ExprError> {
        let mut value = self.unary()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            if op == '*' {
                value *= rhs;
            } else {
                if rhs == 0.0 {
                    return Err(ExprError::DivisionByZero);
                }
                value /= rhs;
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, ExprError> {
        match self.peek() {
            Some(sign @ ('+' | '-')) => {
                self.pos += 1;
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(if sign == '-' { -value } else { value })
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, ExprError> {
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                self.descend()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.peek() {
                    Some(')') => {
                        self.pos += 1;
                        Ok(value)
                    }
                    Some(c) => Err(ExprError::Unexpected(c, self.pos)),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(ExprError::Unexpected(c, self.pos)),
            None => Err(ExprError::UnexpectedEnd),
        }
    }

    fn number(&mut self) -> Result<f64, ExprError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map_err(|_| ExprError::InvalidNumber(text))
    }

    fn descend(&mut self) -> Result<(), ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            Err(ExprError::TooDeep)
        } else {
            Ok(())
        }
    }
}

/// Evaluate an arithmetic expression such as `1/4` or `(3+1)*2`.
pub fn evaluate(source: &str) -> Result<f64, ExprError> {
    ExprParser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn integer() {
        assert_eq!(evaluate("4"), Ok(4.0));
    }

    #[test]
    fn fraction() {
        assert_eq!(evaluate("1/4"), Ok(0.25));
    }

    #[test]
    fn decimal() {
        assert_eq!(evaluate("1.5"), Ok(1.5));
        assert_eq!(evaluate(".5"), Ok(0.5));
    }

    #[test]
    fn precedence() {
        assert_eq!(evaluate("1+2*3"), Ok(7.0));
        assert_eq!(evaluate("(1+2)*3"), Ok(9.0));
        assert_eq!(evaluate("8/2/2"), Ok(2.0));
        assert_eq!(evaluate("8-2-2"), Ok(4.0));
    }

    #[test]
    fn unary_signs() {
        assert_eq!(evaluate("-2*-3"), Ok(6.0));
        assert_eq!(evaluate("+3"), Ok(3.0));
    }

    #[test]
    fn whitespace_ignored() {
        assert_approx_eq!(evaluate(" 3 / ( 1 + 1 ) ").unwrap(), 1.5);
    }

    #[test]
    fn names_rejected() {
        assert_eq!(evaluate("x"), Err(ExprError::Unexpected('x', 0)));
        assert!(evaluate("__import__('os')").is_err());
        assert!(evaluate("2**3").is_err());
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(evaluate(""), Err(ExprError::Empty));
        assert_eq!(evaluate("   "), Err(ExprError::Empty));
    }

    #[test]
    fn incomplete_rejected() {
        assert_eq!(evaluate("1+"), Err(ExprError::UnexpectedEnd));
        assert_eq!(evaluate("(1+2"), Err(ExprError::UnexpectedEnd));
        assert_eq!(evaluate("1)"), Err(ExprError::Unexpected(')', 1)));
    }

    #[test]
    fn bad_number() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(ExprError::InvalidNumber("1.2.3".into()))
        );
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(evaluate("1/0"), Err(ExprError::DivisionByZero));
        assert_eq!(evaluate("1/(2-2)"), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn deep_nesting_rejected() {
        let deep = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(evaluate(&deep), Err(ExprError::TooDeep));
        let shallow = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        assert_eq!(evaluate(&shallow), Ok(1.0));
    }
}
