use std::str::FromStr;

use crate::expression::ast::{Equation, Expression};
use crate::expression::errors::ParseError;

/// Recursive descent reader for the textual form produced by `Display`.
///
/// Grammar:
/// ```text
/// equation   := expression "==" expression
/// expression := term (("+" | "-") term)*
/// term       := factor (("*" | "/" | "%") factor)*
/// factor     := number | "(" expression ")" | ("sqrt" | "factorial") "(" expression ")"
/// ```
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.input[self.pos..].chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn expect(&mut self, wanted: char) -> Result<(), ParseError> {
        let position = self.pos;
        match self.bump() {
            Some(c) if c == wanted => Ok(()),
            Some(found) => Err(ParseError::UnexpectedChar { found, position }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(found) => Err(ParseError::UnexpectedChar {
                found,
                position: self.pos,
            }),
        }
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.bump();
            let right = Box::new(self.term()?);
            left = match op {
                '+' => Expression::Add(Box::new(left), right),
                _ => Expression::Sub(Box::new(left), right),
            };
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.factor()?;
        while let Some(op @ ('*' | '/' | '%')) = self.peek() {
            self.bump();
            let right = Box::new(self.factor()?);
            left = match op {
                '*' => Expression::Mul(Box::new(left), right),
                '/' => Expression::Div(Box::new(left), right),
                _ => Expression::Mod(Box::new(left), right),
            };
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEnd),
            Some(c) if c.is_ascii_digit() => self.number(),
            Some('(') => {
                self.bump();
                let inner = self.expression()?;
                self.expect(')')?;
                Ok(Expression::Paren(Box::new(inner)))
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let name = self.identifier();
                self.expect('(')?;
                let inner = Box::new(self.expression()?);
                self.expect(')')?;
                match name {
                    "sqrt" => Ok(Expression::Sqrt(inner)),
                    "factorial" => Ok(Expression::Factorial(inner)),
                    other => Err(ParseError::UnknownFunction(other.to_string())),
                }
            }
            Some(found) => Err(ParseError::UnexpectedChar {
                found,
                position: self.pos,
            }),
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let input = self.input;
        let start = self.pos;
        while let Some(c) = input[self.pos..].chars().next() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &input[start..self.pos]
    }

    fn identifier(&mut self) -> &'a str {
        self.take_while(|c| c.is_ascii_alphabetic())
    }

    fn number(&mut self) -> Result<Expression, ParseError> {
        let position = self.pos;
        let text = self.take_while(|c| c.is_ascii_digit() || c == '.');
        text.parse::<f64>()
            .map(Expression::Number)
            .map_err(|_| ParseError::UnexpectedChar {
                found: '.',
                position,
            })
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let expr = parser.expression()?;
        parser.finish()?;
        Ok(expr)
    }
}

impl FromStr for Equation {
    type Err = ParseError;

    /// Parses `lhs==rhs` where both sides use the closed expression grammar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.matches("==").count() != 1 {
            return Err(ParseError::MissingEquality);
        }

        let mut parser = Parser::new(s);
        let lhs = parser.expression()?;
        parser.expect('=')?;
        parser.expect('=')?;
        let rhs = parser.expression()?;
        parser.finish()?;
        Ok(Equation::new(lhs, rhs))
    }
}
