use std::fmt;

use crate::expression::ast::{Equation, Expression};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) | Expression::Mod(_, _) => 2,
                Expression::Number(_)
                | Expression::Paren(_)
                | Expression::Sqrt(_)
                | Expression::Factorial(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        // Left-associative binary operator at `level`: the right operand needs
        // parentheses at the same level, the left one only below it.
        fn write_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            symbol: char,
            r: &Expression,
            level: u8,
        ) -> fmt::Result {
            write_with_parens(f, l, precedence(l) < level)?;
            write!(f, "{}", symbol)?;
            write_with_parens(f, r, precedence(r) <= level)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => write_binary(f, l, '+', r, 1),
                Expression::Sub(l, r) => write_binary(f, l, '-', r, 1),
                Expression::Mul(l, r) => write_binary(f, l, '*', r, 2),
                Expression::Div(l, r) => write_binary(f, l, '/', r, 2),
                Expression::Mod(l, r) => write_binary(f, l, '%', r, 2),
                Expression::Paren(e) => write_with_parens(f, e, true),
                Expression::Sqrt(e) => {
                    write!(f, "sqrt(")?;
                    fmt_expression(f, e)?;
                    write!(f, ")")
                }
                Expression::Factorial(e) => {
                    write!(f, "factorial(")?;
                    fmt_expression(f, e)?;
                    write!(f, ")")
                }
            }
        }

        fmt_expression(f, self)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}=={}", self.lhs, self.rhs)
    }
}
