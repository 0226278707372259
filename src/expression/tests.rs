use crate::expression::ast::{Equation, Expression};
use crate::expression::errors::{ExpressionError, FailureKind, ParseError};

fn num(n: f64) -> Box<Expression> {
    Box::new(Expression::Number(n))
}

#[test]
fn test_sqrt_of_perfect_square() {
    let expr = Expression::Sqrt(num(49.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 7.0).abs() < 1e-9);
    }
}

#[test]
fn test_sqrt_of_negative_is_invalid_operand() {
    let expr = Expression::Sqrt(Box::new(Expression::Sub(num(1.0), num(5.0))));
    let result = expr.evaluate();
    assert_eq!(result, Err(ExpressionError::NegativeSqrt(-4.0)));
    if let Err(e) = result {
        assert_eq!(e.kind(), FailureKind::InvalidOperand);
    }
}

#[test]
fn test_factorial_of_sqrt_result() {
    let expr = Expression::Factorial(Box::new(Expression::Sqrt(num(9.0))));
    assert_eq!(expr.evaluate(), Ok(6.0));
}

#[test]
fn test_factorial_of_fraction_is_rejected() {
    let expr = Expression::Factorial(Box::new(Expression::Div(num(3.0), num(2.0))));
    assert_eq!(expr.evaluate(), Err(ExpressionError::FactorialDomain(1.5)));
}

#[test]
fn test_factorial_of_negative_is_rejected() {
    let expr = Expression::Factorial(Box::new(Expression::Sub(num(2.0), num(3.0))));
    assert_eq!(expr.evaluate(), Err(ExpressionError::FactorialDomain(-1.0)));
}

#[test]
fn test_division_by_computed_zero() {
    let expr = Expression::Div(num(4.0), Box::new(Expression::Sub(num(2.0), num(2.0))));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_modulo_by_zero() {
    let expr = Expression::Mod(num(4.0), num(0.0));
    let result = expr.evaluate();
    assert_eq!(result, Err(ExpressionError::ModuloByZero));
    if let Err(e) = result {
        assert_eq!(e.kind(), FailureKind::InvalidOperand);
    }
}

#[test]
fn test_non_finite_is_invalid_expression() {
    assert_eq!(ExpressionError::NonFinite.kind(), FailureKind::InvalidExpression);
    let expr = Expression::Mul(
        Box::new(Expression::Factorial(num(170.0))),
        Box::new(Expression::Factorial(num(170.0))),
    );
    assert_eq!(expr.evaluate(), Err(ExpressionError::NonFinite));
}

#[test]
fn test_literal_zero_divisor_detection() {
    let nested = Expression::Add(
        num(1.0),
        Box::new(Expression::Sqrt(Box::new(Expression::Mod(num(3.0), num(0.0))))),
    );
    assert!(nested.has_literal_zero_divisor());

    // A divisor that merely evaluates to zero is not a literal zero
    let computed = Expression::Div(num(1.0), Box::new(Expression::Sub(num(1.0), num(1.0))));
    assert!(!computed.has_literal_zero_divisor());

    let zero_numerator = Expression::Div(num(0.0), num(3.0));
    assert!(!zero_numerator.has_literal_zero_divisor());
}

#[test]
fn test_equation_holds_with_tolerance() {
    // sqrt(2)*sqrt(2) is not bit-exactly 2
    let eq = Equation::new(
        Expression::Number(2.0),
        Expression::Mul(
            Box::new(Expression::Sqrt(num(2.0))),
            Box::new(Expression::Sqrt(num(2.0))),
        ),
    );
    assert_eq!(eq.holds(), Ok(true));

    let eq = Equation::new(Expression::Number(2.0), Expression::Number(3.0));
    assert_eq!(eq.holds(), Ok(false));
}

#[test]
fn test_equation_propagates_side_errors() {
    let eq = Equation::new(Expression::Number(1.0), Expression::Div(num(1.0), num(0.0)));
    assert_eq!(eq.holds(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_expression_display_precedence() {
    let expr = Expression::Sub(num(1.0), Box::new(Expression::Mul(num(2.0), num(3.0))));
    assert_eq!(expr.to_string(), "1-2*3");

    let expr = Expression::Mul(Box::new(Expression::Add(num(1.0), num(2.0))), num(3.0));
    assert_eq!(expr.to_string(), "(1+2)*3");

    let expr = Expression::Sub(num(1.0), Box::new(Expression::Sub(num(2.0), num(3.0))));
    assert_eq!(expr.to_string(), "1-(2-3)");
}

#[test]
fn test_equation_display() {
    let eq = Equation::new(
        Expression::Sqrt(num(4.0)),
        Expression::Mul(
            Box::new(Expression::Factorial(num(2.0))),
            Box::new(Expression::Paren(Box::new(Expression::Mod(num(7.0), num(3.0))))),
        ),
    );
    assert_eq!(eq.to_string(), "sqrt(4)==factorial(2)*(7%3)");
}

#[test]
fn test_parse_round_trip() {
    let text = "sqrt(4)==factorial(2)*(7%3)";
    let parsed: Result<Equation, _> = text.parse();
    assert!(parsed.is_ok());
    if let Ok(eq) = parsed {
        assert_eq!(eq.to_string(), text);
        assert_eq!(eq.holds(), Ok(true));
    }
}

#[test]
fn test_parse_respects_precedence() {
    let parsed: Result<Expression, _> = "1+2*3-4".parse();
    assert_eq!(
        parsed,
        Ok(Expression::Sub(
            Box::new(Expression::Add(
                num(1.0),
                Box::new(Expression::Mul(num(2.0), num(3.0)))
            )),
            num(4.0)
        ))
    );
}

#[test]
fn test_parse_ignores_whitespace() {
    let parsed: Result<Equation, _> = " 1 + 1 == 1 + 1 ".parse();
    assert!(parsed.is_ok_and(|eq| eq.to_string() == "1+1==1+1"));
}

#[test]
fn test_parse_rejects_foreign_syntax() {
    assert_eq!(
        "1==exp(1)".parse::<Equation>(),
        Err(ParseError::UnknownFunction("exp".to_string()))
    );
    assert_eq!("1+1".parse::<Equation>(), Err(ParseError::MissingEquality));
    assert_eq!("1==1==1".parse::<Equation>(), Err(ParseError::MissingEquality));
    assert_eq!("1==2+".parse::<Equation>(), Err(ParseError::UnexpectedEnd));
    assert_eq!(
        "1==2**3".parse::<Equation>(),
        Err(ParseError::UnexpectedChar {
            found: '*',
            position: 5
        })
    );
    assert!("__import__('os')".parse::<Expression>().is_err());
}
