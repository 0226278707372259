/// Closed grammar of expressions that can be built from digits
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Mod(Box<Expression>, Box<Expression>),
    Paren(Box<Expression>),
    Sqrt(Box<Expression>),
    Factorial(Box<Expression>),
}

/// Two sides of a candidate equation, compared for equality
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub lhs: Expression,
    pub rhs: Expression,
}

impl Equation {
    pub fn new(lhs: Expression, rhs: Expression) -> Self {
        Self { lhs, rhs }
    }
}

impl Expression {
    /// True if any division or modulo in the tree has the literal `0` as divisor.
    pub fn has_literal_zero_divisor(&self) -> bool {
        match self {
            Expression::Number(_) => false,
            Expression::Div(l, r) | Expression::Mod(l, r) => {
                matches!(r.as_ref(), Expression::Number(n) if *n == 0.0)
                    || l.has_literal_zero_divisor()
                    || r.has_literal_zero_divisor()
            }
            Expression::Add(l, r) | Expression::Sub(l, r) | Expression::Mul(l, r) => {
                l.has_literal_zero_divisor() || r.has_literal_zero_divisor()
            }
            Expression::Paren(e) | Expression::Sqrt(e) | Expression::Factorial(e) => {
                e.has_literal_zero_divisor()
            }
        }
    }

    /// Digit literals in left-to-right order
    pub fn digits(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.collect_numbers(&mut out);
        out
    }

    fn collect_numbers(&self, out: &mut Vec<f64>) {
        match self {
            Expression::Number(n) => out.push(*n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r)
            | Expression::Mod(l, r) => {
                l.collect_numbers(out);
                r.collect_numbers(out);
            }
            Expression::Paren(e) | Expression::Sqrt(e) | Expression::Factorial(e) => {
                e.collect_numbers(out)
            }
        }
    }
}

impl Equation {
    pub fn has_literal_zero_divisor(&self) -> bool {
        self.lhs.has_literal_zero_divisor() || self.rhs.has_literal_zero_divisor()
    }

    /// Digit literals of both sides, left side first
    pub fn digits(&self) -> Vec<f64> {
        let mut out = self.lhs.digits();
        out.extend(self.rhs.digits());
        out
    }
}
