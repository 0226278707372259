use std::fmt;

use crate::expression::Expression;

/// Binary operator placed in a digit slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BaseOperator {
    pub const ALL: [BaseOperator; 5] = [
        BaseOperator::Add,
        BaseOperator::Sub,
        BaseOperator::Mul,
        BaseOperator::Div,
        BaseOperator::Mod,
    ];

    pub fn symbol(self) -> char {
        match self {
            BaseOperator::Add => '+',
            BaseOperator::Sub => '-',
            BaseOperator::Mul => '*',
            BaseOperator::Div => '/',
            BaseOperator::Mod => '%',
        }
    }

    /// Binding strength; higher binds tighter. All operators are left associative.
    pub fn precedence(self) -> u8 {
        match self {
            BaseOperator::Add | BaseOperator::Sub => 1,
            BaseOperator::Mul | BaseOperator::Div | BaseOperator::Mod => 2,
        }
    }

    pub fn combine(self, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match self {
            BaseOperator::Add => Expression::Add(l, r),
            BaseOperator::Sub => Expression::Sub(l, r),
            BaseOperator::Mul => Expression::Mul(l, r),
            BaseOperator::Div => Expression::Div(l, r),
            BaseOperator::Mod => Expression::Mod(l, r),
        }
    }
}

/// Unary wrapper applied to the operand on the left of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    None,
    Factorial,
    Sqrt,
}

impl Modifier {
    pub const ALL: [Modifier; 3] = [Modifier::None, Modifier::Factorial, Modifier::Sqrt];

    pub fn apply(self, operand: Expression) -> Expression {
        match self {
            Modifier::None => operand,
            Modifier::Factorial => Expression::Factorial(Box::new(operand)),
            Modifier::Sqrt => Expression::Sqrt(Box::new(operand)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorToken {
    pub base: BaseOperator,
    pub modifier: Modifier,
}

impl OperatorToken {
    pub const fn new(base: BaseOperator, modifier: Modifier) -> Self {
        Self { base, modifier }
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.modifier {
            Modifier::None => write!(f, "{}", self.base.symbol()),
            Modifier::Factorial => write!(f, "factorial(_){}", self.base.symbol()),
            Modifier::Sqrt => write!(f, "sqrt(_){}", self.base.symbol()),
        }
    }
}
