use crate::catalog::{BaseOperator, OperatorAssignment};
use crate::expression::{Equation, Expression};
use crate::solver::constants::NUM_DIGITS;
use crate::template::skeleton::{Template, WrapKind};

impl WrapKind {
    fn apply(self, inner: Expression) -> Expression {
        match self {
            WrapKind::Parens => Expression::Paren(Box::new(inner)),
            WrapKind::Sqrt => Expression::Sqrt(Box::new(inner)),
        }
    }
}

fn close_product(operand: Expression, product: &mut Option<(Expression, BaseOperator)>) -> Expression {
    match product.take() {
        Some((acc, op)) => op.combine(acc, operand),
        None => operand,
    }
}

/// Fold `operand op operand op ... last` so that `* / %` bind before `+ -`,
/// both left associative.
fn fold_by_precedence(links: Vec<(Expression, BaseOperator)>, last: Expression) -> Expression {
    let additive = BaseOperator::Add.precedence();
    let mut sum: Option<(Expression, BaseOperator)> = None;
    let mut product: Option<(Expression, BaseOperator)> = None;

    for (operand, op) in links {
        let term = close_product(operand, &mut product);
        if op.precedence() > additive {
            product = Some((term, op));
        } else {
            sum = Some(match sum.take() {
                Some((acc, pending)) => (pending.combine(acc, term), op),
                None => (term, op),
            });
        }
    }

    let term = close_product(last, &mut product);
    match sum {
        Some((acc, pending)) => pending.combine(acc, term),
        None => term,
    }
}

impl Template {
    /// Substitute digits and operator tokens into this skeleton.
    ///
    /// The token in the equality slot is not used.
    pub fn instantiate(
        &self,
        digits: &[u8; NUM_DIGITS],
        assignment: &OperatorAssignment,
    ) -> Equation {
        let lhs = self.build_chain(digits, assignment, 0, self.equals_slot(), true);
        let rhs = self.build_chain(
            digits,
            assignment,
            self.equals_slot() + 1,
            NUM_DIGITS - 1,
            true,
        );
        Equation::new(lhs, rhs)
    }

    fn build_chain(
        &self,
        digits: &[u8; NUM_DIGITS],
        assignment: &OperatorAssignment,
        first: usize,
        last: usize,
        allow_wrap: bool,
    ) -> Expression {
        let (mut end, mut operand) = self.operand_at(digits, assignment, first, last, allow_wrap);
        let mut links = Vec::new();

        while end < last {
            let token = assignment[end];
            links.push((token.modifier.apply(operand), token.base));
            (end, operand) = self.operand_at(digits, assignment, end + 1, last, allow_wrap);
        }

        fold_by_precedence(links, operand)
    }

    /// The operand starting at digit `index`: either that digit, or the wrapped
    /// span beginning there. Returns the operand with the position of its last digit.
    fn operand_at(
        &self,
        digits: &[u8; NUM_DIGITS],
        assignment: &OperatorAssignment,
        index: usize,
        last: usize,
        allow_wrap: bool,
    ) -> (usize, Expression) {
        match self.wrap() {
            Some(w) if allow_wrap && w.first == index && w.last <= last => {
                let inner = self.build_chain(digits, assignment, w.first, w.last, false);
                (w.last, w.kind.apply(inner))
            }
            _ => (index, Expression::Number(f64::from(digits[index]))),
        }
    }
}
