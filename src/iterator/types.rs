use crate::catalog::OperatorAssignment;
use crate::expression::Equation;

/// One concrete substitution of a number's digits and an assignment into a template
#[derive(Debug, Clone)]
pub struct Candidate {
    pub assignment: OperatorAssignment,
    pub template_index: usize,
    pub equation: Equation,
}
