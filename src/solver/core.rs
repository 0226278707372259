use log::{debug, trace};

use crate::catalog::OperatorCatalog;
use crate::expression::{Equation, FailureKind};
use crate::iterator::CandidateIterator;
use crate::solver::constants::NUM_DIGITS;
use crate::solver::errors::SolverError;
use crate::template::TemplateSet;
use crate::utils::split_digits;

/// Finds the first true equation for a number under a fixed search order
#[derive(Debug, Clone, Default)]
pub struct EquationSearcher {
    catalog: OperatorCatalog,
    templates: TemplateSet,
}

impl EquationSearcher {
    /// Searcher over the standard catalog and template set
    pub fn new() -> Self {
        Self::with_parts(OperatorCatalog::standard(), TemplateSet::standard())
    }

    pub fn with_parts(catalog: OperatorCatalog, templates: TemplateSet) -> Self {
        Self { catalog, templates }
    }

    pub fn catalog(&self) -> &OperatorCatalog {
        &self.catalog
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// # Errors
    ///
    /// Returns an error only if `number` does not have exactly four digits.
    /// Every candidate failure is contained; `Ok(None)` means the template
    /// space was searched exhaustively without success.
    pub fn search(&self, number: u32) -> Result<Option<Equation>, SolverError> {
        let digits = split_digits(number)?;
        Ok(self.search_digits(digits))
    }

    /// Search using already split digits
    pub fn search_digits(&self, digits: [u8; NUM_DIGITS]) -> Option<Equation> {
        let mut tried = 0_usize;
        let mut zero_divisors = 0_usize;
        let mut invalid_operands = 0_usize;
        let mut invalid_expressions = 0_usize;

        for candidate in CandidateIterator::new(digits, &self.catalog, &self.templates) {
            tried += 1;

            if candidate.equation.has_literal_zero_divisor() {
                zero_divisors += 1;
                continue;
            }

            match candidate.equation.holds() {
                Ok(true) => {
                    debug!(
                        "Found {} for {:?} after {} candidates (template {})",
                        candidate.equation, digits, tried, candidate.template_index
                    );
                    return Some(candidate.equation);
                }
                Ok(false) => {}
                Err(e) => {
                    trace!("Skipping {}: {}", candidate.equation, e);
                    match e.kind() {
                        FailureKind::InvalidOperand => invalid_operands += 1,
                        FailureKind::InvalidExpression => invalid_expressions += 1,
                    }
                }
            }
        }

        debug!(
            "No equation for {:?}: {} candidates, {} zero divisors, {} invalid operands, {} invalid expressions",
            digits, tried, zero_divisors, invalid_operands, invalid_expressions
        );
        None
    }
}
