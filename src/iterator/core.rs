use log::debug;

use crate::catalog::{OperatorAssignment, OperatorCatalog, OperatorToken};
use crate::solver::constants::{NUM_DIGITS, SLOTS};
use crate::template::TemplateSet;

use super::types::Candidate;

/// Cartesian power of the catalog in lexicographic order: slot 1 varies slowest.
#[derive(Debug, Clone)]
pub struct AssignmentIterator<'a> {
    catalog: &'a OperatorCatalog,
    indices: [usize; SLOTS],
    exhausted: bool,
}

impl<'a> AssignmentIterator<'a> {
    pub fn new(catalog: &'a OperatorCatalog) -> Self {
        Self {
            catalog,
            indices: [0; SLOTS],
            exhausted: catalog.is_empty(),
        }
    }

    /// Number of assignments a fresh iterator yields
    pub fn total(catalog: &OperatorCatalog) -> usize {
        catalog.len().pow(SLOTS as u32)
    }

    /// Odometer step from the fastest (last) slot; exhausted once slot 1 wraps.
    fn advance(&mut self) {
        let len = self.catalog.len();
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < len {
                return;
            }
            *index = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for AssignmentIterator<'_> {
    type Item = OperatorAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let tokens = self.catalog.tokens();
        let assignment = self.indices.map(|i| tokens[i]);
        self.advance();
        Some(assignment)
    }
}

/// Candidates for one number, assignment-major and template-minor.
///
/// A template ignores the token in its equality slot, so candidates whose
/// equality-slot token is not the first catalog token are skipped: each is
/// identical to an earlier candidate that has the first token there.
#[derive(Debug, Clone)]
pub struct CandidateIterator<'a> {
    digits: [u8; NUM_DIGITS],
    assignments: AssignmentIterator<'a>,
    templates: &'a TemplateSet,
    first_token: Option<OperatorToken>,
    current: Option<OperatorAssignment>,
    template_index: usize,
}

impl<'a> CandidateIterator<'a> {
    pub fn new(
        digits: [u8; NUM_DIGITS],
        catalog: &'a OperatorCatalog,
        templates: &'a TemplateSet,
    ) -> Self {
        debug!(
            "Enumerating candidates for digits {:?}: {} assignments x {} templates",
            digits,
            AssignmentIterator::total(catalog),
            templates.len()
        );
        Self {
            digits,
            assignments: AssignmentIterator::new(catalog),
            templates,
            first_token: catalog.get(0),
            current: None,
            template_index: 0,
        }
    }
}

impl Iterator for CandidateIterator<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let assignment = match self.current {
                Some(assignment) => assignment,
                None => {
                    let assignment = self.assignments.next()?;
                    self.current = Some(assignment);
                    self.template_index = 0;
                    assignment
                }
            };

            while let Some(template) = self.templates.get(self.template_index) {
                let template_index = self.template_index;
                self.template_index += 1;

                if Some(assignment[template.equals_slot()]) != self.first_token {
                    continue;
                }

                return Some(Candidate {
                    assignment,
                    template_index,
                    equation: template.instantiate(&self.digits, &assignment),
                });
            }

            self.current = None;
        }
    }
}
