use std::collections::BTreeMap;
use std::fmt;

use log::warn;

use crate::expression::Equation;

/// Count of numbers with a found equation versus numbers attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub solved: usize,
    pub total: usize,
}

impl Summary {
    pub fn unsolved(&self) -> usize {
        self.total - self.solved
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} of {} numbers solved", self.solved, self.total)
    }
}

/// Number to first equation found, or `None` when the template space was
/// exhausted without success. Each number is recorded at most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionMap {
    entries: BTreeMap<u32, Option<Equation>>,
}

impl SolutionMap {
    /// Record the outcome for `number`. Returns `false`, keeping the existing
    /// entry, if the number was already recorded.
    pub fn record(&mut self, number: u32, equation: Option<Equation>) -> bool {
        if self.entries.contains_key(&number) {
            warn!("Ignoring second result for {}", number);
            return false;
        }
        self.entries.insert(number, equation);
        true
    }

    /// Combine two partial maps built over disjoint number ranges.
    pub fn merge(mut self, other: SolutionMap) -> SolutionMap {
        for (number, equation) in other.entries {
            self.record(number, equation);
        }
        self
    }

    /// `None` if the number was never searched, `Some(None)` if no equation was found.
    pub fn get(&self, number: u32) -> Option<Option<&Equation>> {
        self.entries.get(&number).map(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Option<&Equation>)> {
        self.entries.iter().map(|(n, eq)| (*n, eq.as_ref()))
    }

    pub fn solved(&self) -> impl Iterator<Item = (u32, &Equation)> {
        self.entries
            .iter()
            .filter_map(|(n, eq)| eq.as_ref().map(|eq| (*n, eq)))
    }

    pub fn unsolved(&self) -> impl Iterator<Item = u32> {
        self.entries
            .iter()
            .filter(|(_, eq)| eq.is_none())
            .map(|(n, _)| *n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            solved: self.solved().count(),
            total: self.len(),
        }
    }
}
