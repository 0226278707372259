use std::fmt;

use crate::catalog::CatalogError;
use crate::solver::constants::{NUM_DIGITS, SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapKind {
    Parens,
    Sqrt,
}

/// A contiguous run of digit positions (zero-based, inclusive) wrapped as one operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrap {
    pub first: usize,
    pub last: usize,
    pub kind: WrapKind,
}

/// Equation skeleton: where the equality falls and which span, if any, is wrapped.
///
/// Slot `k` sits between digit `k` and digit `k + 1`; the equality replaces the
/// operator of slot `equals_slot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    equals_slot: usize,
    wrap: Option<Wrap>,
}

impl Template {
    const fn plain(equals_slot: usize) -> Self {
        Self {
            equals_slot,
            wrap: None,
        }
    }

    const fn wrapped(equals_slot: usize, first: usize, last: usize, kind: WrapKind) -> Self {
        Self {
            equals_slot,
            wrap: Some(Wrap { first, last, kind }),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the equality slot does not exist, or if the wrapped
    /// span is empty, out of range, or crosses the equality.
    pub fn new(equals_slot: usize, wrap: Option<Wrap>) -> Result<Self, CatalogError> {
        let template = Self { equals_slot, wrap };
        let invalid = |reason: &str| CatalogError::InvalidTemplate {
            name: template.to_string(),
            reason: reason.to_string(),
        };

        if equals_slot >= SLOTS {
            return Err(invalid("equality slot out of range"));
        }
        if let Some(w) = wrap {
            if w.first > w.last || w.last >= NUM_DIGITS {
                return Err(invalid("wrapped span out of range"));
            }
            if w.first <= equals_slot && w.last > equals_slot {
                return Err(invalid("wrapped span crosses the equality"));
            }
        }
        Ok(template)
    }

    pub fn equals_slot(&self) -> usize {
        self.equals_slot
    }

    pub fn wrap(&self) -> Option<Wrap> {
        self.wrap
    }
}

impl fmt::Display for Template {
    /// Renders the skeleton, e.g. `d1 == sqrt(d2 op2 d3) op3 d4`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in 0..NUM_DIGITS {
            if let Some(w) = self.wrap.filter(|w| w.first == digit) {
                match w.kind {
                    WrapKind::Parens => write!(f, "(")?,
                    WrapKind::Sqrt => write!(f, "sqrt(")?,
                }
            }
            write!(f, "d{}", digit + 1)?;
            if self.wrap.is_some_and(|w| w.last == digit) {
                write!(f, ")")?;
            }
            if digit < SLOTS {
                if digit == self.equals_slot {
                    write!(f, " == ")?;
                } else {
                    write!(f, " op{} ", digit + 1)?;
                }
            }
        }
        Ok(())
    }
}

/// Standard skeletons in search order
pub(crate) const STANDARD_TEMPLATES: [Template; 15] = [
    // d1 == ...
    Template::plain(0),
    Template::wrapped(0, 1, 2, WrapKind::Parens),
    Template::wrapped(0, 2, 3, WrapKind::Parens),
    Template::wrapped(0, 0, 0, WrapKind::Sqrt),
    Template::wrapped(0, 1, 2, WrapKind::Sqrt),
    Template::wrapped(0, 2, 3, WrapKind::Sqrt),
    Template::wrapped(0, 1, 3, WrapKind::Sqrt),
    // d1 op1 d2 == d3 op3 d4
    Template::plain(1),
    // ... == d4
    Template::plain(2),
    Template::wrapped(2, 0, 1, WrapKind::Parens),
    Template::wrapped(2, 1, 2, WrapKind::Parens),
    Template::wrapped(2, 3, 3, WrapKind::Sqrt),
    Template::wrapped(2, 0, 1, WrapKind::Sqrt),
    Template::wrapped(2, 1, 2, WrapKind::Sqrt),
    Template::wrapped(2, 0, 2, WrapKind::Sqrt),
];
