//! Ordered catalog of operator tokens

mod errors;
mod token;

pub use errors::CatalogError;
pub use token::{BaseOperator, Modifier, OperatorToken};

use log::debug;

use crate::solver::constants::SLOTS;

/// One token per slot between consecutive digits
pub type OperatorAssignment = [OperatorToken; SLOTS];

/// Fixed, ordered list of tokens; order defines search priority.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorCatalog {
    tokens: Vec<OperatorToken>,
}

impl OperatorCatalog {
    /// # Errors
    ///
    /// Returns an error if `tokens` is empty.
    pub fn new(tokens: Vec<OperatorToken>) -> Result<Self, CatalogError> {
        if tokens.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(Self { tokens })
    }

    /// Plain operators first, then factorial-prefixed, then sqrt-prefixed.
    pub fn standard() -> Self {
        let tokens: Vec<OperatorToken> = Modifier::ALL
            .iter()
            .flat_map(|&modifier| {
                BaseOperator::ALL
                    .iter()
                    .map(move |&base| OperatorToken::new(base, modifier))
            })
            .collect();
        debug!("Standard operator catalog has {} tokens", tokens.len());
        Self { tokens }
    }

    pub fn tokens(&self) -> &[OperatorToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<OperatorToken> {
        self.tokens.get(index).copied()
    }
}

impl Default for OperatorCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests;
