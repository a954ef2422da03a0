//! The atom selection language.
//!
//! A selection string such as `protein and resnum < 30` is tokenized by [`lexer`],
//! parsed into an [`ast::Expression`] by [`parser`], and wrapped in a [`Selection`]
//! that can be evaluated against any number of atoms.

pub mod ast;
pub(crate) mod lexer;
pub mod parser;

use crate::core::models::atom::Atom;
use crate::engine::error::SyntaxError;
use crate::engine::evaluator::evaluate;
use ast::Expression;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A parsed selection, ready to be applied to atoms.
///
/// The parsed expression is immutable, so one `Selection` can be reused across
/// many atom lists and shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    source: String,
    expression: Expression,
}

impl Selection {
    /// Parses a selection string.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] describing the first offending token.
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        let expression = parser::parse(input)?;
        Ok(Self {
            source: input.to_string(),
            expression,
        })
    }

    /// The selection string this selection was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn matches(&self, atom: &Atom) -> bool {
        evaluate(&self.expression, atom)
    }

    /// Returns copies of the matching atoms, in input order.
    pub fn filter(&self, atoms: &[Atom]) -> Vec<Atom> {
        #[cfg(feature = "parallel")]
        let selected = atoms
            .par_iter()
            .filter(|atom| self.matches(atom))
            .cloned()
            .collect();
        #[cfg(not(feature = "parallel"))]
        let selected = atoms
            .iter()
            .filter(|atom| self.matches(atom))
            .cloned()
            .collect();
        selected
    }

    /// Returns the 1-based positions of the matching atoms within `atoms`, in increasing order.
    pub fn indices(&self, atoms: &[Atom]) -> Vec<usize> {
        #[cfg(feature = "parallel")]
        let selected = atoms
            .par_iter()
            .enumerate()
            .filter(|(_, atom)| self.matches(atom))
            .map(|(i, _)| i + 1)
            .collect();
        #[cfg(not(feature = "parallel"))]
        let selected = atoms
            .iter()
            .enumerate()
            .filter(|(_, atom)| self.matches(atom))
            .map(|(i, _)| i + 1)
            .collect();
        selected
    }
}

impl FromStr for Selection {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
