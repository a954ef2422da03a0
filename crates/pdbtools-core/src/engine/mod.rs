//! # Engine Module
//!
//! The selection engine: parsing selection strings and evaluating them against atoms.
//!
//! - [`selection`] - Lexer, parser and AST for the selection language, and the reusable
//!   [`selection::Selection`] type
//! - [`evaluator`] - Evaluation of a parsed expression against a single atom
//! - [`error`] - The [`error::SyntaxError`] reported for malformed selection strings
//!
//! Parsing is the only fallible step. Once a selection has been parsed, evaluating it
//! can neither fail nor modify the atoms it inspects.

pub mod error;
pub mod evaluator;
pub mod selection;
