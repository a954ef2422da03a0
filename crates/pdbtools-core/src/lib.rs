//! # PDBTools
//!
//! A small library to read and write Protein Data Bank files, select atoms with a
//! simple query language, and extract sequences and coordinates.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** The flat [`Atom`](core::models::atom::Atom) record,
//!   residue tables, and fixed-column PDB reading and writing.
//!
//! - **[`engine`]: The Selection Engine.** Tokenizes and parses selection strings such as
//!   `protein and resnum < 30` into an expression tree, and evaluates it per atom.
//!
//! - **[`workflows`]: The Public API.** Filtering atom lists, listing matching indices,
//!   extracting sequences and coordinates, and reading or writing files through a selection.
//!
//! ## Selection Syntax
//!
//! | Keyword   | Operators        | Value   | Example        |
//! |-----------|------------------|---------|----------------|
//! | `index`   | `=,>,<,<=,>=`    | integer | `index <= 10`  |
//! | `name`    | `=` (implicit)   | string  | `name CA`      |
//! | `resname` | `=` (implicit)   | string  | `resname ALA`  |
//! | `resnum`  | `=,>,<,<=,>=`    | integer | `resnum = 10`  |
//! | `chain`   | `=` (implicit)   | string  | `chain A`      |
//! | `model`   | `=` (implicit)   | integer | `model 1`      |
//! | `protein` |                  |         | `protein`      |
//! | `water`   |                  |         | `water`        |
//! | `beta`    | `=,>,<,<=,>=`    | real    | `beta > 0.5`   |
//! | `occup`   | `=,>,<,<=,>=`    | real    | `occup >= 0.3` |
//!
//! Predicates combine with `not`, `and` and `or` (in decreasing precedence), and
//! may be grouped with parentheses. All indices are 1-based.

pub mod core;
pub mod engine;
pub mod workflows;
