//! # Core Module
//!
//! The foundation of the library: the atom data model, residue tables, and PDB
//! file input/output.
//!
//! - **Data Model** ([`models`]) - Atom records and residue classification
//! - **File I/O** ([`io`]) - Reading and writing fixed-column PDB records
//! - **Residue Tables** ([`utils`]) - Static sets of protein and water residue names
//!
//! Nothing in this module knows about the selection language; it only produces and
//! consumes ordered lists of atoms.

pub mod io;
pub mod models;
pub mod utils;
