//! # Workflows Module
//!
//! The high-level entry points of the library, combining file I/O with the selection
//! engine.
//!
//! - [`select`] - Filtering atom lists, and listing the positions of matching atoms
//! - [`extract`] - Residue sequences and coordinate arrays of selected atoms
//! - [`files`] - Reading and writing PDB files, optionally through a selection
//!
//! ```ignore
//! use pdbtools::workflows::{files::read_pdb, select::select_indices};
//!
//! let atoms = read_pdb("protein.pdb", None)?;
//! let calphas = select_indices(&atoms, "protein and name CA")?;
//! ```

pub mod error;
pub mod extract;
pub mod files;
pub mod select;
