//! Data structures describing atoms and residues read from structure files.
//!
//! - [`atom`] - The flat atom record every other component works on
//! - [`residue`] - Amino acid classification and residue codes used for sequences

pub mod atom;
pub mod residue;
