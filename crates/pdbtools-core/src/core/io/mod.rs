//! Provides input/output functionality for molecular structure files.
//!
//! Files are read into, and written from, flat ordered lists of atoms through the
//! [`traits::StructureFile`] interface. The PDB format is implemented in [`pdb`].

pub mod pdb;
pub mod traits;
