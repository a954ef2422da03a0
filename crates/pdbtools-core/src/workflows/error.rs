use crate::core::io::pdb::PdbError;
use crate::engine::error::SyntaxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("PDB file error: {0}")]
    Pdb(#[from] PdbError),

    #[error("Invalid selection: {0}")]
    Selection(#[from] SyntaxError),
}
