use crate::core::models::atom::Atom;
use crate::core::models::residue::ResidueCode;
use crate::engine::error::SyntaxError;
use crate::workflows::select::select;
use nalgebra::Point3;
use tracing::{debug, instrument};

fn same_residue(a: &Atom, b: &Atom) -> bool {
    a.model == b.model && a.chain == b.chain && a.resnum == b.resnum && a.resname == b.resname
}

/// Lists the residues covered by the atoms matching `selection`, in order.
///
/// A new residue starts whenever the model, chain, residue number or residue name
/// changes between consecutive selected atoms. Use `"protein"` to get the amino
/// acid sequence; add `or resname XYZ` to include non-standard residues, which are
/// reported by the first letter of their name.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the selection string is malformed.
#[instrument(skip_all, fields(selection = selection))]
pub fn sequence(atoms: &[Atom], selection: &str) -> Result<Vec<ResidueCode>, SyntaxError> {
    let selected = select(atoms, selection)?;
    let mut residues = Vec::new();
    let mut previous: Option<&Atom> = None;
    for atom in &selected {
        if !previous.is_some_and(|p| same_residue(p, atom)) {
            residues.push(ResidueCode::from_residue_name(&atom.resname));
        }
        previous = Some(atom);
    }
    debug!("Found {} residues", residues.len());
    Ok(residues)
}

/// Like [`sequence`], but returns only the one-letter codes as a string.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the selection string is malformed.
pub fn one_letter_sequence(atoms: &[Atom], selection: &str) -> Result<String, SyntaxError> {
    Ok(sequence(atoms, selection)?
        .iter()
        .map(|residue| residue.one_letter)
        .collect())
}

/// Returns the coordinates of the selected atoms, or of every atom when `selection` is `None`.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the selection string is malformed.
pub fn coordinates(
    atoms: &[Atom],
    selection: Option<&str>,
) -> Result<Vec<Point3<f64>>, SyntaxError> {
    let coordinates = match selection {
        None => atoms.iter().map(|atom| atom.position).collect(),
        Some(selection) => select(atoms, selection)?
            .iter()
            .map(|atom| atom.position)
            .collect(),
    };
    Ok(coordinates)
}
