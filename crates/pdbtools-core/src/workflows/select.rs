use crate::core::models::atom::Atom;
use crate::engine::error::SyntaxError;
use crate::engine::selection::Selection;
use tracing::{debug, instrument};

/// Returns the atoms matching `selection`, in input order.
///
/// The selection string is parsed once and evaluated against every atom. The
/// returned atoms are independent copies that keep their original `index`.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the selection string is malformed.
#[instrument(skip_all, fields(selection = selection))]
pub fn select(atoms: &[Atom], selection: &str) -> Result<Vec<Atom>, SyntaxError> {
    let parsed = Selection::parse(selection)?;
    let selected = parsed.filter(atoms);
    debug!("Selected {} of {} atoms", selected.len(), atoms.len());
    Ok(selected)
}

/// Returns the 1-based positions within `atoms` of the atoms matching `selection`.
///
/// Positions refer to the slice passed in, not to the `index` stored in each atom,
/// and are strictly increasing.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if the selection string is malformed.
#[instrument(skip_all, fields(selection = selection))]
pub fn select_indices(atoms: &[Atom], selection: &str) -> Result<Vec<usize>, SyntaxError> {
    let parsed = Selection::parse(selection)?;
    let indices = parsed.indices(atoms);
    debug!("Selected {} of {} atoms", indices.len(), atoms.len());
    Ok(indices)
}

/// Applies an optional selection, cloning every atom when there is none.
pub(crate) fn select_optional(
    atoms: &[Atom],
    selection: Option<&str>,
) -> Result<Vec<Atom>, SyntaxError> {
    match selection {
        Some(selection) => select(atoms, selection),
        None => Ok(atoms.to_vec()),
    }
}
