use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::engine::selection::Selection;
use crate::workflows::error::WorkflowError;
use crate::workflows::select::select_optional;
use std::path::Path;
use tracing::{info, instrument};

/// Reads the atoms of a PDB file, optionally keeping only those matching `selection`.
///
/// The selection is checked before the file is opened. Selected atoms keep the
/// sequential index they had in the full file.
///
/// # Errors
///
/// Returns an error if the selection is malformed, or the file cannot be read or parsed.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_pdb<P: AsRef<Path>>(
    path: P,
    selection: Option<&str>,
) -> Result<Vec<Atom>, WorkflowError> {
    let selection = selection.map(Selection::parse).transpose()?;
    let atoms = PdbFile::read_from_path(path.as_ref())?;
    info!("Read {} atoms", atoms.len());
    Ok(match selection {
        Some(selection) => selection.filter(&atoms),
        None => atoms,
    })
}

/// Writes atoms to a PDB file, optionally only those matching `selection`.
///
/// # Errors
///
/// Returns an error if the selection is malformed, or the file cannot be written.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn write_pdb<P: AsRef<Path>>(
    atoms: &[Atom],
    path: P,
    selection: Option<&str>,
) -> Result<(), WorkflowError> {
    let selected = select_optional(atoms, selection)?;
    PdbFile::write_to_path(&selected, path.as_ref())?;
    info!("Wrote {} atoms", selected.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::pdb::PdbError;
    use std::fs;

    const STRUCTURE: &str = "\
HEADER    SMALL TEST STRUCTURE
ATOM      1  N   MET A   1      38.950  49.300  34.380  1.00  0.00           N
ATOM      2  CA  MET A   1      38.030  49.560  35.450  1.00 10.00           C
ATOM      3  C   MET A   1      38.120  52.850  37.520  1.00 20.00           C
ATOM      4  CA  LYS A   2      39.000  53.000  38.000  0.50 30.00           C
HETATM    5  OW  HOH W 101      60.050  47.500  57.340  1.00 40.00           O
END
";

    fn write_structure(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("input.pdb");
        fs::write(&path, STRUCTURE).unwrap();
        path
    }

    #[test]
    fn read_pdb_reads_every_atom_without_a_selection() {
        let dir = tempfile::tempdir().unwrap();
        let atoms = read_pdb(write_structure(&dir), None).unwrap();
        assert_eq!(atoms.len(), 5);
        assert_eq!(atoms[4].resname, "HOH");
    }

    #[test]
    fn read_pdb_filters_and_keeps_file_indices() {
        let dir = tempfile::tempdir().unwrap();
        let atoms = read_pdb(write_structure(&dir), Some("name CA")).unwrap();
        assert_eq!(
            atoms.iter().map(|a| a.index).collect::<Vec<_>>(),
            vec![2, 4]
        );
    }

    #[test]
    fn read_pdb_rejects_bad_selection_before_touching_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_pdb(dir.path().join("missing.pdb"), Some("beta >"));
        assert!(matches!(result, Err(WorkflowError::Selection(_))));
    }

    #[test]
    fn read_pdb_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_pdb(dir.path().join("missing.pdb"), None);
        assert!(matches!(result, Err(WorkflowError::Pdb(PdbError::Io(_)))));
    }

    #[test]
    fn write_pdb_writes_only_selected_atoms() {
        let dir = tempfile::tempdir().unwrap();
        let atoms = read_pdb(write_structure(&dir), None).unwrap();
        let output = dir.path().join("protein.pdb");

        write_pdb(&atoms, &output, Some("protein and beta >= 10")).unwrap();
        let written = read_pdb(&output, None).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(
            written.iter().map(|a| a.index_pdb).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
        assert_eq!(written[2].occupancy, 0.5);
    }

    #[test]
    fn empty_selection_writes_a_file_that_reads_back_empty() {
        let dir = tempfile::tempdir().unwrap();
        let atoms = read_pdb(write_structure(&dir), Some("protein")).unwrap();
        let output = dir.path().join("nothing.pdb");

        write_pdb(&atoms, &output, Some("water")).unwrap();
        assert!(read_pdb(&output, None).unwrap().is_empty());
        assert!(read_pdb(&output, Some("name CA")).unwrap().is_empty());
    }

    #[test]
    fn write_pdb_then_read_pdb_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let atoms = read_pdb(write_structure(&dir), None).unwrap();
        let output = dir.path().join("copy.pdb");
        write_pdb(&atoms, &output, None).unwrap();
        assert_eq!(read_pdb(&output, None).unwrap(), atoms);
    }
}
