use crate::cli::SelectArgs;
use crate::config::Config;
use crate::error::Result;
use pdbtools::core::io::pdb::PdbFile;
use pdbtools::core::io::traits::StructureFile;
use pdbtools::workflows::error::WorkflowError;
use pdbtools::workflows::files::{read_pdb, write_pdb};
use std::io::Write;
use tracing::{info, warn};

pub fn run(args: SelectArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let selection = config.selection(args.selection.as_deref());
    if selection.is_none() {
        warn!("No selection given; every atom will be written.");
    }

    info!("Loading input structure from {:?}", &args.input);
    let atoms = read_pdb(&args.input, selection)?;
    if atoms.is_empty() {
        warn!("The selection matched no atoms.");
    }

    match &args.output {
        Some(path) => {
            write_pdb(&atoms, path, None)?;
            info!("Wrote {} atoms to {:?}", atoms.len(), path);
        }
        None => PdbFile::write_to(&atoms, out).map_err(WorkflowError::from)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{output_of, write_structure};
    use crate::error::CliError;

    fn args(input: std::path::PathBuf, selection: Option<&str>) -> SelectArgs {
        SelectArgs {
            input,
            output: None,
            selection: selection.map(str::to_string),
        }
    }

    #[test]
    fn writes_selected_atoms_to_standard_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        run(
            args(write_structure(&dir), Some("protein and name CA")),
            &Config::default(),
            &mut out,
        )
        .unwrap();

        let text = output_of(out);
        let atom_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("ATOM")).collect();
        assert_eq!(atom_lines.len(), 2);
        assert!(atom_lines[0].contains(" CA  MET A   1"));
        assert!(atom_lines[1].contains(" CA  LYS A   2"));
        assert!(text.ends_with("END\n"));
    }

    #[test]
    fn writes_selected_atoms_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("water.pdb");
        let mut select_args = args(write_structure(&dir), Some("water"));
        select_args.output = Some(output.clone());

        let mut out = Vec::new();
        run(select_args, &Config::default(), &mut out).unwrap();
        assert!(out.is_empty());

        let written = read_pdb(&output, None).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].resname, "HOH");
        assert_eq!(written[0].resnum, 101);
    }

    #[test]
    fn falls_back_to_the_configured_selection() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            default_selection: Some("resname LIG".to_string()),
            ..Config::default()
        };
        let mut out = Vec::new();
        run(args(write_structure(&dir), None), &config, &mut out).unwrap();
        assert_eq!(output_of(out).lines().filter(|l| l.starts_with("ATOM")).count(), 1);
    }

    #[test]
    fn writes_every_atom_without_any_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        run(args(write_structure(&dir), None), &Config::default(), &mut out).unwrap();
        assert_eq!(output_of(out).lines().filter(|l| l.starts_with("ATOM")).count(), 6);
    }

    #[test]
    fn reports_malformed_selections() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let result = run(
            args(write_structure(&dir), Some("resnum >> 5")),
            &Config::default(),
            &mut out,
        );
        assert!(matches!(
            result,
            Err(CliError::Workflow(WorkflowError::Selection(_)))
        ));
        assert!(out.is_empty());
    }
}
