use crate::cli::SequenceArgs;
use crate::config::{Config, SequenceFormat, defaults};
use crate::error::Result;
use pdbtools::workflows::extract::sequence;
use pdbtools::workflows::files::read_pdb;
use std::io::Write;
use tracing::info;

pub fn run(args: SequenceArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let selection = config
        .selection(args.selection.as_deref())
        .unwrap_or(defaults::DEFAULT_SEQUENCE_SELECTION);
    let format = args.format.unwrap_or(config.sequence_format);

    info!("Loading input structure from {:?}", &args.input);
    let atoms = read_pdb(&args.input, None)?;
    let residues = sequence(&atoms, selection)?;
    info!("Extracted {} residues", residues.len());

    match format {
        SequenceFormat::OneLetter => {
            let line: String = residues.iter().map(|code| code.one_letter).collect();
            writeln!(out, "{}", line)?;
        }
        SequenceFormat::ThreeLetter => {
            for code in &residues {
                writeln!(out, "{}", code.three_letter)?;
            }
        }
        SequenceFormat::Both => {
            for code in &residues {
                writeln!(out, "{}", code)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{output_of, write_structure};

    fn args(
        input: std::path::PathBuf,
        selection: Option<&str>,
        format: Option<SequenceFormat>,
    ) -> SequenceArgs {
        SequenceArgs {
            input,
            selection: selection.map(str::to_string),
            format,
        }
    }

    fn run_to_string(args: SequenceArgs, config: &Config) -> String {
        let mut out = Vec::new();
        run(args, config, &mut out).unwrap();
        output_of(out)
    }

    #[test]
    fn defaults_to_one_letter_codes_of_protein_residues() {
        let dir = tempfile::tempdir().unwrap();
        let text = run_to_string(args(write_structure(&dir), None, None), &Config::default());
        assert_eq!(text, "MK\n");
    }

    #[test]
    fn prints_three_letter_codes() {
        let dir = tempfile::tempdir().unwrap();
        let text = run_to_string(
            args(write_structure(&dir), None, Some(SequenceFormat::ThreeLetter)),
            &Config::default(),
        );
        assert_eq!(text, "MET\nLYS\n");
    }

    #[test]
    fn prints_both_codes_abbreviating_unknown_residues() {
        let dir = tempfile::tempdir().unwrap();
        let text = run_to_string(
            args(
                write_structure(&dir),
                Some("not water"),
                Some(SequenceFormat::Both),
            ),
            &Config::default(),
        );
        assert_eq!(text, "MET M\nLYS K\nLIG L\n");
    }

    #[test]
    fn uses_the_configured_format_when_none_is_given() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            sequence_format: SequenceFormat::ThreeLetter,
            ..Config::default()
        };
        let text = run_to_string(args(write_structure(&dir), Some("resnum 2"), None), &config);
        assert_eq!(text, "LYS\n");
    }
}
