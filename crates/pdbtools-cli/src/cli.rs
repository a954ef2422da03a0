use crate::config::SequenceFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const SELECTION_HELP: &str = "\
Selection keywords: index, name, resname, resnum, chain, model, beta, occup, protein, water.
Combine with 'and', 'or', 'not' and parentheses, e.g. \"protein and resnum < 30\".";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "PDBTools CLI - Read, filter and inspect Protein Data Bank files with a simple selection language.",
    help_template = HELP_TEMPLATE,
    after_help = SELECTION_HELP,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the selected atoms as a PDB file.
    Select(SelectArgs),
    /// Print the 1-based indices of the selected atoms.
    Index(IndexArgs),
    /// Print the residue sequence of the selected atoms.
    Sequence(SequenceArgs),
    /// Print the coordinates of the selected atoms.
    Coords(CoordsArgs),
}

/// Arguments for the `select` subcommand.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output PDB file. Writes to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Selection string. Defaults to `selection.default` from the config file.
    #[arg(short, long, value_name = "SELECTION")]
    pub selection: Option<String>,
}

/// Arguments for the `index` subcommand.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Selection string. Defaults to `selection.default` from the config file.
    #[arg(short, long, value_name = "SELECTION")]
    pub selection: Option<String>,
}

/// Arguments for the `sequence` subcommand.
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Selection string. Defaults to the config file, then to "protein".
    #[arg(short, long, value_name = "SELECTION")]
    pub selection: Option<String>,

    /// Override `output.sequence-format` from the config file.
    #[arg(short, long, value_enum)]
    pub format: Option<SequenceFormat>,
}

/// Arguments for the `coords` subcommand.
#[derive(Args, Debug)]
pub struct CoordsArgs {
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Selection string. All atoms are printed when no selection is configured.
    #[arg(short, long, value_name = "SELECTION")]
    pub selection: Option<String>,

    /// Override `output.coordinate-precision` from the config file.
    #[arg(short, long, value_name = "DIGITS")]
    pub precision: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "pdbtools", "index", "-i", "in.pdb", "-s", "name CA", "-vv", "-c", "cfg.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
        match cli.command {
            Commands::Index(args) => {
                assert_eq!(args.input, PathBuf::from("in.pdb"));
                assert_eq!(args.selection.as_deref(), Some("name CA"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn sequence_format_values_are_kebab_case() {
        let cli = Cli::try_parse_from([
            "pdbtools", "sequence", "-i", "in.pdb", "--format", "three-letter",
        ])
        .unwrap();
        match cli.command {
            Commands::Sequence(args) => assert_eq!(args.format, Some(SequenceFormat::ThreeLetter)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["pdbtools", "-q", "-v", "coords", "-i", "in.pdb"]);
        assert!(result.is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["pdbtools", "select", "-s", "water"]).is_err());
    }
}
