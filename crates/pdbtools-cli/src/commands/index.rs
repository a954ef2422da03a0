use crate::cli::IndexArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use pdbtools::workflows::files::read_pdb;
use pdbtools::workflows::select::select_indices;
use std::io::Write;
use tracing::info;

pub fn run(args: IndexArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let selection = config.selection(args.selection.as_deref()).ok_or_else(|| {
        CliError::Argument(
            "no selection given; pass --selection or set 'selection.default' in the config file"
                .to_string(),
        )
    })?;

    info!("Loading input structure from {:?}", &args.input);
    let atoms = read_pdb(&args.input, None)?;
    let indices = select_indices(&atoms, selection)?;
    info!("{} of {} atoms selected", indices.len(), atoms.len());

    for index in indices {
        writeln!(out, "{}", index)?;
    }
    Ok(())
}
