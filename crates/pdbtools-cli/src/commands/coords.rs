use crate::cli::CoordsArgs;
use crate::config::{Config, check_precision};
use crate::error::Result;
use pdbtools::workflows::extract::coordinates;
use pdbtools::workflows::files::read_pdb;
use std::io::Write;
use tracing::info;

pub fn run(args: CoordsArgs, config: &Config, out: &mut impl Write) -> Result<()> {
    let precision = args.precision.unwrap_or(config.coordinate_precision);
    check_precision(precision)?;
    let selection = config.selection(args.selection.as_deref());

    info!("Loading input structure from {:?}", &args.input);
    let atoms = read_pdb(&args.input, None)?;
    let points = coordinates(&atoms, selection)?;
    info!("Extracted coordinates of {} atoms", points.len());

    for point in &points {
        writeln!(
            out,
            "{:.p$} {:.p$} {:.p$}",
            point.x,
            point.y,
            point.z,
            p = precision
        )?;
    }
    Ok(())
}
