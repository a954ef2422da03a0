mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 pdbtools CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = Config::load(cli.config.as_deref())?;
    debug!("Resolved configuration: {:?}", &config);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let command_result = match cli.command {
        Commands::Select(args) => {
            info!("Dispatching to 'select' command.");
            commands::select::run(args, &config, &mut out)
        }
        Commands::Index(args) => {
            info!("Dispatching to 'index' command.");
            commands::index::run(args, &config, &mut out)
        }
        Commands::Sequence(args) => {
            info!("Dispatching to 'sequence' command.");
            commands::sequence::run(args, &config, &mut out)
        }
        Commands::Coords(args) => {
            info!("Dispatching to 'coords' command.");
            commands::coords::run(args, &config, &mut out)
        }
    }
    .and_then(|()| out.flush().map_err(Into::into));

    match &command_result {
        Ok(()) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
