//! portalmod CLI - incremental module discovery for portal source trees
//!
//! Usage: portalmod <COMMAND>
//!
//! Commands:
//!   scan    Discover modules and regenerate the changed ones
//!   plan    Show what a scan would regenerate
//!   clean   Delete generated module outputs
//!   show    Resolve one module and print it

mod cli;
mod commands;

use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, warn};

use cli::{Cli, Commands};
use portalmod::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet, cli.no_color);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let mut config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Scan { target, full } => {
            let targets = commands::resolve_targets(&mut config, &target)?;
            commands::scan::cmd_scan(&config, &targets, full, false, cli.json, cancel_flag())
        }
        Commands::Plan { target } => {
            let targets = commands::resolve_targets(&mut config, &target)?;
            commands::scan::cmd_scan(&config, &targets, false, true, cli.json, cancel_flag())
        }
        Commands::Clean { target, dry_run } => {
            let targets = commands::resolve_targets(&mut config, &target)?;
            commands::clean::cmd_clean(&targets, dry_run, cli.json)?;
            Ok(true)
        }
        Commands::Show { module_path } => {
            commands::show::cmd_show(&config, &module_path, cli.json)?;
            Ok(true)
        }
    }
}

/// Flag set by Ctrl-C; the scan checks it between modules.
fn cancel_flag() -> Arc<AtomicBool> {
    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    if let Err(err) = ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::SeqCst);
    }) {
        warn!("cannot install Ctrl-C handler: {err}");
    }
    cancel
}
