use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// portalmod - incremental module discovery for portal source trees
#[derive(Parser, Debug)]
#[command(name = "portalmod")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable ANSI colors in log output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (default: ./portalmod.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output root and source trees, overriding the configuration
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Project output root
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Source tree to scan (repeatable)
    #[arg(long = "portal-dir", value_name = "DIR")]
    pub portal_dirs: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover modules, classify them and regenerate the changed ones
    Scan {
        #[command(flatten)]
        target: TargetArgs,

        /// Drop every stored record and regenerate all modules
        #[arg(long)]
        full: bool,
    },

    /// Show what a scan would regenerate, without writing anything
    Plan {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Delete all generated module outputs
    Clean {
        #[command(flatten)]
        target: TargetArgs,

        /// List what would be deleted
        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve and print one module's layout, checksum and dependencies
    Show {
        /// Module directory
        module_path: PathBuf,
    },
}
