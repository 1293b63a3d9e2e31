pub mod commands;
pub mod config;
pub mod diff;
pub mod err;
pub mod logging;
pub mod patch;
pub mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};

use crate::config::{Config, LogConfig, init_config};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use verbose output (-vv very verbose, -vvv very verbose to file)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two files and print a patch to stdout
    Diff(DiffArgs),
    /// Apply a patch to a file, rewriting it in place
    Patch(PatchArgs),
    /// Print usage for the tool or for one subcommand
    Help(HelpArgs),
}

#[derive(Debug, Args)]
struct DiffArgs {
    /// Path to old file
    old: String,
    /// Path to new file
    new: String,
}

#[derive(Debug, Args)]
struct PatchArgs {
    /// Path to file to patch
    file: String,
    /// Path to patch file
    patch: String,
}

#[derive(Debug, Args)]
struct HelpArgs {
    /// Subcommand to describe
    subcommand: Option<String>,
}

pub fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // -h, --help and --version land here too and exit cleanly
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    init_config(Config {
        log_config: LogConfig::Verbose(cli.verbose),
    });
    log::debug!("cli args: {:#?}", cli);

    let result = match cli.command {
        Commands::Diff(args) => {
            commands::diff(&PathBuf::from(args.old), &PathBuf::from(args.new))
        }
        Commands::Patch(args) => {
            commands::patch(&PathBuf::from(args.file), &PathBuf::from(args.patch))
        }
        Commands::Help(args) => commands::help(args.subcommand.as_deref()),
    };
    match result {
        Ok(()) => {
            log::info!("success");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
