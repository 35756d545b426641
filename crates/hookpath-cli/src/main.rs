// Rust guideline compliant 2026-10-18

//! Hookpath CLI Application
//!
//! Points a Git repository at its versioned hooks directory.

use clap::Parser;
use hookpath_cli::commands;
use hookpath_core::Config;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "setup-hooks",
    version,
    about = "Configure this repository to use the .githooks directory",
    long_about = "Sets core.hooksPath in the repository's local Git config so that the versioned hooks under .githooks run on commit. Safe to run any number of times.",
    after_help = "Examples:\n  setup-hooks\n  setup-hooks status --json\n  setup-hooks reset\n"
)]
struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Set core.hooksPath (default when no command is given)
    Install,

    /// Show the current core.hooksPath value
    Status {
        /// Emit JSON output
        #[arg(long)]
        json: bool,
    },

    /// Unset core.hooksPath
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    hookpath_cli::init_tracing(&cli.log_level)?;
    let config = Config::load(cli.config.as_deref())?;
    let cwd = std::env::current_dir()?;
    let mut stdout = std::io::stdout().lock();

    match cli.command.unwrap_or(Commands::Install) {
        Commands::Install => {
            commands::install::execute(&cwd, &config, &mut stdout)?;
        }
        Commands::Status { json } => {
            commands::status::execute(&cwd, &config, json, &mut stdout)?;
        }
        Commands::Reset => {
            commands::reset::execute(&cwd, &mut stdout)?;
        }
    }

    Ok(())
}
