//! # Vetted CLI
//!
//! Typed console prompts that keep asking until the answer is valid.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Internal / system error                   |
//! |  2   | Input closed, retry limit or bad data     |
//! |  3   | Form or file not found                    |
//! |  4   | Configuration error                       |
//! | 130  | Cancelled                                 |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    match start(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, verbose),
    }
}

/// Load settings and run the chosen command.
fn start(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| {
        CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        }
    })?;
    debug!(?config, "Configuration loaded");

    let output = OutputManager::new(&cli.global, &config);
    dispatch(cli.command, config, output)?;
    info!("Done");
    Ok(())
}

#[instrument(skip_all)]
fn dispatch(command: Commands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match command {
        Commands::Form(args) => commands::form::execute(args, config, output),
        Commands::Shop(args) => commands::shop::execute(args, config, output),
        Commands::Inventory(args) => commands::inventory::execute(args, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Print the error to stderr and pick the exit code.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();
    let text = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{text}");
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn version_comes_from_the_manifest() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn dispatch_reports_unknown_config_key() {
        let cli = Cli::try_parse_from(["vetted", "config", "get", "missing.key"]).unwrap();
        let output = OutputManager::new(&cli.global, &AppConfig::default());
        let err = dispatch(cli.command, AppConfig::default(), output).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
