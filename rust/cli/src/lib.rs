//! # Yacht CLI Library
//!
//! Command-line driver for the yacht dice scoring engine: rolls hands, scores
//! them, finds the best category and runs the built-in checks.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `roll`: Roll hands and show their CHANCE score and best category
//! - `score`: Score a hand in one category or print its full score card
//! - `best`: Find the highest scoring category for a hand
//! - `check`: Run the built-in scoring checks
//! - `cfg`: Display the resolved configuration and value sources

#[macro_use]
mod macros;

use clap::Parser;
use std::io::Write;
use tracing::debug;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, YachtCli};
use commands::{
    handle_best_command, handle_cfg_command, handle_check_command, handle_roll_command,
    handle_score_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["roll", "score", "best", "check", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors (including failed checks)
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["yacht", "best", "--dice", "1,1,1,8,8"];
/// let code = yacht_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match YachtCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Yacht dice scoring CLI");
                    write_or_exit!(err, "Usage: yacht <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: yacht --help");
                    exit_code::ERROR
                }
            };
        }
    };

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    debug!(command = ?cmd, "dispatching command");
    if let Commands::Check = cmd {
        return handle_check_command(out);
    }

    let resolved =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    debug!(sources = ?resolved.sources, "configuration resolved");
    let config = &resolved.config;
    match cmd {
        Commands::Roll { seed, count, json } => {
            handle_roll_command(seed, count, json, config, out)
        }
        Commands::Score {
            dice,
            category,
            json,
        } => handle_score_command(&dice, category.as_deref(), json, config, out, err),
        Commands::Best { dice, json } => handle_best_command(&dice, json, config, out, err),
        Commands::Cfg => handle_cfg_command(&resolved, out),
        Commands::Check => handle_check_command(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_every_subcommand() {
        let commands = vec![
            vec!["yacht", "roll"],
            vec!["yacht", "roll", "--seed", "1", "--count", "3", "--json"],
            vec!["yacht", "score", "--dice", "1,2,3,4,5"],
            vec!["yacht", "score", "--dice", "1,2,3,4,5", "--category", "chance"],
            vec!["yacht", "best", "--dice", "1 2 3 4 5"],
            vec!["yacht", "check"],
            vec!["yacht", "cfg"],
        ];
        for cmd_args in commands {
            let result = YachtCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_roll_count_range_enforced() {
        assert!(YachtCli::try_parse_from(["yacht", "roll", "--count", "0"]).is_err());
        assert!(YachtCli::try_parse_from(["yacht", "roll", "--count", "10001"]).is_err());
        assert!(YachtCli::try_parse_from(["yacht", "roll", "--count", "10000"]).is_ok());
    }

    #[test]
    fn test_score_requires_dice() {
        assert!(YachtCli::try_parse_from(["yacht", "score"]).is_err());
        assert!(YachtCli::try_parse_from(["yacht", "best"]).is_err());
    }

    #[test]
    fn test_check_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert!(dispatch(Commands::Check, &mut out, &mut err).is_ok());
        assert!(!out.is_empty());
    }
}
