//! CLI entry point for gnosync.
//!
//! Builds the configuration once, wires up the `gnokey` signer, and
//! dispatches to the pull/push flows. All failures print a human-readable
//! error chain and exit 1.

use std::path::Path;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use gnosync::io::config::{CONFIG_FILE, load_config};
use gnosync::io::gnokey::GnokeyClient;
use gnosync::pull::pull_file;
use gnosync::push::{join_message, push_files};
use gnosync::{exit_codes, logging};

#[derive(Debug, Parser)]
#[command(
    name = "gnosync",
    version,
    about = "Sync local Markdown files with a gno.land realm"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a file from the realm into the working directory.
    Pull {
        /// Name of the remote file to fetch.
        file: String,
    },
    /// Commit all local Markdown files as one transaction.
    #[command(visible_alias = "push")]
    Commit {
        /// Commit message (tokens are joined with spaces).
        #[arg(required = true)]
        message: Vec<String>,
    },
}

fn main() {
    logging::init();

    // Missing or unknown arguments must exit 1 rather than clap's default 2,
    // so parse errors are mapped by hand. Help and version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::OK,
                _ => exit_codes::FAILURE,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(Path::new(CONFIG_FILE))?;
    let signer = GnokeyClient::new(config);
    let root = Path::new(".");

    match cli.command {
        Command::Pull { file } => {
            println!("Pulling '{file}'...");
            let outcome = pull_file(root, &signer, &file)?;
            println!(
                "File '{}' fetched successfully ({} bytes)",
                outcome.filename, outcome.bytes
            );
        }
        Command::Commit { message } => {
            let message = join_message(&message);
            println!("Committing with message: '{message}'...");
            push_files(root, &signer, &message)?;
            println!("Commit successful!");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pull() {
        let cli = Cli::parse_from(["gnosync", "pull", "a.md"]);
        assert!(matches!(cli.command, Command::Pull { file } if file == "a.md"));
    }

    #[test]
    fn parse_commit_joins_tokens() {
        let cli = Cli::parse_from(["gnosync", "commit", "fix", "the", "docs"]);
        let Command::Commit { message } = cli.command else {
            panic!("expected commit");
        };
        assert_eq!(join_message(&message), "fix the docs");
    }

    #[test]
    fn parse_push_alias() {
        let cli = Cli::parse_from(["gnosync", "push", "msg"]);
        assert!(matches!(cli.command, Command::Commit { .. }));
    }

    #[test]
    fn pull_requires_filename() {
        let err = Cli::try_parse_from(["gnosync", "pull"]).expect_err("should fail");
        assert!(!matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ));
    }

    #[test]
    fn commit_requires_message() {
        let err = Cli::try_parse_from(["gnosync", "commit"]).expect_err("should fail");
        assert!(!matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ));
    }

    #[test]
    fn unknown_command_is_a_parse_error() {
        let err = Cli::try_parse_from(["gnosync", "clone"]).expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn help_is_a_display_error() {
        let err = Cli::try_parse_from(["gnosync", "--help"]).expect_err("help stops parsing");
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn no_args_is_a_failure_kind() {
        let err = Cli::try_parse_from(["gnosync"]).expect_err("should fail");
        assert!(!matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ));
    }
}
