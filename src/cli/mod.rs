//! CLI argument parsing for cachecfg.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::compiler::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// cachecfg: compile cache.yml policies into cache manager registrations.
///
/// Configuration files are merged in the order given, later files overriding
/// earlier ones. The `all` section supplies defaults for every action.
#[derive(Parser, Debug)]
#[command(name = "cachecfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for cachecfg.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile configuration files into registration code.
    ///
    /// Prints the artifact to stdout unless `--output` is given.
    Compile(CompileArgs),

    /// Show the resolved policy of every action.
    Show(ShowArgs),
}

/// Arguments for the `compile` command.
#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Configuration files, lowest precedence first.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write the artifact atomically to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target syntax of the artifact.
    #[arg(long, value_enum, default_value_t = OutputFormat::Php)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Configuration files, lowest precedence first.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only show this action (use DEFAULT for the fallback policy).
    #[arg(long)]
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compile_defaults_to_php_on_stdout() {
        let cli = Cli::try_parse_from(["cachecfg", "compile", "a.yml", "b.yml"]).unwrap();
        match cli.command {
            Command::Compile(args) => {
                assert_eq!(args.files, vec![PathBuf::from("a.yml"), PathBuf::from("b.yml")]);
                assert_eq!(args.format, OutputFormat::Php);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn compile_accepts_format_and_output() {
        let cli = Cli::try_parse_from([
            "cachecfg", "-vv", "compile", "--format", "json", "-o", "out.ndjson", "cache.yml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Compile(args) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.output, Some(PathBuf::from("out.ndjson")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn compile_requires_files() {
        assert!(Cli::try_parse_from(["cachecfg", "compile"]).is_err());
    }

    #[test]
    fn show_accepts_action_filter() {
        let cli =
            Cli::try_parse_from(["cachecfg", "show", "cache.yml", "--action", "index"]).unwrap();
        match cli.command {
            Command::Show(args) => assert_eq!(args.action.as_deref(), Some("index")),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
