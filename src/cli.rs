//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `nscheck`.
#[derive(Debug, Parser)]
#[command(name = "nscheck", version, about = "Check namespace declarations against module manifests")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check every source file under a directory tree.
    Check {
        /// Directory tree (or single file) to check.
        path: PathBuf,
        /// Source-file extension to scan for.
        #[arg(long, default_value = "cs")]
        ext: String,
        /// Output format for the diagnostic report.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the expected namespace for a single source file.
    Expected {
        /// Source file to resolve.
        file: PathBuf,
    },
}

/// How the diagnostic report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines plus a summary.
    Text,
    /// Pretty-printed JSON array of diagnostics.
    Json,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, OutputFormat};
    use clap::Parser;

    #[test]
    fn parses_check_subcommand_with_defaults() {
        let cli = Cli::parse_from(["nscheck", "check", "/proj"]);
        match cli.command {
            Command::Check { path, ext, format } => {
                assert_eq!(path.to_str(), Some("/proj"));
                assert_eq!(ext, "cs");
                assert_eq!(format, OutputFormat::Text);
            }
            Command::Expected { .. } => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn parses_check_format_and_extension_flags() {
        let cli = Cli::parse_from(["nscheck", "check", "/proj", "--ext", "src", "--format", "json"]);
        match cli.command {
            Command::Check { ext, format, .. } => {
                assert_eq!(ext, "src");
                assert_eq!(format, OutputFormat::Json);
            }
            Command::Expected { .. } => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn parses_expected_subcommand() {
        let cli = Cli::parse_from(["nscheck", "expected", "/proj/Foo.cs"]);
        assert!(matches!(cli.command, Command::Expected { .. }));
    }
}
