//! CLI argument parsing via `clap`.

use crate::tools::MalformedLines;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintbridge",
    version,
    about = "Run pylint --py3k over Python files and report findings",
    long_about = "lintbridge runs pylint in Python 3 compatibility mode once for a batch of files and reports each finding as file, line and message.\n\nConfiguration precedence: CLI > lintbridge.toml > defaults.",
    after_help = "Examples:\n  lintbridge check src/app.py src/util.py\n  lintbridge check --output json --option disable=W1618 pkg/mod.py\n  lintbridge doctor",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current lintbridge version.")]
    Version,
    /// Check whether pylint can be found
    #[command(
        about = "Check dependencies",
        long_about = "Report whether the pylint executable resolves on PATH and where."
    )]
    Doctor,
    /// Lint files with pylint --py3k
    #[command(
        about = "Run pylint3k checks",
        long_about = "Run pylint --py3k once over the given files. Files without a .py extension are ignored. Exits 1 when problems are found.",
        after_help = "Examples:\n  lintbridge check a.py b.py\n  lintbridge check --malformed-lines skip a.py"
    )]
    Check {
        #[arg(help = "Files to check")]
        files: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(
            long = "option",
            value_name = "KEY=VALUE",
            value_parser = parse_key_val,
            help = "pylint3k option, e.g. disable=W1618 (repeatable)"
        )]
        options: Vec<(String, String)>,
        #[arg(long, value_enum, help = "Policy for unparsable output lines (default: abort)")]
        malformed_lines: Option<MalformedLines>,
    },
}

/// Parse `KEY=VALUE`; the value may itself contain `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
