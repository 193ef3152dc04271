//! lintbridge CLI binary entry point.
//! Resolves configuration, runs the pylint3k adapter, and prints results.

use clap::Parser;
use lintbridge::cli::{Cli, Commands};
use lintbridge::tools::{pylint3k::PYLINT, Pylint3k};
use lintbridge::{config, lint, output, utils};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", utils::error_prefix(), message);
    std::process::exit(2);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Doctor => match which::which(PYLINT) {
            Ok(path) => println!(
                "{} {} found at {}",
                utils::info_prefix(),
                PYLINT,
                path.display()
            ),
            Err(_) => fail(format!("{PYLINT} not found on PATH")),
        },
        Commands::Check {
            files,
            repo_root,
            output,
            options,
            malformed_lines,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                malformed_lines,
                &options,
            )
            .unwrap_or_else(|e| fail(e));
            // Friendly note if no config was found
            if eff.config_path.is_none() && eff.output != "json" {
                eprintln!(
                    "{} No lintbridge.toml found; using defaults.",
                    utils::note_prefix()
                );
            }
            if files.is_empty() {
                fail("no files given");
            }

            let tool = Pylint3k::new(eff.tool_options).malformed_lines(eff.malformed_lines);
            let result = lint::run_lint(&tool, &files, &eff.repo_root).unwrap_or_else(|e| fail(e));
            if let Err(e) = output::print_lint(&result, &eff.output) {
                fail(e);
            }
            if result.summary.problems > 0 {
                std::process::exit(1);
            }
        }
    }
}
