//! External process execution and executable lookup.
//!
//! Tools talk to the outside world only through [`CommandRunner`], so tests
//! can swap in a recording fake while the binary uses [`SystemRunner`].

use crate::error::Error;
use std::process::Command;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Split stdout into lines, dropping blank ones.
    pub split: bool,
    /// Do not treat a non-zero exit status as a failure.
    pub ignore_error: bool,
}

pub trait CommandRunner: Send + Sync {
    /// Whether `name` resolves to an executable on `PATH`.
    fn in_path(&self, name: &str) -> bool {
        in_path(name)
    }

    /// Run `command` to completion and return its stdout.
    fn run(&self, command: &[String], opts: RunOptions) -> Result<Vec<String>, Error>;
}

/// Runs commands with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &[String], opts: RunOptions) -> Result<Vec<String>, Error> {
        run_command(command, opts)
    }
}

pub fn in_path(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Run `command` (program followed by its arguments), blocking until exit.
///
/// Without `split` the whole stdout comes back as a single element, or no
/// element at all when the process printed nothing.
pub fn run_command(command: &[String], opts: RunOptions) -> Result<Vec<String>, Error> {
    let display = command.join(" ");
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Spawn {
            command: display,
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
        });
    };
    log::debug!("Running `{display}`");
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| Error::Spawn {
            command: display.clone(),
            source,
        })?;

    if !output.stderr.is_empty() {
        log::debug!(
            "`{program}` stderr: {}",
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }
    if !output.status.success() && !opts.ignore_error {
        return Err(Error::ExitStatus {
            command: display,
            code: output.status.code().unwrap_or(-1),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if opts.split {
        Ok(stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect())
    } else if stdout.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![stdout.into_owned()])
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".into(), "-c".into(), script.into()]
    }

    #[test]
    fn test_split_drops_blank_lines() {
        let out = run_command(
            &sh("printf 'a.py:1: x\\n\\n   \\nb.py:2: y\\n'"),
            RunOptions {
                split: true,
                ignore_error: false,
            },
        )
        .unwrap();
        assert_eq!(out, vec!["a.py:1: x".to_string(), "b.py:2: y".to_string()]);
    }

    #[test]
    fn test_unsplit_returns_whole_stdout() {
        let out = run_command(&sh("printf 'one\\ntwo\\n'"), RunOptions::default()).unwrap();
        assert_eq!(out, vec!["one\ntwo\n".to_string()]);
        let empty = run_command(&sh("true"), RunOptions::default()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_non_zero_exit_is_error_unless_ignored() {
        let err = run_command(&sh("echo hi; exit 3"), RunOptions::default()).unwrap_err();
        assert!(matches!(err, Error::ExitStatus { code: 3, .. }));

        let out = run_command(
            &sh("echo hi; exit 3"),
            RunOptions {
                split: true,
                ignore_error: true,
            },
        )
        .unwrap();
        assert_eq!(out, vec!["hi".to_string()]);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = run_command(
            &["lintbridge-no-such-program-xyz".to_string()],
            RunOptions {
                split: true,
                ignore_error: true,
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
        let err = run_command(&[], RunOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }

    #[test]
    fn test_in_path() {
        assert!(in_path("sh"));
        assert!(!in_path("lintbridge-no-such-program-xyz"));
        assert!(SystemRunner.in_path("sh"));
    }
}
