//! pylint in `--py3k` mode, the Python 3 compatibility checker.
//!
//! All matched files go to a single pylint process to save on interpreter
//! startup. pylint prints one finding per line as
//! `path:line[:column]: message`, interleaved with `****** Module x`
//! headers, and exits non-zero whenever it found something.

use super::{base_options, MalformedLines, Tool};
use crate::error::{Error, ParseLineError};
use crate::options::Options;
use crate::problems::Problems;
use crate::process::{CommandRunner, RunOptions, SystemRunner};
use std::path::Path;

pub const PYLINT: &str = "pylint";

/// Options forwarded to pylint as `--<name> <value>`, in this order.
pub const PYLINT3K_OPTIONS: [&str; 4] = ["disable", "output-format", "msg-template", "reports"];

pub const MSG_TEMPLATE: &str = "{path}:{line}:{column}: {msg_id} {msg}";

const MODULE_HEADER: &str = "******";

pub struct Pylint3k<R = SystemRunner> {
    options: Options,
    malformed: MalformedLines,
    runner: R,
}

impl Pylint3k<SystemRunner> {
    pub fn new(options: Options) -> Self {
        Self::with_runner(options, SystemRunner)
    }
}

impl<R: CommandRunner> Pylint3k<R> {
    pub fn with_runner(options: Options, runner: R) -> Self {
        Self {
            options: options.merged_over(&pylint3k_defaults()),
            malformed: MalformedLines::default(),
            runner,
        }
    }

    pub fn malformed_lines(mut self, policy: MalformedLines) -> Self {
        self.malformed = policy;
        self
    }

    /// `pylint --py3k`, then allow-listed options, then `files`.
    pub fn build_command(&self, files: &[String]) -> Vec<String> {
        let mut command = vec![PYLINT.to_string(), "--py3k".to_string()];
        for name in PYLINT3K_OPTIONS {
            if let Some(value) = self.options().non_empty(name) {
                command.push(format!("--{name}"));
                command.push(value.to_string());
            }
        }
        command.extend(files.iter().cloned());
        command
    }
}

fn pylint3k_defaults() -> Options {
    [
        ("msg-template", MSG_TEMPLATE),
        ("reports", "no"),
        ("output-format", "text"),
    ]
    .into_iter()
    .collect::<Options>()
    .merged_over(&base_options())
}

/// Split one output line into `(path, line, message)`.
///
/// At most four segments are taken so the message itself may contain `:`.
pub fn parse_line(line: &str) -> Result<(&str, u32, &str), ParseLineError> {
    let parts: Vec<&str> = line.splitn(4, ':').collect();
    if parts.len() < 3 {
        return Err(ParseLineError::TooFewSegments(parts.len()));
    }
    let message = if parts.len() == 3 { parts[2] } else { parts[3] }.trim();
    let number = parts[1]
        .trim()
        .parse::<u32>()
        .map_err(|_| ParseLineError::InvalidLineNumber(parts[1].to_string()))?;
    Ok((parts[0], number, message))
}

impl<R: CommandRunner> Tool for Pylint3k<R> {
    fn name(&self) -> &str {
        "pylint3k"
    }

    fn executable(&self) -> &str {
        PYLINT
    }

    fn options(&self) -> &Options {
        &self.options
    }

    fn default_options(&self) -> Options {
        pylint3k_defaults()
    }

    fn check_dependencies(&self) -> bool {
        self.runner.in_path(self.executable())
    }

    /// Leading dots of the base name never start an extension, so `.py`
    /// and `..py` are names, not Python files.
    fn match_file(&self, path: &str) -> bool {
        Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.trim_start_matches('.').rsplit_once('.'))
            .is_some_and(|(_, ext)| ext == "py")
    }

    fn process_files(&self, files: &[String], problems: &mut Problems) -> Result<bool, Error> {
        log::debug!("Processing {} files with {}", files.len(), self.name());
        let command = self.build_command(files);
        let output = self.runner.run(
            &command,
            RunOptions {
                split: true,
                ignore_error: true,
            },
        )?;
        if output.is_empty() {
            log::debug!("No pylint3k errors found.");
            return Ok(false);
        }

        for line in &output {
            if line.starts_with(MODULE_HEADER) {
                continue;
            }
            match parse_line(line) {
                Ok((file, number, message)) => problems.add(file, number, message),
                Err(reason) => match self.malformed {
                    MalformedLines::Abort => {
                        return Err(Error::MalformedLine {
                            line: line.clone(),
                            reason,
                        })
                    }
                    MalformedLines::Skip => {
                        log::warn!("Skipping unparsable pylint3k line {line:?}: {reason}");
                    }
                },
            }
        }
        Ok(true)
    }
}
