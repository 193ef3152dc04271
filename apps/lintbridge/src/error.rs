//! Error types shared by the adapter, the process runner, and config loading.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single line of pylint output could not be turned into a finding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLineError {
    #[error("expected at least 3 ':'-separated segments, found {0}")]
    TooFewSegments(usize),

    #[error("line number {0:?} is not an integer")]
    InvalidLineNumber(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("tool '{tool}' requires '{binary}' on PATH")]
    MissingDependency { tool: String, binary: String },

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    ExitStatus { command: String, code: i32 },

    #[error("malformed output line {line:?}: {reason}")]
    MalformedLine {
        line: String,
        #[source]
        reason: ParseLineError,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}
