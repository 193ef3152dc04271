//! Tool contract for external analysis executables.
//!
//! A tool wraps one external program. The orchestrator asks it whether its
//! executable is installed, hands it the candidate files, and the tool
//! reports findings into a [`Problems`] collector. Tools never walk the
//! file system or decide which tools run; that belongs to the caller.

pub mod pylint3k;

use crate::error::Error;
use crate::options::Options;
use crate::problems::Problems;
use serde::Deserialize;

pub use pylint3k::Pylint3k;

/// Base option set every tool starts from before adding its own defaults.
pub fn base_options() -> Options {
    Options::new()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
/// What to do with an output line that cannot be parsed into a finding.
pub enum MalformedLines {
    /// Fail the whole batch on the first malformed line.
    #[default]
    Abort,
    /// Log a warning for the line and keep going.
    Skip,
}

pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    /// External program this tool drives.
    fn executable(&self) -> &str;

    /// Effective options (defaults merged under the caller's settings).
    fn options(&self) -> &Options;

    fn default_options(&self) -> Options {
        base_options()
    }

    fn check_dependencies(&self) -> bool {
        true
    }

    fn match_file(&self, _path: &str) -> bool {
        true
    }

    /// Process files already filtered by `match_file`. Returns `false` when
    /// the tool reported nothing.
    fn process_files(&self, files: &[String], problems: &mut Problems) -> Result<bool, Error>;

    /// Filter `files` through `match_file` and process whatever is left.
    fn execute(&self, files: &[String], problems: &mut Problems) -> Result<bool, Error> {
        let matching: Vec<String> = files
            .iter()
            .filter(|f| self.match_file(f))
            .cloned()
            .collect();
        if matching.is_empty() {
            log::debug!("No files matched {}", self.name());
            return Ok(false);
        }
        self.process_files(&matching, problems)
    }
}
