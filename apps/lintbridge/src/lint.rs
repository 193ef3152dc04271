//! Lint runner: drives one tool over a batch of files.
//!
//! Produces a `LintResult` with the reported problems and a summary. A tool
//! whose executable is missing is refused up front; execution and parse
//! failures propagate to the caller.

use crate::error::Error;
use crate::models::{LintResult, Summary};
use crate::problems::Problems;
use crate::tools::Tool;
use std::path::Path;

/// Run `tool` once over `files`.
///
/// File names in the result are made relative to `base` when they start
/// with it.
pub fn run_lint(tool: &dyn Tool, files: &[String], base: &Path) -> Result<LintResult, Error> {
    if !tool.check_dependencies() {
        return Err(Error::MissingDependency {
            tool: tool.name().to_string(),
            binary: tool.executable().to_string(),
        });
    }

    let mut problems = Problems::with_base(base);
    let reported = tool.execute(files, &mut problems)?;
    log::debug!(
        "{} finished: reported={reported} problems={}",
        tool.name(),
        problems.len()
    );

    let files_with_problems = problems.files().len();
    let summary = Summary {
        problems: problems.len(),
        files: files.iter().filter(|f| tool.match_file(f)).count(),
        files_with_problems,
    };
    Ok(LintResult {
        tool: tool.name().to_string(),
        problems: problems.into_vec(),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::process::{CommandRunner, RunOptions};
    use crate::tools::Pylint3k;

    struct Canned {
        installed: bool,
        lines: Vec<&'static str>,
    }

    impl CommandRunner for Canned {
        fn in_path(&self, _name: &str) -> bool {
            self.installed
        }

        fn run(&self, _command: &[String], _opts: RunOptions) -> Result<Vec<String>, Error> {
            Ok(self.lines.iter().map(|l| l.to_string()).collect())
        }
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_missing_executable_is_refused() {
        let tool = Pylint3k::with_runner(
            Options::new(),
            Canned {
                installed: false,
                lines: vec![],
            },
        );
        let err = run_lint(&tool, &files(&["a.py"]), Path::new("/repo")).unwrap_err();
        assert_eq!(err.to_string(), "tool 'pylint3k' requires 'pylint' on PATH");
        match err {
            Error::MissingDependency { tool, binary } => {
                assert_eq!(tool, "pylint3k");
                assert_eq!(binary, "pylint");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_summary_counts_matched_files_and_problems() {
        let tool = Pylint3k::with_runner(
            Options::new(),
            Canned {
                installed: true,
                lines: vec![
                    "************* Module pkg.a",
                    "/repo/pkg/a.py:3:0: W1601 apply built-in referenced",
                    "/repo/pkg/a.py:9:4: W1612 unicode built-in referenced",
                ],
            },
        );
        let res = run_lint(
            &tool,
            &files(&["/repo/pkg/a.py", "/repo/pkg/b.py", "/repo/README.md"]),
            Path::new("/repo"),
        )
        .unwrap();
        assert_eq!(res.tool, "pylint3k");
        assert_eq!(res.summary.problems, 2);
        assert_eq!(res.summary.files, 2);
        assert_eq!(res.summary.files_with_problems, 1);
        assert_eq!(res.problems[0].file, "pkg/a.py");
        assert_eq!(res.problems[1].line, 9);
    }

    #[test]
    fn test_no_python_files_yields_empty_result() {
        let tool = Pylint3k::with_runner(
            Options::new(),
            Canned {
                installed: true,
                lines: vec!["should-not-be-read"],
            },
        );
        let res = run_lint(&tool, &files(&["notes.txt"]), Path::new(".")).unwrap();
        assert!(res.problems.is_empty());
        assert_eq!(res.summary.files, 0);
    }
}
