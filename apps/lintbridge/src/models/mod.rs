//! Shared data models for findings and lint run output.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single finding reported by an external tool.
pub struct Problem {
    pub file: String,
    pub line: u32,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub problems: usize,
    pub files: usize,
    pub files_with_problems: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Lint results container.
pub struct LintResult {
    pub tool: String,
    pub problems: Vec<Problem>,
    pub summary: Summary,
}
