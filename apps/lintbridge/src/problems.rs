//! In-memory collector that tools report findings into.

use crate::models::Problem;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Ordered collection of findings for one run.
///
/// When a base directory is set, file names that start with it are stored
/// relative to it, so tools invoked with absolute paths still report
/// repository-relative names.
#[derive(Debug, Default)]
pub struct Problems {
    base: Option<PathBuf>,
    items: Vec<Problem>,
}

impl Problems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
            items: Vec::new(),
        }
    }

    /// Record one finding.
    pub fn add(&mut self, file: &str, line: u32, body: &str) {
        let file = self.trim_file(file);
        self.items.push(Problem {
            file,
            line,
            body: body.to_string(),
        });
    }

    fn trim_file(&self, file: &str) -> String {
        let Some(base) = self.base.as_deref() else {
            return file.to_string();
        };
        match Path::new(file).strip_prefix(base) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy().to_string(),
            _ => file.to_string(),
        }
    }

    /// All findings recorded for `file`, in insertion order.
    pub fn all(&self, file: &str) -> Vec<&Problem> {
        self.items.iter().filter(|p| p.file == file).collect()
    }

    /// Distinct file names with at least one finding.
    pub fn files(&self) -> BTreeSet<&str> {
        self.items.iter().map(|p| p.file.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<Problem> {
        self.items
    }
}
