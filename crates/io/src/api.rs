// Outcome and report types shared by the commands and the binary

use serde::Serialize;
use std::path::PathBuf;

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    /// Escaping produced identical text; nothing written
    Unchanged,
    /// Escaped text written back
    Fixed,
    /// Escaped text differs but the run is a dry run
    WouldFix,
}

/// A file that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Summary of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub visited: usize,
    pub unchanged: usize,
    /// Files written back, or that would be in a dry run
    pub fixed: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
}

impl RunReport {
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        self.visited += 1;
        match outcome {
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Fixed | FileOutcome::WouldFix => self.fixed.push(path),
        }
    }

    pub fn record_failure(&mut self, path: PathBuf, error: impl ToString) {
        self.visited += 1;
        self.failed.push(FailedFile {
            path,
            error: error.to_string(),
        });
    }

    pub fn has_changes(&self) -> bool {
        !self.fixed.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
