//! Per-run reporting.
//!
//! Both pipelines recover from per-entry failures and keep going; the
//! `RunReport` collects what happened so the CLI can print a summary and
//! pick the exit code.

use std::fmt;

use crate::output::Printer;

/// Severity level for a run diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic recorded while processing entries.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Machine-readable code (e.g. "schmoji::resolve").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional hint on how to fix the issue.
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Entries that produced at least one output file.
    pub entries_copied: usize,
    /// Entries skipped because of a recoverable failure.
    pub entries_skipped: usize,
    /// Individual files written (or that would be written, in a dry run).
    pub files_copied: usize,
    diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning diagnostic and print it immediately.
    ///
    /// Printing happens at record time so dry runs and real runs produce
    /// the warning stream in the same order as the copy lines.
    pub fn warn(&mut self, printer: &Printer, diagnostic: Diagnostic) {
        printer.warning("Skipping", &diagnostic.message);
        self.diagnostics.push(diagnostic);
    }

    /// Record a diagnostic without printing.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Merge another report into this one.
    pub fn merge(&mut self, other: RunReport) {
        self.entries_copied += other.entries_copied;
        self.entries_skipped += other.entries_skipped;
        self.files_copied += other.files_copied;
        self.diagnostics.extend(other.diagnostics);
    }

    /// Iterate over recorded diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}
