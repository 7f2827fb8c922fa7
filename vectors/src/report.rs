//! Run summaries and verification report types.

use crate::opcode::Opcode;

/// Counts for one formatted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    /// Opcode whose file was processed.
    pub opcode: Opcode,
    /// Number of test-case records written.
    pub records: usize,
    /// Total cycles across all records.
    pub cycles: usize,
}

/// Aggregate of a complete formatting run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// One entry per processed file, in processing order.
    pub files: Vec<FileSummary>,
}

impl RunSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a processed file.
    pub fn push(&mut self, file: FileSummary) {
        self.files.push(file);
    }

    /// Total records across all files.
    pub fn record_count(&self) -> usize {
        self.files.iter().map(|f| f.records).sum()
    }

    /// Total cycles across all files.
    pub fn cycle_count(&self) -> usize {
        self.files.iter().map(|f| f.cycles).sum()
    }
}

/// Outcome of a single verification check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The check failed.
    Failure,
}

/// Result of verifying one formatted file against its input.
#[derive(Debug, Clone)]
pub struct VerifyResult {
    /// Opcode whose file pair was checked.
    pub opcode: Opcode,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// One line per mismatch found.
    pub details: Vec<String>,
}

impl VerifyResult {
    /// Creates a passing result.
    pub fn pass(opcode: Opcode, message: impl Into<String>) -> Self {
        Self {
            opcode,
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result with mismatch detail lines.
    pub fn fail_with_details(
        opcode: Opcode,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            opcode,
            message: message.into(),
            severity: Severity::Failure,
            details,
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated verification report over all checked files.
#[derive(Debug, Default)]
pub struct VerifyReport {
    /// Results in opcode order.
    pub results: Vec<VerifyResult>,
}

impl VerifyReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: VerifyResult) {
        self.results.push(result);
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if no check failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Iterates over failed results only.
    pub fn failures(&self) -> impl Iterator<Item = &VerifyResult> {
        self.results.iter().filter(|r| r.is_failure())
    }
}
