//! Rewrites upstream vector files into the `f_`-prefixed form.
//!
//! Files are processed one at a time in ascending opcode order. Each file is
//! read, converted and written before the next is opened, and the first error
//! ends the run. Outputs written before the failure are left on disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::FormatError;
use crate::model::{FormattedCase, TestCase};
use crate::opcode::Opcode;
use crate::report::{FileSummary, RunSummary};

/// Converts upstream records to the formatted shape, preserving order.
#[must_use]
pub fn reformat_records(cases: Vec<TestCase>) -> Vec<FormattedCase> {
    cases.into_iter().map(FormattedCase::from).collect()
}

/// Reads and parses one upstream vector file.
///
/// # Errors
///
/// Returns [`FormatError::MissingFile`] if `path` does not exist,
/// [`FormatError::Read`] if it cannot be read, and
/// [`FormatError::MalformedJson`] if it is not an array of test-case records.
pub fn read_cases(path: &Path) -> Result<Vec<TestCase>, FormatError> {
    read_json(path)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FormatError> {
    let bytes = fs::read(path).map_err(|e| FormatError::from_read(path.to_path_buf(), e))?;
    serde_json::from_slice(&bytes).map_err(|source| FormatError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes formatted records to `path` as compact JSON, replacing any existing file.
///
/// # Errors
///
/// Returns [`FormatError::Serialize`] if the records cannot be encoded and
/// [`FormatError::Write`] if the file cannot be written.
pub fn write_cases(path: &Path, cases: &[FormattedCase]) -> Result<(), FormatError> {
    let bytes = serde_json::to_vec(cases).map_err(|source| FormatError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes).map_err(|source| FormatError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Formats the file for one opcode inside `dir`.
///
/// # Errors
///
/// Propagates any read, parse or write failure for this file.
pub fn format_file(dir: &Path, opcode: Opcode) -> Result<FileSummary, FormatError> {
    let src = opcode.input_path(dir);
    let dst = opcode.output_path(dir);

    let formatted = reformat_records(read_cases(&src)?);
    let summary = FileSummary {
        opcode,
        records: formatted.len(),
        cycles: formatted.iter().map(|c| c.cycles.len()).sum(),
    };
    write_cases(&dst, &formatted)?;

    debug!(
        src = %src.display(),
        dst = %dst.display(),
        records = summary.records,
        cycles = summary.cycles,
        "formatted"
    );
    Ok(summary)
}

/// Formats all 256 opcode files inside `dir`.
///
/// # Errors
///
/// Returns the first failure encountered; no later file is touched.
pub fn format_all(dir: &Path) -> Result<RunSummary, FormatError> {
    let mut summary = RunSummary::new();
    for opcode in Opcode::all() {
        summary.push(format_file(dir, opcode)?);
    }
    info!(
        dir = %dir.display(),
        files = summary.files.len(),
        records = summary.record_count(),
        cycles = summary.cycle_count(),
        "formatting complete"
    );
    Ok(summary)
}
