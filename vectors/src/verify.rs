//! Checks formatted files against the inputs they were produced from.
//!
//! A formatted file conforms when it has the same number of records as its
//! input, every name and state is carried over unchanged, and every cycle is
//! the labeled form of the tuple at the same position.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::FormatError;
use crate::format::read_json;
use crate::model::{Cycle, FormattedCase, TestCase};
use crate::opcode::Opcode;
use crate::report::{VerifyReport, VerifyResult};

/// Verifies the input/output pair for one opcode inside `dir`.
///
/// Mismatches are reported in the returned [`VerifyResult`]; only I/O and
/// parse failures are errors.
///
/// # Errors
///
/// Returns an error if either file is missing, unreadable or malformed.
pub fn verify_file(dir: &Path, opcode: Opcode) -> Result<VerifyResult, FormatError> {
    let inputs: Vec<TestCase> = read_json(&opcode.input_path(dir))?;
    let outputs: Vec<FormattedCase> = read_json(&opcode.output_path(dir))?;

    let details = compare(&inputs, &outputs);
    let result = if details.is_empty() {
        VerifyResult::pass(
            opcode,
            format!(
                "{} matches {} ({} records)",
                opcode.output_name(),
                opcode.input_name(),
                inputs.len()
            ),
        )
    } else {
        warn!(
            opcode = %opcode,
            mismatches = details.len(),
            "formatted file does not match input"
        );
        VerifyResult::fail_with_details(
            opcode,
            format!("{} does not match {}", opcode.output_name(), opcode.input_name()),
            details,
        )
    };
    Ok(result)
}

/// Verifies all 256 input/output pairs inside `dir`.
///
/// # Errors
///
/// Returns the first I/O or parse failure; mismatches do not stop the run.
pub fn verify_all(dir: &Path) -> Result<VerifyReport, FormatError> {
    let mut report = VerifyReport::new();
    for opcode in Opcode::all() {
        report.push(verify_file(dir, opcode)?);
    }
    debug!(
        dir = %dir.display(),
        checked = report.results.len(),
        failures = report.failure_count(),
        "verification complete"
    );
    Ok(report)
}

fn compare(inputs: &[TestCase], outputs: &[FormattedCase]) -> Vec<String> {
    let mut details = Vec::new();
    if inputs.len() != outputs.len() {
        details.push(format!(
            "record count: expected {}, got {}",
            inputs.len(),
            outputs.len()
        ));
    }

    for (i, (input, output)) in inputs.iter().zip(outputs).enumerate() {
        if input.name != output.name {
            details.push(format!(
                "record {i}: name {:?} != {:?}",
                output.name, input.name
            ));
        }
        if input.initial != output.initial_state {
            details.push(format!("record {i} ({}): initial_state differs", input.name));
        }
        if input.final_ != output.final_state {
            details.push(format!("record {i} ({}): final_state differs", input.name));
        }
        if input.cycles.len() != output.cycles.len() {
            details.push(format!(
                "record {i} ({}): cycle count: expected {}, got {}",
                input.name,
                input.cycles.len(),
                output.cycles.len()
            ));
        }
        for (j, (raw, cycle)) in input.cycles.iter().zip(&output.cycles).enumerate() {
            let expected = Cycle::from(raw.clone());
            if &expected != cycle {
                details.push(format!(
                    "record {i} ({}): cycle {j}: expected {expected:?}, got {cycle:?}",
                    input.name
                ));
            }
        }
    }
    details
}
