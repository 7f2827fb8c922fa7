//! Single-step opcode test vectors.
//!
//! The `opvec-vectors` crate reads the 256 per-opcode test-vector files
//! (`00.json` … `ff.json`), rewrites each record's cycle tuples into labeled
//! objects, and writes the result next to the input as `f_00.json` … `f_ff.json`.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let summary = opvec_vectors::format_all(Path::new(".")).expect("format failed");
//! assert_eq!(summary.files.len(), 256);
//! ```
//!
//! # Record shapes
//!
//! | File | Record | Cycle |
//! |------|--------|-------|
//! | `3a.json` | `{name, initial, final, cycles}` | `[address, byte, action]` |
//! | `f_3a.json` | `{name, initial_state, final_state, cycles}` | `{address, byte, action}` |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod format;
pub mod model;
pub mod opcode;
pub mod report;
pub mod verify;

pub use error::FormatError;
pub use format::{format_all, format_file, read_cases, reformat_records, write_cases};
pub use model::{BusValue, Cycle, FormattedCase, RawCycle, State, TestCase};
pub use opcode::{output_name_for, Opcode, OUTPUT_PREFIX};
pub use report::{FileSummary, RunSummary, Severity, VerifyReport, VerifyResult};
pub use verify::{verify_all, verify_file};
