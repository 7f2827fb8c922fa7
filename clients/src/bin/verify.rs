//! `opvec-verify` — Checks every `f_XX.json` against the `XX.json` it was
//! formatted from.
//!
//! Prints one block per non-conforming file and a summary line. Exits with
//! status 1 if any file fails or cannot be read.
//!
//! **Usage:**
//! ```
//! opvec-verify [--dir <path>] [-v...] [-q]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use opvec_vectors::{verify_all, VerifyReport};

/// Verify formatted single-step opcode test vectors.
#[derive(Parser)]
#[command(
    name = "opvec-verify",
    version,
    about = "Verify f_-prefixed test vectors against their inputs"
)]
struct Args {
    /// Directory holding both the inputs and the f_-prefixed outputs.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logging and the summary line; failures are still printed.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    opvec_clients::init_logging(args.verbose, args.quiet);

    match run(&args) {
        Ok(report) if report.all_passed() => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<VerifyReport> {
    let report = verify_all(&args.dir)
        .with_context(|| format!("Failed to verify vectors in {}", args.dir.display()))?;

    for failure in report.failures() {
        println!("[FAIL] {}", failure.message);
        for detail in &failure.details {
            println!("       {detail}");
        }
    }

    if !args.quiet {
        println!(
            "{} files checked, {} failed",
            report.results.len(),
            report.failure_count()
        );
    }
    Ok(report)
}
