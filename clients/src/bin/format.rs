//! `opvec-format` — Rewrites the 256 single-step opcode vector files into the
//! labeled-cycle form.
//!
//! **Inputs:** `<dir>/00.json` … `<dir>/ff.json`
//!
//! **Outputs:** `<dir>/f_00.json` … `<dir>/f_ff.json`
//!
//! **Usage:**
//! ```
//! opvec-format [--dir <path>] [-v...] [-q]
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

/// Reformat single-step opcode test vectors.
#[derive(Parser)]
#[command(
    name = "opvec-format",
    version,
    about = "Reformat single-step opcode test vectors into f_-prefixed files"
)]
struct Args {
    /// Directory holding 00.json … ff.json; outputs are written alongside.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging; errors are still reported.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    opvec_clients::init_logging(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    opvec_vectors::format_all(&args.dir)
        .with_context(|| format!("Failed to format vectors in {}", args.dir.display()))?;
    Ok(())
}
