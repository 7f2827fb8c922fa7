//! Opcode-indexed file naming.

use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix prepended to an input file name to form its output file name.
pub const OUTPUT_PREFIX: &str = "f_";

/// An opcode byte; one test-vector file exists per opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opcode(pub u8);

impl Opcode {
    /// Number of opcodes, and therefore of input files.
    pub const COUNT: usize = 0x100;

    /// All opcodes in ascending order, `0x00` through `0xff`.
    pub fn all() -> impl Iterator<Item = Opcode> {
        (0..=u8::MAX).map(Opcode)
    }

    /// Input file name: lowercase two-digit hex, e.g. `"3a.json"`.
    #[must_use]
    pub fn input_name(self) -> String {
        format!("{:02x}.json", self.0)
    }

    /// Output file name, e.g. `"f_3a.json"`.
    #[must_use]
    pub fn output_name(self) -> String {
        output_name_for(&self.input_name())
    }

    /// Input file path inside `dir`.
    #[must_use]
    pub fn input_path(self, dir: &Path) -> PathBuf {
        dir.join(self.input_name())
    }

    /// Output file path inside `dir`.
    #[must_use]
    pub fn output_path(self, dir: &Path) -> PathBuf {
        dir.join(self.output_name())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

/// Output file name for an input file name.
#[must_use]
pub fn output_name_for(input: &str) -> String {
    format!("{OUTPUT_PREFIX}{input}")
}
