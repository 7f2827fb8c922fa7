//! Test-vector record types.
//!
//! Two shapes exist on disk. [`TestCase`] is the upstream form, where each bus
//! cycle is a positional `[address, byte, action]` triple. [`FormattedCase`] is
//! the rewritten form, where each cycle is a labeled [`Cycle`] object and the
//! machine states are renamed to `initial_state` / `final_state`.

use serde::{Deserialize, Serialize};

/// Opaque machine snapshot (registers, RAM contents). Never interpreted here.
///
/// Object keys keep their file order (`serde_json` is built with
/// `preserve_order`), so a state is written back exactly as it was read.
pub type State = serde_json::Value;

/// Address or data value of a bus cycle.
///
/// Kept as a raw JSON number so any integer the vectors carry, including
/// values outside `i64`, passes through without range checks.
pub type BusValue = serde_json::Number;

/// One bus cycle in upstream form: `[address, byte, action]`.
///
/// Deserializes only from a JSON array of exactly three elements, so a
/// truncated or padded tuple is rejected as malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCycle(pub Option<BusValue>, pub Option<BusValue>, pub String);

/// One bus cycle in formatted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Bus address, or `null` when the vector leaves it unspecified.
    pub address: Option<BusValue>,
    /// Data byte on the bus, or `null`.
    pub byte: Option<BusValue>,
    /// Access label, e.g. `"read"` or `"write"`.
    pub action: String,
}

impl From<RawCycle> for Cycle {
    fn from(RawCycle(address, byte, action): RawCycle) -> Self {
        Self {
            address,
            byte,
            action,
        }
    }
}

/// A test case as published upstream.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TestCase {
    /// Test name, usually the instruction bytes.
    pub name: String,
    /// State before the instruction executes.
    pub initial: State,
    /// State after the instruction executes.
    #[serde(rename = "final")]
    pub final_: State,
    /// Bus activity, in order.
    pub cycles: Vec<RawCycle>,
}

/// A test case in the `f_`-prefixed output form.
///
/// Field order here is the serialized field order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FormattedCase {
    /// Test name, copied verbatim.
    pub name: String,
    /// Copied verbatim from [`TestCase::initial`].
    pub initial_state: State,
    /// Copied verbatim from [`TestCase::final_`].
    pub final_state: State,
    /// One labeled cycle per upstream tuple, same order.
    pub cycles: Vec<Cycle>,
}

impl From<TestCase> for FormattedCase {
    fn from(case: TestCase) -> Self {
        Self {
            name: case.name,
            initial_state: case.initial,
            final_state: case.final_,
            cycles: case.cycles.into_iter().map(Cycle::from).collect(),
        }
    }
}
