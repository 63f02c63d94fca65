//! Error types for netlist parsing

use thiserror::Error;

/// Per-circuit failure category.
///
/// The report distinguishes malformed block text from wiring that cannot
/// describe a combinational circuit. Every parse or evaluation error maps
/// to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-numeric tokens, out-of-range counts or gate-kind codes, or a
    /// block with the wrong number of lines
    Format,
    /// Wire references out of bounds, or a feedback loop found at
    /// evaluation time
    Linkage,
}

/// Netlist parse errors
#[derive(Debug, Error)]
pub enum NetlistError {
    #[error("malformed integer token {token:?} on line {line}")]
    BadInteger { token: String, line: usize },

    #[error("input pin count {0} outside 1..=16")]
    PinCount(i64),

    #[error("gate count {0} outside 1..=1000")]
    GateCount(i64),

    #[error("unknown gate kind code {code} for gate {gate}")]
    GateKind { code: i64, gate: usize },

    #[error("block ended before both count lines")]
    MissingCounts,

    #[error("expected {expected} gate lines, found {found}")]
    GateLines { expected: usize, found: usize },

    #[error("gate {gate} line not terminated by 0")]
    Terminator { gate: usize },

    #[error("wire reference {reference} out of range for gate {gate}")]
    WireRef { reference: i64, gate: usize },
}

impl NetlistError {
    /// The failure category this error is reported under.
    pub fn kind(&self) -> FailureKind {
        match self {
            NetlistError::BadInteger { .. }
            | NetlistError::PinCount(_)
            | NetlistError::GateCount(_)
            | NetlistError::GateKind { .. }
            | NetlistError::MissingCounts
            | NetlistError::GateLines { .. }
            | NetlistError::Terminator { .. } => FailureKind::Format,
            NetlistError::WireRef { .. } => FailureKind::Linkage,
        }
    }
}
