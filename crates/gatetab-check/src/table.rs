//! Truth-table driver.
//!
//! Enumerates all `2^n` input assignments for a parsed circuit and
//! evaluates each row against the shared circuit shape. The structure is
//! parsed once; only the evaluator's scratch state is recycled between
//! rows.

use gatetab_core::Circuit;
use tracing::debug;

use crate::eval::{EvalError, Evaluator};

/// One truth-table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// The input assignment, one value per pin in declaration order.
    pub inputs: Vec<bool>,
    /// The terminal gates' outputs in declaration order.
    pub outputs: Vec<bool>,
}

/// A fully evaluated truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// Number of input pins.
    pub num_inputs: usize,
    /// Number of output pins (terminal gates).
    pub num_outputs: usize,
    /// All `2^num_inputs` rows, in row-index order.
    pub rows: Vec<TableRow>,
}

/// The assignment for truth-table row `row`: the big-endian binary
/// expansion of the row index, most significant bit first. The first
/// input pin is the most significant bit, so it flips slowest.
pub fn assignment_for_row(row: usize, width: usize) -> Vec<bool> {
    (0..width)
        .map(|bit| (row >> (width - 1 - bit)) & 1 == 1)
        .collect()
}

/// Evaluates every truth-table row of `circuit`, in row-index order.
///
/// A feedback loop fails the circuit on the first row (the loop is a
/// property of the shape, not of any assignment), and an unwired NOT
/// gate fails on whichever row first tries to resolve it - in practice
/// also the first, since resolution order does not depend on values.
pub fn tabulate(circuit: &Circuit) -> Result<TruthTable, EvalError> {
    let width = circuit.num_inputs();
    let mut evaluator = Evaluator::new(circuit);
    let mut rows = Vec::with_capacity(1usize << width);
    for row in 0..1usize << width {
        let inputs = assignment_for_row(row, width);
        let outputs = evaluator.evaluate(&inputs)?;
        rows.push(TableRow { inputs, outputs });
    }
    debug!(
        inputs = width,
        gates = circuit.num_gates(),
        outputs = circuit.terminal_gates().len(),
        rows = rows.len(),
        "tabulated circuit"
    );
    Ok(TruthTable {
        num_inputs: width,
        num_outputs: circuit.terminal_gates().len(),
        rows,
    })
}
