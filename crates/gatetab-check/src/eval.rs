//! Topological circuit evaluation.
//!
//! One pass seeds the input pins from an assignment and runs a worklist
//! over the wire relation: popping a ready node delivers its value to
//! each successor and decrements the successor's remaining-wire count;
//! a successor that reaches zero resolves and becomes ready in turn.
//! Worklist order does not affect the result (gate aggregation is
//! associative and commutative over the input bag), so a plain FIFO is
//! used. A drained worklist with unconsumed wires means a feedback loop.

use std::collections::VecDeque;

use gatetab_core::{Circuit, FailureKind, NodeId, NodeKind};
use thiserror::Error;
use tracing::trace;

/// Evaluation failures. Both are linkage failures in the report taxonomy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("circuit contains a feedback loop")]
    Cycle,

    #[error("NOT gate {0} has no incoming wire")]
    NotWithoutInput(NodeId),
}

impl EvalError {
    /// The failure category this error is reported under.
    pub fn kind(&self) -> FailureKind {
        FailureKind::Linkage
    }
}

/// The values a node has received from its predecessors this pass.
///
/// AND and OR aggregate the whole bag. NOT gates (and input pins, were
/// one ever wired as a target) follow a last-write-wins policy: a second
/// wire mistakenly run into a NOT silently overrides the first instead
/// of failing. Known quirk, kept deliberately; see DESIGN.md.
#[derive(Debug, Default, Clone)]
struct Bag(Vec<bool>);

impl Bag {
    fn receive(&mut self, kind: NodeKind, value: bool) {
        if matches!(kind, NodeKind::Not | NodeKind::Input) {
            self.0.clear();
        }
        self.0.push(value);
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Computes a gate's output from its collected inputs.
///
/// Only valid once every incoming wire has delivered. An empty bag is
/// the vacuous case: AND is true, OR is false, and NOT has no defined
/// value, so an unwired NOT is an error.
fn resolve(kind: NodeKind, bag: &Bag, id: NodeId) -> Result<bool, EvalError> {
    match kind {
        NodeKind::And => Ok(!bag.0.contains(&false)),
        NodeKind::Or => Ok(bag.0.contains(&true)),
        NodeKind::Not => match bag.0.last() {
            Some(&value) => Ok(!value),
            None => Err(EvalError::NotWithoutInput(id)),
        },
        NodeKind::Input => unreachable!("input pins are seeded, never resolved"),
    }
}

/// Evaluates a circuit against one input assignment at a time.
///
/// The circuit shape is borrowed immutably; all per-row state (input
/// bags, resolved values, remaining wire counts, the worklist) is owned
/// here and reset at the start of every [`evaluate`](Evaluator::evaluate)
/// call, so one evaluator serves every row of a truth table.
#[derive(Debug)]
pub struct Evaluator<'c> {
    circuit: &'c Circuit,
    remaining: Vec<usize>,
    bags: Vec<Bag>,
    values: Vec<Option<bool>>,
    ready: VecDeque<NodeId>,
}

impl<'c> Evaluator<'c> {
    /// Creates an evaluator with scratch state sized for `circuit`.
    pub fn new(circuit: &'c Circuit) -> Self {
        let len = circuit.len();
        Evaluator {
            circuit,
            remaining: vec![0; len],
            bags: vec![Bag::default(); len],
            values: vec![None; len],
            ready: VecDeque::new(),
        }
    }

    /// Runs one truth-table row.
    ///
    /// `inputs` holds one value per input pin, in declaration order. On
    /// success, returns the terminal gates' outputs in declaration
    /// order. On failure the row has no result: the circuit has a
    /// feedback loop (reported identically for every row, since the loop
    /// is topological) or a NOT gate with nothing wired into it.
    ///
    /// Panics if `inputs` does not match the circuit's pin count.
    pub fn evaluate(&mut self, inputs: &[bool]) -> Result<Vec<bool>, EvalError> {
        let circuit = self.circuit;
        assert_eq!(
            inputs.len(),
            circuit.num_inputs(),
            "assignment width {} does not match {} input pins",
            inputs.len(),
            circuit.num_inputs(),
        );

        self.reset();

        // Input pins are ready by construction. So is a gate with no
        // incoming wires at all, which resolves from its empty bag.
        for id in circuit.node_ids() {
            if circuit.indegree(id) != 0 {
                continue;
            }
            let value = match circuit.kind(id) {
                NodeKind::Input => inputs[id.0],
                kind => resolve(kind, &self.bags[id.0], id)?,
            };
            self.values[id.0] = Some(value);
            self.ready.push_back(id);
        }

        while let Some(n) = self.ready.pop_front() {
            let value = self.values[n.0].expect("ready nodes have resolved");
            trace!(node = %n, value, "propagate");
            for &m in circuit.successors(n) {
                self.remaining[m.0] -= 1;
                self.bags[m.0].receive(circuit.kind(m), value);
                if self.remaining[m.0] == 0 {
                    self.values[m.0] = Some(resolve(circuit.kind(m), &self.bags[m.0], m)?);
                    self.ready.push_back(m);
                }
            }
        }

        // Every wire consumed iff the graph is acyclic.
        if self.remaining.iter().any(|&r| r != 0) {
            return Err(EvalError::Cycle);
        }

        Ok(circuit
            .terminal_gates()
            .iter()
            .map(|&id| self.values[id.0].expect("all wires were consumed"))
            .collect())
    }

    fn reset(&mut self) {
        self.remaining.copy_from_slice(self.circuit.indegrees());
        for bag in &mut self.bags {
            bag.clear();
        }
        for value in &mut self.values {
            *value = None;
        }
        self.ready.clear();
    }
}
