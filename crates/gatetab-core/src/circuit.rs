//! Circuit graph model.
//!
//! A circuit is a directed graph where:
//! - Source nodes are input pins (values supplied per truth-table row)
//! - Internal nodes are AND/OR/NOT gates
//! - Nodes without outgoing wires are the circuit's outputs
//!
//! The shape built here is immutable: it is constructed once per netlist
//! and shared by every truth-table row. Whether the graph is acyclic is
//! not decided here; the evaluator discovers feedback loops when its
//! traversal fails to consume every wire.

use std::fmt;

use rustc_hash::FxHashSet;

/// Index of a node (input pin or gate) in the circuit.
///
/// Indices `0..num_inputs` are input pins and the rest are gates, both in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Kind of a circuit node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Input pin: a source node whose value comes from the assignment
    Input,
    /// Logical AND over every collected input (empty fan-in is true)
    And,
    /// Logical OR over every collected input (empty fan-in is false)
    Or,
    /// Logical NOT of a single input
    Not,
}

impl NodeKind {
    /// Maps a netlist gate-kind code (1=AND, 2=OR, 3=NOT).
    pub fn from_code(code: i64) -> Option<NodeKind> {
        match code {
            1 => Some(NodeKind::And),
            2 => Some(NodeKind::Or),
            3 => Some(NodeKind::Not),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Input => write!(f, "input"),
            NodeKind::And => write!(f, "and"),
            NodeKind::Or => write!(f, "or"),
            NodeKind::Not => write!(f, "not"),
        }
    }
}

/// Immutable circuit shape: node kinds plus the wire relation.
#[derive(Debug, Clone)]
pub struct Circuit {
    num_inputs: usize,
    kinds: Vec<NodeKind>,
    successors: Vec<Vec<NodeId>>,
    indegrees: Vec<usize>,
    terminals: Vec<NodeId>,
}

impl Circuit {
    /// Assembles a circuit from its gate kinds and wires.
    ///
    /// `wires` are `(from, to)` node-index pairs. The wire relation is a
    /// boolean adjacency indicator, so a wire listed twice collapses to a
    /// single edge. Self-referencing wires are kept; the node's indegree
    /// can then never drain and evaluation reports a feedback loop.
    ///
    /// Panics if a wire endpoint is out of range; the parser validates
    /// references before construction.
    pub fn new(
        num_inputs: usize,
        gate_kinds: Vec<NodeKind>,
        wires: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Self {
        let len = num_inputs + gate_kinds.len();
        let mut kinds = vec![NodeKind::Input; num_inputs];
        kinds.extend(gate_kinds);

        let mut seen = FxHashSet::default();
        let mut successors = vec![Vec::new(); len];
        let mut indegrees = vec![0usize; len];
        for (from, to) in wires {
            assert!(from.0 < len && to.0 < len, "wire endpoint out of range");
            if seen.insert((from, to)) {
                successors[from.0].push(to);
                indegrees[to.0] += 1;
            }
        }

        // Terminal-ness is a property of the circuit shape, not of any
        // particular row. Only gates count as outputs: an unwired input
        // pin has no outgoing wires but is not reported.
        let terminals = (num_inputs..len)
            .map(NodeId)
            .filter(|id| successors[id.0].is_empty())
            .collect();

        Circuit {
            num_inputs,
            kinds,
            successors,
            indegrees,
            terminals,
        }
    }

    /// Number of input pins.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Number of gates (input pins excluded).
    pub fn num_gates(&self) -> usize {
        self.kinds.len() - self.num_inputs
    }

    /// Total node count (pins + gates).
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// True if the circuit has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Kind of the given node.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.kinds[id.0]
    }

    /// Nodes fed by `id`'s output.
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.successors[id.0]
    }

    /// Number of distinct wires into `id`.
    pub fn indegree(&self, id: NodeId) -> usize {
        self.indegrees[id.0]
    }

    /// Baseline indegree of every node, indexed by node id.
    pub fn indegrees(&self) -> &[usize] {
        &self.indegrees
    }

    /// Terminal gate nodes (no outgoing wires) in declaration order.
    /// These are the circuit's output pins.
    pub fn terminal_gates(&self) -> &[NodeId] {
        &self.terminals
    }

    /// Iterator over every node id in index order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.kinds.len()).map(NodeId)
    }
}
