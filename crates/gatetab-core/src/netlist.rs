//! Netlist parser.
//!
//! One circuit block has the shape:
//!
//! ```text
//! <numInputPins>
//! <numGates>
//! <gateKind> <signedWire>... 0     (exactly numGates lines)
//! ```
//!
//! Gate-kind codes are 1=AND, 2=OR, 3=NOT. A positive wire reference `k`
//! is the output of gate `k`, a negative reference `-k` is input pin `k`,
//! both 1-based, and every gate line ends with a literal `0`. Wire
//! references may point at gates declared later in the block; the
//! feedback loops this can create are an evaluation-time failure, not a
//! parse error.

use crate::circuit::{Circuit, NodeId, NodeKind};
use crate::error::NetlistError;

/// Most input pins a circuit may declare.
pub const MAX_INPUT_PINS: usize = 16;

/// Most gates a circuit may declare.
pub const MAX_GATES: usize = 1000;

/// Parses one circuit block into its graph shape.
///
/// Returns the first error found, never partial state. The resulting
/// [`Circuit`] is reused unmodified across every truth-table row.
pub fn parse_netlist(block: &str) -> Result<Circuit, NetlistError> {
    let mut lines = block.lines().enumerate();

    let num_inputs = parse_count(lines.next())?;
    if !(1..=MAX_INPUT_PINS as i64).contains(&num_inputs) {
        return Err(NetlistError::PinCount(num_inputs));
    }
    let num_inputs = num_inputs as usize;

    let num_gates = parse_count(lines.next())?;
    if !(1..=MAX_GATES as i64).contains(&num_gates) {
        return Err(NetlistError::GateCount(num_gates));
    }
    let num_gates = num_gates as usize;

    let gate_lines: Vec<(usize, &str)> = lines.collect();
    if gate_lines.len() != num_gates {
        return Err(NetlistError::GateLines {
            expected: num_gates,
            found: gate_lines.len(),
        });
    }

    let mut gate_kinds = Vec::with_capacity(num_gates);
    let mut wires = Vec::new();
    for (gate_idx, (line_idx, line)) in gate_lines.into_iter().enumerate() {
        let gate = gate_idx + 1;
        let target = NodeId(num_inputs + gate_idx);

        let mut tokens = Vec::new();
        for token in line.split_whitespace() {
            tokens.push(parse_int(token, line_idx + 1)?);
        }
        // Shortest legal line is "<kind> 0": a gate with no wiring.
        if tokens.len() < 2 {
            return Err(NetlistError::Terminator { gate });
        }
        if tokens[tokens.len() - 1] != 0 {
            return Err(NetlistError::Terminator { gate });
        }

        let code = tokens[0];
        let kind =
            NodeKind::from_code(code).ok_or(NetlistError::GateKind { code, gate })?;
        gate_kinds.push(kind);

        for &reference in &tokens[1..tokens.len() - 1] {
            let source = wire_source(reference, num_inputs, num_gates, gate)?;
            wires.push((source, target));
        }
    }

    Ok(Circuit::new(num_inputs, gate_kinds, wires))
}

/// Parses a count line, which must be a single integer.
fn parse_count(line: Option<(usize, &str)>) -> Result<i64, NetlistError> {
    let (line_idx, text) = line.ok_or(NetlistError::MissingCounts)?;
    parse_int(text.trim(), line_idx + 1)
}

fn parse_int(token: &str, line: usize) -> Result<i64, NetlistError> {
    token.parse().map_err(|_| NetlistError::BadInteger {
        token: token.to_string(),
        line,
    })
}

/// Resolves a signed wire reference to its source node.
fn wire_source(
    reference: i64,
    num_inputs: usize,
    num_gates: usize,
    gate: usize,
) -> Result<NodeId, NetlistError> {
    let magnitude = reference.unsigned_abs() as usize;
    if reference < 0 && magnitude <= num_inputs {
        Ok(NodeId(magnitude - 1))
    } else if reference > 0 && magnitude <= num_gates {
        Ok(NodeId(num_inputs + magnitude - 1))
    } else {
        Err(NetlistError::WireRef { reference, gate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[test]
    fn test_parse_simple_block() {
        let c = parse_netlist("3\n3\n1 -1 2 3 0\n3 -2 0\n2 2 -3 0").unwrap();
        assert_eq!(c.num_inputs(), 3);
        assert_eq!(c.num_gates(), 3);
        // g1 = AND(i1, g2, g3), g2 = NOT(i2), g3 = OR(g2, i3)
        assert_eq!(c.kind(NodeId(3)), NodeKind::And);
        assert_eq!(c.kind(NodeId(4)), NodeKind::Not);
        assert_eq!(c.kind(NodeId(5)), NodeKind::Or);
        assert_eq!(c.indegree(NodeId(3)), 3);
        assert_eq!(c.indegree(NodeId(4)), 1);
        assert_eq!(c.indegree(NodeId(5)), 2);
        // Only g1 has no outgoing wires.
        assert_eq!(c.terminal_gates(), &[NodeId(3)]);
    }

    #[test]
    fn test_gate_with_no_wiring() {
        let c = parse_netlist("1\n2\n1 0\n3 -1 0").unwrap();
        assert_eq!(c.indegree(NodeId(1)), 0);
        assert_eq!(c.terminal_gates(), &[NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_pin_count_bounds() {
        assert!(matches!(
            parse_netlist("0\n1\n1 0"),
            Err(NetlistError::PinCount(0))
        ));
        assert!(matches!(
            parse_netlist("17\n1\n1 0"),
            Err(NetlistError::PinCount(17))
        ));
        assert!(matches!(
            parse_netlist("-2\n1\n1 0"),
            Err(NetlistError::PinCount(-2))
        ));
    }

    #[test]
    fn test_gate_count_bounds() {
        assert!(matches!(
            parse_netlist("1\n0\n"),
            Err(NetlistError::GateCount(0))
        ));
        let mut block = String::from("1\n1001\n");
        for _ in 0..1001 {
            block.push_str("1 -1 0\n");
        }
        assert!(matches!(
            parse_netlist(&block),
            Err(NetlistError::GateCount(1001))
        ));
    }

    #[test]
    fn test_maximum_sizes_parse() {
        let mut block = String::from("16\n1000\n");
        for _ in 0..1000 {
            block.push_str("2 -1 -16 0\n");
        }
        let c = parse_netlist(&block).unwrap();
        assert_eq!(c.num_inputs(), 16);
        assert_eq!(c.num_gates(), 1000);
    }

    #[test]
    fn test_unknown_gate_kind() {
        assert!(matches!(
            parse_netlist("1\n1\n4 -1 0"),
            Err(NetlistError::GateKind { code: 4, gate: 1 })
        ));
        // Kind 0 is rejected, not treated as a pass-through gate.
        assert!(matches!(
            parse_netlist("1\n1\n0 -1 0"),
            Err(NetlistError::GateKind { code: 0, gate: 1 })
        ));
    }

    #[test]
    fn test_malformed_tokens_are_format_errors() {
        let err = parse_netlist("x\n1\n1 -1 0").unwrap_err();
        assert!(matches!(err, NetlistError::BadInteger { .. }));
        assert_eq!(err.kind(), FailureKind::Format);

        let err = parse_netlist("1\n1\n1 -q 0").unwrap_err();
        assert!(matches!(err, NetlistError::BadInteger { .. }));

        // A count line must be a single integer.
        assert!(matches!(
            parse_netlist("1 2\n1\n1 -1 0"),
            Err(NetlistError::BadInteger { .. })
        ));
    }

    #[test]
    fn test_wire_reference_bounds() {
        // Pin reference past the pin count.
        let err = parse_netlist("2\n1\n1 -3 0").unwrap_err();
        assert!(matches!(
            err,
            NetlistError::WireRef {
                reference: -3,
                gate: 1
            }
        ));
        assert_eq!(err.kind(), FailureKind::Linkage);

        // Gate reference past the gate count.
        assert!(matches!(
            parse_netlist("2\n1\n1 2 0"),
            Err(NetlistError::WireRef {
                reference: 2,
                gate: 1
            })
        ));

        // Zero where a wire reference was expected.
        assert!(matches!(
            parse_netlist("2\n1\n1 0 -1 0"),
            Err(NetlistError::WireRef {
                reference: 0,
                gate: 1
            })
        ));
    }

    #[test]
    fn test_forward_references_are_legal() {
        // g1 consumes g2's output, declared later.
        let c = parse_netlist("1\n2\n1 -1 2 0\n3 -1 0").unwrap();
        assert_eq!(c.indegree(NodeId(1)), 2);
        assert_eq!(c.successors(NodeId(2)), &[NodeId(1)]);
    }

    #[test]
    fn test_missing_terminator() {
        assert!(matches!(
            parse_netlist("1\n1\n1 -1"),
            Err(NetlistError::Terminator { gate: 1 })
        ));
        // A bare kind with no terminator at all.
        assert!(matches!(
            parse_netlist("1\n1\n1"),
            Err(NetlistError::Terminator { gate: 1 })
        ));
    }

    #[test]
    fn test_block_shape() {
        assert!(matches!(
            parse_netlist("1"),
            Err(NetlistError::MissingCounts)
        ));
        assert!(matches!(
            parse_netlist("1\n2\n1 -1 0"),
            Err(NetlistError::GateLines {
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            parse_netlist("1\n1\n1 -1 0\n2 -1 0"),
            Err(NetlistError::GateLines {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn test_duplicate_wires_collapse_to_one_edge() {
        let c = parse_netlist("1\n1\n1 -1 -1 0").unwrap();
        assert_eq!(c.indegree(NodeId(1)), 1);
    }

    #[test]
    fn test_extreme_wire_reference_magnitudes() {
        assert!(matches!(
            parse_netlist("1\n1\n1 -9223372036854775808 0"),
            Err(NetlistError::WireRef { .. })
        ));
        assert!(matches!(
            parse_netlist("1\n1\n1 9223372036854775807 0"),
            Err(NetlistError::WireRef { .. })
        ));
    }
}
