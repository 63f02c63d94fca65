//! ASCII truth-table report.
//!
//! Per circuit: a title naming the output-pin count, `i`/`o` column
//! headers with 1-based pin numbers, a rule line, then one line per
//! truth-table row with the input bits, a `|` separator, and the output
//! bits. Failed circuits get a one-line error message instead. Every
//! circuit's section ends with a blank line.

use gatetab_check::TruthTable;
use gatetab_core::FailureKind;

/// Formats one evaluated circuit. `index` is zero-based; the report
/// numbers circuits from 1.
pub fn format_table(index: usize, table: &TruthTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Circuit {}: {} output pin{}\n",
        index + 1,
        table.num_outputs,
        if table.num_outputs > 1 { "s" } else { "" },
    ));
    out.push_str("Truth table:\n");

    let mut names = String::new();
    let mut numbers = String::new();
    let mut rule = String::new();
    for pin in 0..table.num_inputs {
        names.push_str("i ");
        numbers.push_str(&format!("{} ", pin + 1));
        rule.push_str("--");
    }
    names.push('|');
    numbers.push('|');
    rule.push('+');
    for pin in 0..table.num_outputs {
        names.push_str(" o");
        numbers.push_str(&format!(" {}", pin + 1));
        rule.push_str("--");
    }
    out.push_str(&names);
    out.push('\n');
    out.push_str(&numbers);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in &table.rows {
        for &bit in &row.inputs {
            out.push_str(if bit { "1 " } else { "0 " });
        }
        out.push('|');
        for &bit in &row.outputs {
            out.push_str(if bit { " 1" } else { " 0" });
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Formats the one-line error section for a failed circuit.
pub fn format_failure(index: usize, kind: FailureKind) -> String {
    let reason = match kind {
        FailureKind::Format => "Wrong input file format!",
        FailureKind::Linkage => {
            "There might be wrong linkage assignment or against size restriction!"
        }
    };
    format!("Circuit {} error: {}\n\n", index + 1, reason)
}
