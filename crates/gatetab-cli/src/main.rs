//! gatetab CLI
//!
//! Reads a document of circuit netlist blocks, evaluates every circuit
//! against its full truth table, and writes an ASCII report:
//!
//! ```text
//! gatetab <INPUT> <OUTPUT>
//! ```
//!
//! Circuits are processed in isolation: a malformed or cyclic circuit
//! contributes a one-line error to the report and the run continues with
//! the next block. Only failing to read or write the files themselves
//! aborts the process.

mod report;
mod split;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gatetab_check::{tabulate, TruthTable};
use gatetab_core::{parse_netlist, FailureKind};
use tracing::{debug, warn};

use crate::report::{format_failure, format_table};
use crate::split::split_blocks;

/// Evaluate combinational logic netlists against their truth tables.
#[derive(Parser, Debug)]
#[command(name = "gatetab")]
#[command(about = "Truth-table evaluation of combinational logic netlists")]
#[command(version)]
struct Args {
    /// Input document: a sequence of circuit netlist blocks
    input: PathBuf,

    /// Output file for the truth-table report
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let doc = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let content = run(&doc);

    fs::write(&args.output, content)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}

/// Evaluates every circuit block in `doc` and aggregates the report.
fn run(doc: &str) -> String {
    let mut content = String::new();
    for (index, block) in split_blocks(doc).iter().enumerate() {
        match process_block(index, block) {
            Ok(table) => {
                debug!(
                    circuit = index + 1,
                    inputs = table.num_inputs,
                    outputs = table.num_outputs,
                    "circuit evaluated"
                );
                content.push_str(&format_table(index, &table));
            }
            Err(kind) => content.push_str(&format_failure(index, kind)),
        }
    }
    content
}

/// Parses and tabulates one block, reducing any failure to its report
/// category. The specific error is logged here, where it still exists.
fn process_block(index: usize, block: &str) -> Result<TruthTable, FailureKind> {
    let circuit = parse_netlist(block).map_err(|e| {
        warn!(circuit = index + 1, error = %e, "netlist rejected");
        e.kind()
    })?;
    tabulate(&circuit).map_err(|e| {
        warn!(circuit = index + 1, error = %e, "evaluation failed");
        e.kind()
    })
}
