//! gatetab-core - Netlist model and parser
//!
//! This crate provides the shared circuit representation for gatetab:
//! - Node and gate types ([`NodeId`], [`NodeKind`])
//! - The immutable circuit graph shape ([`Circuit`])
//! - The textual netlist parser ([`parse_netlist`])
//! - The per-circuit failure taxonomy ([`NetlistError`], [`FailureKind`])
//!
//! A circuit is a directed graph whose source nodes are input pins and
//! whose internal nodes are AND/OR/NOT gates. The graph shape is built
//! once per netlist; evaluation state lives in `gatetab-check` and is
//! recycled between truth-table rows.

#![warn(clippy::all)]

pub mod circuit;
pub mod error;
pub mod netlist;

pub use circuit::{Circuit, NodeId, NodeKind};
pub use error::{FailureKind, NetlistError};
pub use netlist::{parse_netlist, MAX_GATES, MAX_INPUT_PINS};
