//! Error types for the Logicsnap resolution engine.
//!
//! This module provides a unified error type [`LogicsnapError`] covering
//! the fatal conditions that can occur while preparing and resolving a
//! netlist. All of them signal malformed input rather than recoverable
//! runtime conditions: an undriven or indeterminate wire is represented
//! by [`Signal::Unknown`](crate::netlist::Signal::Unknown), never by an
//! error.

use thiserror::Error;

use crate::netlist::NodeId;

/// Result type alias using [`LogicsnapError`].
pub type Result<T> = std::result::Result<T, LogicsnapError>;

/// Unified error type for all Logicsnap operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicsnapError {
    // ============ Configuration Errors ============
    /// A multi-node port role has a cardinality the truth tables do not
    /// support (e.g. a four-input AND gate).
    #[error("{kind} has {count} {role} nodes, which is not supported")]
    UnsupportedArity {
        kind: &'static str,
        role: &'static str,
        count: usize,
    },

    /// An element port references a node index outside the definition's
    /// node list.
    #[error("{kind} references node {node}, but the definition has only {node_count} nodes")]
    NodeOutOfRange {
        kind: &'static str,
        node: NodeId,
        node_count: usize,
    },

    /// A named definition is missing from the netlist.
    #[error("definition '{name}' not found in netlist")]
    MissingDefinition { name: String },

    // ============ Resolution Errors ============
    /// The dependency graph contains a feedback loop with no seeded
    /// breaker. The schematic needs a manually seeded gate or latch on
    /// the loop before it can be resolved.
    #[error("cyclic dependency graph at node {node}")]
    CyclicGraph { node: NodeId },
}

impl LogicsnapError {
    /// Create an unsupported-arity error.
    pub fn unsupported_arity(kind: &'static str, role: &'static str, count: usize) -> Self {
        Self::UnsupportedArity { kind, role, count }
    }

    /// Create a missing-definition error.
    pub fn missing_definition(name: impl Into<String>) -> Self {
        Self::MissingDefinition { name: name.into() }
    }
}
