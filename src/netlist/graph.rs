//! Netlist graph structure.

use crate::elements::Element;
use crate::error::{LogicsnapError, Result};

use super::types::{NodeId, NodeKind};

/// Name of the designated top-level definition in a document.
pub const MAIN_DEFINITION: &str = "Main";

/// A point in the wire graph: a component pin or a plain junction.
///
/// Nodes carry only topology. The resolved signal per node lives in the
/// [`Snapshot`](crate::resolver::Snapshot) produced by a resolution run,
/// so one definition can back any number of runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// What kind of point this is.
    pub kind: NodeKind,
    /// Nodes reachable over a direct, undirected wire edge.
    pub connections: Vec<NodeId>,
}

impl Node {
    /// Create a node.
    pub fn new(kind: NodeKind, connections: Vec<NodeId>) -> Self {
        Self { kind, connections }
    }

    /// Create an unconnected node of the given kind.
    pub fn isolated(kind: NodeKind) -> Self {
        Self {
            kind,
            connections: Vec::new(),
        }
    }
}

/// One named schematic scope: a flat node list plus the element
/// instances wired into it.
///
/// Sub-circuit instances in a parent definition reference other
/// definitions by name; their boundary nodes live in the parent's node
/// list, so resolving a definition never descends into the referenced
/// scopes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    /// Scope name.
    pub name: String,
    /// All wire-graph nodes, indexed by [`NodeId`].
    pub nodes: Vec<Node>,
    /// All element instances placed in this scope.
    pub elements: Vec<Element>,
}

impl Definition {
    /// Create a definition.
    pub fn new(name: impl Into<String>, nodes: Vec<Node>, elements: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            nodes,
            elements,
        }
    }

    /// Number of wire-graph nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// A complete parsed schematic document: every named definition.
///
/// Only the designated top-level definition is resolved; the others
/// exist so sub-circuit instances can be matched to their referenced
/// scope by name.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Netlist {
    /// All definitions, in document order.
    pub definitions: Vec<Definition>,
}

impl Netlist {
    /// Create a netlist from its definitions.
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Find a definition by name.
    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|def| def.name == name)
    }

    /// The designated top-level definition.
    pub fn main(&self) -> Result<&Definition> {
        self.definition(MAIN_DEFINITION)
            .ok_or_else(|| LogicsnapError::missing_definition(MAIN_DEFINITION))
    }
}
