//! Successor set construction.
//!
//! For every node, the set of nodes whose value it determines during
//! evaluation:
//! - a component input pin determines the not-yet-seeded outputs of its
//!   element (for relays, the boundary outputs),
//! - a component output pin determines every pin and junction on its
//!   electrical net,
//! - a junction determines nothing by itself.
//!
//! An output never appears in another node's successors: nets with two
//! driven outputs are not detected, and no short-circuit resolution is
//! attempted.

use crate::elements::Element;
use crate::netlist::{Definition, NodeId, NodeKind};

use super::registry::Registry;

/// Compute the successor set of every node.
pub(crate) fn successor_sets(definition: &Definition, registry: &Registry) -> Vec<Vec<NodeId>> {
    let node_count = definition.node_count();
    let mut successors = vec![Vec::new(); node_count];

    for (index, node) in definition.nodes.iter().enumerate() {
        match node.kind {
            NodeKind::Sink => {
                if let Some(owner) = registry.owner[index] {
                    successors[index] =
                        element_successors(&definition.elements[owner.index()], registry);
                }
            }
            NodeKind::Source => {
                successors[index] = net_successors(definition, NodeId(index));
            }
            NodeKind::Junction => {}
        }
    }

    successors
}

/// The output pins an input pin feeds: every source node of its owning
/// element without a seeded level. Relay boundary inputs feed the
/// relay's boundary outputs.
fn element_successors(element: &Element, registry: &Registry) -> Vec<NodeId> {
    if let Element::Subcircuit(sub) = element {
        if sub.relay_kind().is_some() {
            return sub.outputs.clone();
        }
    }
    element
        .source_nodes()
        .into_iter()
        .filter(|node| !registry.states[node.index()].is_known())
        .collect()
}

/// Flood an output pin's electrical net: every node reachable over
/// wire edges that is not itself an output pin. The walk crosses
/// through output pins without collecting them.
fn net_successors(definition: &Definition, start: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; definition.node_count()];
    visited[start.index()] = true;
    let mut stack = vec![start];
    let mut reachable = Vec::new();

    while let Some(node) = stack.pop() {
        for &next in &definition.nodes[node.index()].connections {
            if !visited[next.index()] {
                visited[next.index()] = true;
                if definition.nodes[next.index()].kind != NodeKind::Source {
                    reachable.push(next);
                }
                stack.push(next);
            }
        }
    }

    reachable
}
