//! Element registry: owner back-references and fixed-value seeding.

use tracing::debug;

use crate::netlist::{Definition, ElementId, Signal};

/// Per-node bookkeeping built once at the start of a resolution run.
#[derive(Debug)]
pub(crate) struct Registry {
    /// Owning element per node, parallel to the definition's node list.
    /// Junctions and unwired pins have no owner.
    pub owner: Vec<Option<ElementId>>,
    /// Working signal per node, with fixed outputs already seeded.
    pub states: Vec<Signal>,
}

/// Register every element's ports and seed fixed output levels.
///
/// A node wired as a pin of two elements keeps the later registration;
/// the wire graph still carries the signal between them, so ownership
/// only matters for locating the element that computes an output.
pub(crate) fn build(definition: &Definition) -> Registry {
    let node_count = definition.node_count();
    let mut owner = vec![None; node_count];
    let mut states = vec![Signal::Unknown; node_count];

    for (index, element) in definition.elements.iter().enumerate() {
        let id = ElementId(index);
        for node in element.sink_nodes() {
            owner[node.index()] = Some(id);
        }
        for node in element.source_nodes() {
            owner[node.index()] = Some(id);
        }
        element.seed(&mut states);
    }

    let seeded = states.iter().filter(|state| state.is_known()).count();
    debug!(seeded, nodes = node_count, "registered elements and seeded fixed outputs");

    Registry { owner, states }
}
