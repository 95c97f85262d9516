//! Netlist validation.

use crate::error::{LogicsnapError, Result};

use super::Definition;

/// Validate a definition ahead of resolution.
///
/// Checks:
/// - Every multi-node port role has a cardinality the truth tables support
/// - Every element port references an existing node
///
/// Resolution itself cannot fail on port access once this passes.
pub fn validate_definition(definition: &Definition) -> Result<()> {
    for element in &definition.elements {
        element.validate_arity()?;

        let node_count = definition.node_count();
        for node in element.sink_nodes().into_iter().chain(element.source_nodes()) {
            if node.index() >= node_count {
                return Err(LogicsnapError::NodeOutOfRange {
                    kind: element.kind_name(),
                    node,
                    node_count,
                });
            }
        }
    }

    Ok(())
}
