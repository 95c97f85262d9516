//! Netlist representation and validation.
//!
//! This module provides the data model handed over by the external
//! document parser: wire-graph nodes, named definitions, and the
//! netlist container. The [`Definition`] struct holds one scope's nodes
//! and elements in a form suitable for resolution.

mod graph;
mod types;
mod validate;

pub use graph::{Definition, Netlist, Node, MAIN_DEFINITION};
pub use types::*;
pub use validate::validate_definition;
