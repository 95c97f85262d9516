//! # Logicsnap Core
//!
//! A steady-state signal resolver for digital logic schematics.
//!
//! This library provides:
//! - A netlist data model for parsed schematic documents (nodes, named
//!   definitions, sub-circuit instances)
//! - Element models with tri-state truth tables (gates, routing,
//!   latches, rails, relay contacts)
//! - A dependency-ordered resolution engine producing one static
//!   snapshot of every wire's state
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`netlist`] - Netlist representation and validation
//! - [`elements`] - Element models and their truth tables
//! - [`resolver`] - Successor sets, topological ordering, propagation
//!
//! ## Usage
//!
//! ```
//! use logicsnap_core::elements::{Element, Input, NotGate};
//! use logicsnap_core::{resolve, Definition, Node, NodeId, NodeKind, Signal};
//!
//! // Input(high) -> wire -> NOT -> output
//! let mut nodes = vec![
//!     Node::isolated(NodeKind::Source),
//!     Node::isolated(NodeKind::Sink),
//!     Node::isolated(NodeKind::Source),
//! ];
//! nodes[0].connections.push(NodeId(1));
//! nodes[1].connections.push(NodeId(0));
//!
//! let definition = Definition::new(
//!     "Main",
//!     nodes,
//!     vec![
//!         Element::Input(Input::new(NodeId(0), true)),
//!         Element::Not(NotGate::new(NodeId(1), NodeId(2))),
//!     ],
//! );
//!
//! let snapshot = resolve(&definition)?;
//! assert_eq!(snapshot.state(NodeId(2)), Signal::Low);
//! # Ok::<(), logicsnap_core::LogicsnapError>(())
//! ```
//!
//! ## Resolution Method
//!
//! The resolver computes one instant of a circuit, not a time-stepped
//! simulation. For each run:
//!
//! 1. Seed every output with a fixed level: rails, input literals,
//!    latch seeds, and manually flagged loop breakers
//! 2. Build per-node successor sets (element ports and wire nets) and
//!    topologically order them; a feedback loop that seeding did not
//!    break is fatal
//! 3. Walk the order twice: evaluate truth tables and flood nets, then
//!    fill leftover junctions and relay boundaries from their wire
//!    neighbors
//!
//! Wires that no defined signal reaches stay [`Signal::Unknown`], a
//! valid terminal state rendered as an indeterminate marker.

pub mod elements;
pub mod error;
pub mod netlist;
pub mod resolver;

// Re-export main types for convenience
pub use elements::Element;
pub use error::{LogicsnapError, Result};
pub use netlist::{Definition, Netlist, Node, NodeId, NodeKind, Signal, MAIN_DEFINITION};
pub use resolver::{resolve, Resolver, Snapshot};
