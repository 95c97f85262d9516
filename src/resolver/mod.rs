//! The steady-state resolution engine.
//!
//! Resolution computes one consistent snapshot of signal values across
//! a definition's wire graph:
//!
//! 1. Validate the definition, register each node's owning element,
//!    and seed every output whose level is fixed (rails, literals,
//!    latch seeds, manual loop breakers).
//! 2. Derive each node's successor set: the nodes its value determines,
//!    through element truth tables or along its electrical net.
//! 3. Topologically order the nodes over the successor relation;
//!    a surviving cycle is fatal.
//! 4. Propagate in two passes: evaluate and flood outputs in dependency
//!    order, then fill remaining junctions and relay boundaries from
//!    their wire neighbors.
//!
//! The run is a single-threaded, deterministic batch over in-memory
//! arrays; nodes no defined signal reaches simply stay unknown.

mod deps;
mod order;
mod propagate;
mod registry;

pub use propagate::{resolve, Resolver, Snapshot};
