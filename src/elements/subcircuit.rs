//! Sub-circuit instances and relay contact semantics.
//!
//! An instance of a named definition exposes that definition's boundary
//! nodes in the parent graph. Ordinary instances are one-way black
//! boxes whose outputs are seeded low. Instances whose referenced name
//! marks them as a relay get two-way contact semantics instead: the
//! signal side and the resolved side can drive each other, gated by the
//! coil state and the contact polarity.

use crate::netlist::{NodeId, Signal};

/// Contact polarity of a relay-style sub-circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelayKind {
    /// The contact conducts while the coil is energized.
    NormallyOpen,
    /// The contact conducts while the coil is not energized.
    NormallyClosed,
}

/// An instance of a named sub-circuit definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subcircuit {
    /// Name of the referenced definition
    pub def_name: String,
    /// Boundary input pin nodes in the parent graph.
    /// For relays: [signal, coil].
    pub inputs: Vec<NodeId>,
    /// Boundary output pin nodes in the parent graph
    pub outputs: Vec<NodeId>,
}

impl Subcircuit {
    /// Create a new sub-circuit instance.
    pub fn new(def_name: impl Into<String>, inputs: Vec<NodeId>, outputs: Vec<NodeId>) -> Self {
        Self {
            def_name: def_name.into(),
            inputs,
            outputs,
        }
    }

    /// Relay polarity derived from the referenced definition name.
    ///
    /// A name containing `NormallyClosed` makes a normally-closed
    /// relay; any other name containing `Normally` makes a
    /// normally-open one. Everything else is an ordinary instance.
    pub fn relay_kind(&self) -> Option<RelayKind> {
        if self.def_name.contains("NormallyClosed") {
            Some(RelayKind::NormallyClosed)
        } else if self.def_name.contains("Normally") {
            Some(RelayKind::NormallyOpen)
        } else {
            None
        }
    }

    pub(crate) fn seed(&self, states: &mut [Signal]) {
        // Ordinary instances present their outputs as quiet low rails.
        // Relay outputs stay unknown until a contact rule resolves them.
        if self.relay_kind().is_none() {
            for output in &self.outputs {
                states[output.index()] = Signal::Low;
            }
        }
    }

    /// Forward contact rule: the signal side drives the output side.
    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        let Some(kind) = self.relay_kind() else {
            return;
        };
        let signal = states[self.inputs[0].index()];
        let coil = states[self.inputs[1].index()];
        if signal.is_known() && contact_closed(kind, coil) {
            states[self.outputs[0].index()] = signal;
        }
    }

    /// Backward contact rule: a resolved output side recovers the
    /// signal input, for relays driven from the output side.
    pub(crate) fn back_propagate(&self, states: &mut [Signal]) {
        let Some(kind) = self.relay_kind() else {
            return;
        };
        let resolved = states[self.outputs[0].index()];
        let coil = states[self.inputs[1].index()];
        if resolved.is_known() && contact_closed(kind, coil) {
            states[self.inputs[0].index()] = resolved;
        }
    }
}

/// Whether the contact conducts for the given coil state.
/// An unknown coil counts as de-energized.
fn contact_closed(kind: RelayKind, coil: Signal) -> bool {
    match kind {
        RelayKind::NormallyOpen => coil.is_high(),
        RelayKind::NormallyClosed => !coil.is_high(),
    }
}
