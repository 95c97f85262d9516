//! Combinational gates: AND, NAND, OR, NOR, XOR, NOT.
//!
//! All gates share the permissive tri-state policy: a gate resolves to
//! a defined level as soon as at least one input is defined, and any
//! still-unknown input reads as low in the truth table. A gate with
//! only unknown inputs leaves its output unknown.

use crate::netlist::{NodeId, Signal};

/// Whether any of the given input nodes carries a defined level.
fn any_known(inputs: &[NodeId], states: &[Signal]) -> bool {
    inputs.iter().any(|node| states[node.index()].is_known())
}

/// Whether any of the given input nodes is a defined high.
fn any_high(inputs: &[NodeId], states: &[Signal]) -> bool {
    inputs.iter().any(|node| states[node.index()].is_high())
}

/// A two-input AND gate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AndGate {
    /// Input pin nodes (exactly two supported)
    pub inputs: Vec<NodeId>,
    /// Output pin node
    pub output: NodeId,
}

impl AndGate {
    /// Create a new AND gate.
    pub fn new(inputs: Vec<NodeId>, output: NodeId) -> Self {
        Self { inputs, output }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        if any_known(&self.inputs, states) {
            let high = self.inputs.iter().all(|node| states[node.index()].is_high());
            states[self.output.index()] = Signal::from_bool(high);
        }
    }
}

/// A two-input NAND gate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NandGate {
    /// Input pin nodes (exactly two supported)
    pub inputs: Vec<NodeId>,
    /// Output pin node
    pub output: NodeId,
}

impl NandGate {
    /// Create a new NAND gate.
    pub fn new(inputs: Vec<NodeId>, output: NodeId) -> Self {
        Self { inputs, output }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        if any_known(&self.inputs, states) {
            let high = self.inputs.iter().all(|node| states[node.index()].is_high());
            states[self.output.index()] = Signal::from_bool(!high);
        }
    }
}

/// A two- or three-input OR gate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrGate {
    /// Input pin nodes (two or three supported)
    pub inputs: Vec<NodeId>,
    /// Output pin node
    pub output: NodeId,
}

impl OrGate {
    /// Create a new OR gate.
    pub fn new(inputs: Vec<NodeId>, output: NodeId) -> Self {
        Self { inputs, output }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        if any_known(&self.inputs, states) {
            states[self.output.index()] = Signal::from_bool(any_high(&self.inputs, states));
        }
    }
}

/// A two-input NOR gate.
///
/// A NOR gate can be flagged as a manual loop breaker: its output is
/// then seeded to the flagged level instead of being computed, which
/// turns an otherwise-cyclic feedback loop (e.g. a latch built from
/// cross-coupled NORs) into an acyclic dependency graph.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NorGate {
    /// Input pin nodes (exactly two supported)
    pub inputs: Vec<NodeId>,
    /// Output pin node
    pub output: NodeId,
    /// Loop-breaker level. `Some(level)` seeds the output instead of
    /// evaluating it.
    pub manual_seed: Option<bool>,
}

impl NorGate {
    /// Create a new NOR gate.
    pub fn new(inputs: Vec<NodeId>, output: NodeId) -> Self {
        Self {
            inputs,
            output,
            manual_seed: None,
        }
    }

    /// Create a NOR gate whose output is seeded to a fixed level.
    pub fn with_seed(inputs: Vec<NodeId>, output: NodeId, high: bool) -> Self {
        Self {
            inputs,
            output,
            manual_seed: Some(high),
        }
    }

    pub(crate) fn seed(&self, states: &mut [Signal]) {
        if let Some(high) = self.manual_seed {
            states[self.output.index()] = Signal::from_bool(high);
        }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        if any_known(&self.inputs, states) {
            states[self.output.index()] = Signal::from_bool(!any_high(&self.inputs, states));
        }
    }
}

/// A two-input XOR gate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XorGate {
    /// Input pin nodes (exactly two supported)
    pub inputs: Vec<NodeId>,
    /// Output pin node
    pub output: NodeId,
}

impl XorGate {
    /// Create a new XOR gate.
    pub fn new(inputs: Vec<NodeId>, output: NodeId) -> Self {
        Self { inputs, output }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        if any_known(&self.inputs, states) {
            let a = states[self.inputs[0].index()].is_high();
            let b = states[self.inputs[1].index()].is_high();
            states[self.output.index()] = Signal::from_bool(a != b);
        }
    }
}

/// An inverter.
///
/// Like [`NorGate`], a NOT gate can be flagged as a manual loop breaker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotGate {
    /// Input pin node
    pub input: NodeId,
    /// Output pin node
    pub output: NodeId,
    /// Loop-breaker level. `Some(level)` seeds the output instead of
    /// evaluating it.
    pub manual_seed: Option<bool>,
}

impl NotGate {
    /// Create a new NOT gate.
    pub fn new(input: NodeId, output: NodeId) -> Self {
        Self {
            input,
            output,
            manual_seed: None,
        }
    }

    /// Create a NOT gate whose output is seeded to a fixed level.
    pub fn with_seed(input: NodeId, output: NodeId, high: bool) -> Self {
        Self {
            input,
            output,
            manual_seed: Some(high),
        }
    }

    pub(crate) fn seed(&self, states: &mut [Signal]) {
        if let Some(high) = self.manual_seed {
            states[self.output.index()] = Signal::from_bool(high);
        }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        let inverted = states[self.input.index()].invert();
        if inverted.is_known() {
            states[self.output.index()] = inverted;
        }
    }
}
