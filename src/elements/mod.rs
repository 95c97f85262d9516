//! Element models for schematic resolution.
//!
//! This module provides models for all supported schematic elements:
//! - Gates: AND, NAND, OR, NOR, XOR, NOT
//! - Routing: multiplexer, demultiplexer, tri-state buffer
//! - Latches: SR latch, D latch
//! - Fixed drivers and probes: clock, ground, power, input, probe
//! - Sub-circuit instances, including relay contacts
//!
//! Each element knows its port nodes, how to seed outputs whose level
//! is fixed, and how to resolve its outputs from already-resolved
//! inputs.

mod gates;
mod latches;
mod routing;
mod sources;
mod subcircuit;

pub use gates::{AndGate, NandGate, NorGate, NotGate, OrGate, XorGate};
pub use latches::{DLatch, SrLatch};
pub use routing::{Demultiplexer, Multiplexer, TriState};
pub use sources::{Clock, Ground, Input, Power, Probe};
pub use subcircuit::{RelayKind, Subcircuit};

use crate::error::{LogicsnapError, Result};
use crate::netlist::{NodeId, Signal};

/// A schematic element instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    And(AndGate),
    Nand(NandGate),
    Or(OrGate),
    Nor(NorGate),
    Xor(XorGate),
    Not(NotGate),
    Multiplexer(Multiplexer),
    Demultiplexer(Demultiplexer),
    TriState(TriState),
    SrLatch(SrLatch),
    DLatch(DLatch),
    Clock(Clock),
    Ground(Ground),
    Power(Power),
    Input(Input),
    Probe(Probe),
    Subcircuit(Subcircuit),
}

impl Element {
    /// Short human-readable kind name, used in error messages and for
    /// the renderer's glyph choice.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::And(_) => "AND gate",
            Element::Nand(_) => "NAND gate",
            Element::Or(_) => "OR gate",
            Element::Nor(_) => "NOR gate",
            Element::Xor(_) => "XOR gate",
            Element::Not(_) => "NOT gate",
            Element::Multiplexer(_) => "multiplexer",
            Element::Demultiplexer(_) => "demultiplexer",
            Element::TriState(_) => "tri-state buffer",
            Element::SrLatch(_) => "SR latch",
            Element::DLatch(_) => "D latch",
            Element::Clock(_) => "clock",
            Element::Ground(_) => "ground",
            Element::Power(_) => "power",
            Element::Input(_) => "input",
            Element::Probe(_) => "probe",
            Element::Subcircuit(_) => "sub-circuit",
        }
    }

    /// Nodes this element reads: its input pins, including control,
    /// enable, and latch inputs.
    pub fn sink_nodes(&self) -> Vec<NodeId> {
        match self {
            Element::And(gate) => gate.inputs.clone(),
            Element::Nand(gate) => gate.inputs.clone(),
            Element::Or(gate) => gate.inputs.clone(),
            Element::Nor(gate) => gate.inputs.clone(),
            Element::Xor(gate) => gate.inputs.clone(),
            Element::Not(gate) => vec![gate.input],
            Element::Multiplexer(mux) => {
                let mut nodes = mux.inputs.clone();
                nodes.push(mux.control);
                nodes
            }
            Element::Demultiplexer(demux) => vec![demux.input, demux.control],
            Element::TriState(buffer) => vec![buffer.input, buffer.enable],
            Element::SrLatch(latch) => vec![latch.set, latch.reset],
            Element::DLatch(latch) => vec![latch.data, latch.clock],
            Element::Clock(_) | Element::Ground(_) | Element::Power(_) | Element::Input(_) => {
                Vec::new()
            }
            Element::Probe(probe) => vec![probe.input],
            Element::Subcircuit(sub) => sub.inputs.clone(),
        }
    }

    /// Nodes this element drives: its output pins.
    pub fn source_nodes(&self) -> Vec<NodeId> {
        match self {
            Element::And(gate) => vec![gate.output],
            Element::Nand(gate) => vec![gate.output],
            Element::Or(gate) => vec![gate.output],
            Element::Nor(gate) => vec![gate.output],
            Element::Xor(gate) => vec![gate.output],
            Element::Not(gate) => vec![gate.output],
            Element::Multiplexer(mux) => vec![mux.output],
            Element::Demultiplexer(demux) => demux.outputs.clone(),
            Element::TriState(buffer) => vec![buffer.output],
            Element::SrLatch(latch) => vec![latch.q],
            Element::DLatch(latch) => vec![latch.q],
            Element::Clock(clock) => vec![clock.output],
            Element::Ground(ground) => vec![ground.output],
            Element::Power(power) => vec![power.output],
            Element::Input(input) => vec![input.output],
            Element::Probe(_) => Vec::new(),
            Element::Subcircuit(sub) => sub.outputs.clone(),
        }
    }

    /// Check multi-node port cardinalities against the supported truth
    /// tables.
    pub(crate) fn validate_arity(&self) -> Result<()> {
        match self {
            Element::And(gate) if gate.inputs.len() != 2 => Err(
                LogicsnapError::unsupported_arity(self.kind_name(), "input", gate.inputs.len()),
            ),
            Element::Nand(gate) if gate.inputs.len() != 2 => Err(
                LogicsnapError::unsupported_arity(self.kind_name(), "input", gate.inputs.len()),
            ),
            Element::Nor(gate) if gate.inputs.len() != 2 => Err(
                LogicsnapError::unsupported_arity(self.kind_name(), "input", gate.inputs.len()),
            ),
            Element::Xor(gate) if gate.inputs.len() != 2 => Err(
                LogicsnapError::unsupported_arity(self.kind_name(), "input", gate.inputs.len()),
            ),
            Element::Or(gate) if !(2..=3).contains(&gate.inputs.len()) => Err(
                LogicsnapError::unsupported_arity(self.kind_name(), "input", gate.inputs.len()),
            ),
            Element::Multiplexer(mux) if mux.inputs.len() != 2 => Err(
                LogicsnapError::unsupported_arity(self.kind_name(), "input", mux.inputs.len()),
            ),
            Element::Demultiplexer(demux) if demux.outputs.len() != 2 => Err(
                LogicsnapError::unsupported_arity(self.kind_name(), "output", demux.outputs.len()),
            ),
            Element::Subcircuit(sub) if sub.relay_kind().is_some() && sub.inputs.len() < 2 => {
                Err(LogicsnapError::unsupported_arity(
                    self.kind_name(),
                    "boundary input",
                    sub.inputs.len(),
                ))
            }
            Element::Subcircuit(sub) if sub.relay_kind().is_some() && sub.outputs.is_empty() => {
                Err(LogicsnapError::unsupported_arity(
                    self.kind_name(),
                    "boundary output",
                    0,
                ))
            }
            _ => Ok(()),
        }
    }

    /// Seed output pins whose level is fixed independent of other
    /// nodes. Runs once before graph resolution.
    pub(crate) fn seed(&self, states: &mut [Signal]) {
        match self {
            Element::Nor(gate) => gate.seed(states),
            Element::Not(gate) => gate.seed(states),
            Element::DLatch(latch) => latch.seed(states),
            Element::Clock(clock) => clock.seed(states),
            Element::Ground(ground) => ground.seed(states),
            Element::Power(power) => power.seed(states),
            Element::Input(input) => input.seed(states),
            Element::Subcircuit(sub) => sub.seed(states),
            Element::And(_)
            | Element::Nand(_)
            | Element::Or(_)
            | Element::Xor(_)
            | Element::Multiplexer(_)
            | Element::Demultiplexer(_)
            | Element::TriState(_)
            | Element::SrLatch(_)
            | Element::Probe(_) => {}
        }
    }

    /// Resolve output pins from the current input pin states. Inputs
    /// that are still unknown read as low once any input is defined.
    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        match self {
            Element::And(gate) => gate.evaluate(states),
            Element::Nand(gate) => gate.evaluate(states),
            Element::Or(gate) => gate.evaluate(states),
            Element::Nor(gate) => gate.evaluate(states),
            Element::Xor(gate) => gate.evaluate(states),
            Element::Not(gate) => gate.evaluate(states),
            Element::Multiplexer(mux) => mux.evaluate(states),
            Element::Demultiplexer(demux) => demux.evaluate(states),
            Element::TriState(buffer) => buffer.evaluate(states),
            Element::SrLatch(latch) => latch.evaluate(states),
            Element::Subcircuit(sub) => sub.evaluate(states),
            Element::Clock(_)
            | Element::Ground(_)
            | Element::Power(_)
            | Element::Input(_)
            | Element::Probe(_)
            | Element::DLatch(_) => {}
        }
    }
}
