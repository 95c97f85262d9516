//! Fixed drivers and probes: clock, ground, power, input, probe.
//!
//! These elements never compute anything. The drivers seed their output
//! to a fixed level before resolution starts; probes just expose the
//! state of the net they are wired to.

use crate::netlist::{NodeId, Signal};

/// A clock generator, frozen at the low phase for a static snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clock {
    /// Output pin node
    pub output: NodeId,
}

impl Clock {
    /// Create a new clock.
    pub fn new(output: NodeId) -> Self {
        Self { output }
    }

    pub(crate) fn seed(&self, states: &mut [Signal]) {
        states[self.output.index()] = Signal::Low;
    }
}

/// A ground rail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ground {
    /// Output pin node
    pub output: NodeId,
}

impl Ground {
    /// Create a new ground rail.
    pub fn new(output: NodeId) -> Self {
        Self { output }
    }

    pub(crate) fn seed(&self, states: &mut [Signal]) {
        states[self.output.index()] = Signal::Low;
    }
}

/// A power rail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Power {
    /// Output pin node
    pub output: NodeId,
}

impl Power {
    /// Create a new power rail.
    pub fn new(output: NodeId) -> Self {
        Self { output }
    }

    pub(crate) fn seed(&self, states: &mut [Signal]) {
        states[self.output.index()] = Signal::High;
    }
}

/// A literal input (button or input pin) with a configured level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Input {
    /// Output pin node
    pub output: NodeId,
    /// Configured literal level
    pub value: bool,
}

impl Input {
    /// Create a new input with the given literal level.
    pub fn new(output: NodeId, value: bool) -> Self {
        Self { output, value }
    }

    pub(crate) fn seed(&self, states: &mut [Signal]) {
        states[self.output.index()] = Signal::from_bool(self.value);
    }
}

/// A probe (output pin or LED): a pure sink the renderer reads back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Probe {
    /// Input pin node
    pub input: NodeId,
}

impl Probe {
    /// Create a new probe.
    pub fn new(input: NodeId) -> Self {
        Self { input }
    }
}
