//! Signal routing elements: multiplexer, demultiplexer, tri-state buffer.

use crate::netlist::{NodeId, Signal};

/// A two-input multiplexer with a one-bit control line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Multiplexer {
    /// Data input pin nodes (exactly two supported)
    pub inputs: Vec<NodeId>,
    /// Control line pin node
    pub control: NodeId,
    /// Output pin node
    pub output: NodeId,
}

impl Multiplexer {
    /// Create a new multiplexer.
    pub fn new(inputs: Vec<NodeId>, control: NodeId, output: NodeId) -> Self {
        Self {
            inputs,
            control,
            output,
        }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        // Control low selects input 0, control high selects input 1.
        // An unknown control leaves the output unknown.
        let selected = match states[self.control.index()] {
            Signal::Low => self.inputs[0],
            Signal::High => self.inputs[1],
            Signal::Unknown => return,
        };
        let value = states[selected.index()];
        if value.is_known() {
            states[self.output.index()] = value;
        }
    }
}

/// A one-to-two demultiplexer with a one-bit control line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Demultiplexer {
    /// Data input pin node
    pub input: NodeId,
    /// Control line pin node
    pub control: NodeId,
    /// Output pin nodes (exactly two supported)
    pub outputs: Vec<NodeId>,
}

impl Demultiplexer {
    /// Create a new demultiplexer.
    pub fn new(input: NodeId, control: NodeId, outputs: Vec<NodeId>) -> Self {
        Self {
            input,
            control,
            outputs,
        }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        let value = states[self.input.index()];
        let control = states[self.control.index()];
        // Both outputs stay unknown until data and control are defined.
        if !value.is_known() || !control.is_known() {
            return;
        }
        let (routed, muted) = if control.is_high() {
            (self.outputs[1], self.outputs[0])
        } else {
            (self.outputs[0], self.outputs[1])
        };
        states[routed.index()] = value;
        states[muted.index()] = Signal::Low;
    }
}

/// A tri-state buffer.
///
/// The output follows the input while the enable line is high;
/// otherwise it stays unknown (high impedance).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriState {
    /// Data input pin node
    pub input: NodeId,
    /// Enable line pin node
    pub enable: NodeId,
    /// Output pin node
    pub output: NodeId,
}

impl TriState {
    /// Create a new tri-state buffer.
    pub fn new(input: NodeId, enable: NodeId, output: NodeId) -> Self {
        Self {
            input,
            enable,
            output,
        }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        if states[self.enable.index()].is_high() {
            let value = states[self.input.index()];
            if value.is_known() {
                states[self.output.index()] = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mux_states(input0: Signal, input1: Signal, control: Signal) -> Signal {
        let mut states = vec![input0, input1, control, Signal::Unknown];
        Multiplexer::new(vec![NodeId(0), NodeId(1)], NodeId(2), NodeId(3)).evaluate(&mut states);
        states[3]
    }

    #[test]
    fn test_mux_routes_by_control() {
        assert_eq!(mux_states(Signal::Low, Signal::High, Signal::Low), Signal::Low);
        assert_eq!(mux_states(Signal::Low, Signal::High, Signal::High), Signal::High);
    }

    #[test]
    fn test_mux_unknown_control_is_unknown() {
        assert_eq!(
            mux_states(Signal::High, Signal::High, Signal::Unknown),
            Signal::Unknown
        );
    }

    #[test]
    fn test_mux_selected_unknown_stays_unknown() {
        // Control low selects input 0 even when input 1 is defined.
        assert_eq!(
            mux_states(Signal::Unknown, Signal::High, Signal::Low),
            Signal::Unknown
        );
    }

    fn demux_states(input: Signal, control: Signal) -> (Signal, Signal) {
        let mut states = vec![input, control, Signal::Unknown, Signal::Unknown];
        Demultiplexer::new(NodeId(0), NodeId(1), vec![NodeId(2), NodeId(3)])
            .evaluate(&mut states);
        (states[2], states[3])
    }

    #[test]
    fn test_demux_routes_and_mutes() {
        assert_eq!(demux_states(Signal::High, Signal::Low), (Signal::High, Signal::Low));
        assert_eq!(demux_states(Signal::High, Signal::High), (Signal::Low, Signal::High));
    }

    #[test]
    fn test_demux_unknown_control_leaves_both_unknown() {
        assert_eq!(
            demux_states(Signal::High, Signal::Unknown),
            (Signal::Unknown, Signal::Unknown)
        );
        assert_eq!(
            demux_states(Signal::Low, Signal::Unknown),
            (Signal::Unknown, Signal::Unknown)
        );
    }

    #[test]
    fn test_demux_unknown_input_leaves_both_unknown() {
        assert_eq!(
            demux_states(Signal::Unknown, Signal::Low),
            (Signal::Unknown, Signal::Unknown)
        );
    }

    #[test]
    fn test_tristate_enable_gates_output() {
        let mut states = vec![Signal::High, Signal::High, Signal::Unknown];
        TriState::new(NodeId(0), NodeId(1), NodeId(2)).evaluate(&mut states);
        assert_eq!(states[2], Signal::High);

        let mut states = vec![Signal::High, Signal::Low, Signal::Unknown];
        TriState::new(NodeId(0), NodeId(1), NodeId(2)).evaluate(&mut states);
        assert_eq!(states[2], Signal::Unknown);

        let mut states = vec![Signal::High, Signal::Unknown, Signal::Unknown];
        TriState::new(NodeId(0), NodeId(1), NodeId(2)).evaluate(&mut states);
        assert_eq!(states[2], Signal::Unknown);
    }
}
