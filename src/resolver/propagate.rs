//! Two-pass signal propagation.

use tracing::debug;

use crate::elements::Element;
use crate::error::Result;
use crate::netlist::{validate_definition, Definition, ElementId, NodeId, NodeKind, Signal};

use super::{deps, order, registry};

/// A resolved steady-state snapshot: one signal per node.
///
/// Nodes that no defined signal ever reached stay
/// [`Signal::Unknown`]; that is a valid terminal state, rendered as an
/// indeterminate marker downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    states: Vec<Signal>,
}

impl Snapshot {
    /// Signal at a node.
    pub fn state(&self, node: NodeId) -> Signal {
        self.states[node.index()]
    }

    /// All node signals, indexed by node.
    pub fn states(&self) -> &[Signal] {
        &self.states
    }

    /// Number of nodes left unresolved.
    pub fn unknown_count(&self) -> usize {
        self.states.iter().filter(|state| !state.is_known()).count()
    }
}

/// Resolve one definition to a steady-state snapshot.
pub fn resolve(definition: &Definition) -> Result<Snapshot> {
    Ok(Resolver::new(definition)?.resolve())
}

/// The resolution engine for a single definition.
///
/// Owns the working arrays of one run: signal states, owner
/// back-references, successor sets, and the evaluation order. Built by
/// [`Resolver::new`], consumed by [`Resolver::resolve`].
#[derive(Debug)]
pub struct Resolver<'a> {
    definition: &'a Definition,
    owner: Vec<Option<ElementId>>,
    states: Vec<Signal>,
    successors: Vec<Vec<NodeId>>,
    order: Vec<NodeId>,
}

impl<'a> Resolver<'a> {
    /// Validate the definition, register element owners, seed fixed
    /// outputs, and derive the evaluation order.
    ///
    /// Fails on unsupported port arities, out-of-range port
    /// references, or a feedback loop that seeding did not break.
    pub fn new(definition: &'a Definition) -> Result<Self> {
        validate_definition(definition)?;
        let registry = registry::build(definition);
        let successors = deps::successor_sets(definition, &registry);
        let order = order::topological_order(&successors)?;
        Ok(Self {
            definition,
            owner: registry.owner,
            states: registry.states,
            successors,
            order,
        })
    }

    /// Run both propagation passes and return the snapshot.
    pub fn resolve(mut self) -> Snapshot {
        self.evaluate_pass();
        self.fill_pass();

        let snapshot = Snapshot {
            states: self.states,
        };
        debug!(
            nodes = snapshot.states.len(),
            unresolved = snapshot.unknown_count(),
            definition = %self.definition.name,
            "resolved definition"
        );
        snapshot
    }

    /// First pass, causes before effects: evaluate every output pin
    /// that is still unknown, then flood each resolved output's state
    /// across its successor set (its electrical net).
    fn evaluate_pass(&mut self) {
        for position in 0..self.order.len() {
            let node = self.order[position];
            let index = node.index();
            if self.definition.nodes[index].kind != NodeKind::Source {
                continue;
            }
            if !self.states[index].is_known() {
                if let Some(owner) = self.owner[index] {
                    self.definition.elements[owner.index()].evaluate(&mut self.states);
                }
            }
            let state = self.states[index];
            if state.is_known() {
                for &successor in &self.successors[index] {
                    self.states[successor.index()] = state;
                }
            }
        }
    }

    /// Second pass, most-dependent nodes first: let every node still
    /// unknown adopt the first defined state among its direct wire
    /// neighbors (junctions the net flood missed), and give relay
    /// boundary outputs resolved this way a chance to recover their
    /// signal input through the backward contact rule.
    fn fill_pass(&mut self) {
        for position in (0..self.order.len()).rev() {
            let node = self.order[position];
            let index = node.index();
            if self.states[index].is_known() {
                continue;
            }
            for &neighbor in &self.definition.nodes[index].connections {
                let state = self.states[neighbor.index()];
                if state.is_known() {
                    self.states[index] = state;
                    break;
                }
            }
            if self.definition.nodes[index].kind == NodeKind::Source {
                if let Some(owner) = self.owner[index] {
                    if let Element::Subcircuit(sub) = &self.definition.elements[owner.index()] {
                        sub.back_propagate(&mut self.states);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{AndGate, Demultiplexer, Input, NotGate, Power, SrLatch, Subcircuit};
    use crate::error::LogicsnapError;
    use crate::netlist::Node;

    fn connect(nodes: &mut [Node], a: usize, b: usize) {
        nodes[a].connections.push(NodeId(b));
        nodes[b].connections.push(NodeId(a));
    }

    #[test]
    fn test_and_with_unconnected_input_resolves_low() {
        // Input(high) -> wire -> AND.a, AND.b left unconnected.
        let mut nodes = vec![
            Node::isolated(NodeKind::Source),   // 0: input literal
            Node::isolated(NodeKind::Sink),     // 1: AND input a
            Node::isolated(NodeKind::Sink),     // 2: AND input b
            Node::isolated(NodeKind::Source),   // 3: AND output
            Node::isolated(NodeKind::Junction), // 4: probe point on the output net
        ];
        connect(&mut nodes, 0, 1);
        connect(&mut nodes, 3, 4);
        let definition = Definition::new(
            "Main",
            nodes,
            vec![
                Element::Input(Input::new(NodeId(0), true)),
                Element::And(AndGate::new(vec![NodeId(1), NodeId(2)], NodeId(3))),
            ],
        );

        let snapshot = resolve(&definition).unwrap();
        assert_eq!(snapshot.state(NodeId(1)), Signal::High);
        // The unknown input reads as low, so the gate resolves low.
        assert_eq!(snapshot.state(NodeId(3)), Signal::Low);
        assert_eq!(snapshot.state(NodeId(4)), Signal::Low);
        assert_eq!(snapshot.state(NodeId(2)), Signal::Unknown);
    }

    #[test]
    fn test_seeded_not_gate_breaks_its_own_feedback_loop() {
        // A NOT gate feeding its own input through a junction. Without
        // the seed this is a true cycle.
        let mut nodes = vec![
            Node::isolated(NodeKind::Sink),     // 0: NOT input
            Node::isolated(NodeKind::Source),   // 1: NOT output
            Node::isolated(NodeKind::Junction), // 2: loop midpoint
        ];
        connect(&mut nodes, 1, 2);
        connect(&mut nodes, 2, 0);

        let unseeded = Definition::new(
            "Main",
            nodes.clone(),
            vec![Element::Not(NotGate::new(NodeId(0), NodeId(1)))],
        );
        assert!(matches!(
            resolve(&unseeded),
            Err(LogicsnapError::CyclicGraph { .. })
        ));

        let seeded = Definition::new(
            "Main",
            nodes,
            vec![Element::Not(NotGate::with_seed(NodeId(0), NodeId(1), true))],
        );
        let snapshot = resolve(&seeded).unwrap();
        // The seed survives: the evaluator never runs on an already
        // resolved output, so the loop does not invert it.
        assert_eq!(snapshot.state(NodeId(1)), Signal::High);
        assert_eq!(snapshot.state(NodeId(2)), Signal::High);
        assert_eq!(snapshot.state(NodeId(0)), Signal::High);
    }

    #[test]
    fn test_sr_latch_with_both_inputs_high() {
        let mut nodes = vec![
            Node::isolated(NodeKind::Source), // 0: power for S
            Node::isolated(NodeKind::Source), // 1: power for R
            Node::isolated(NodeKind::Sink),   // 2: S
            Node::isolated(NodeKind::Sink),   // 3: R
            Node::isolated(NodeKind::Source), // 4: Q
        ];
        connect(&mut nodes, 0, 2);
        connect(&mut nodes, 1, 3);
        let definition = Definition::new(
            "Main",
            nodes,
            vec![
                Element::Power(Power::new(NodeId(0))),
                Element::Power(Power::new(NodeId(1))),
                Element::SrLatch(SrLatch::new(NodeId(2), NodeId(3), NodeId(4))),
            ],
        );

        let snapshot = resolve(&definition).unwrap();
        // R is ignored: set wins even with reset asserted.
        assert_eq!(snapshot.state(NodeId(4)), Signal::High);
    }

    #[test]
    fn test_demultiplexer_with_unknown_control() {
        let mut nodes = vec![
            Node::isolated(NodeKind::Source), // 0: input literal
            Node::isolated(NodeKind::Sink),   // 1: demux data
            Node::isolated(NodeKind::Sink),   // 2: demux control, unconnected
            Node::isolated(NodeKind::Source), // 3: demux output 0
            Node::isolated(NodeKind::Source), // 4: demux output 1
        ];
        connect(&mut nodes, 0, 1);
        let definition = Definition::new(
            "Main",
            nodes,
            vec![
                Element::Input(Input::new(NodeId(0), true)),
                Element::Demultiplexer(Demultiplexer::new(
                    NodeId(1),
                    NodeId(2),
                    vec![NodeId(3), NodeId(4)],
                )),
            ],
        );

        let snapshot = resolve(&definition).unwrap();
        assert_eq!(snapshot.state(NodeId(3)), Signal::Unknown);
        assert_eq!(snapshot.state(NodeId(4)), Signal::Unknown);
        assert_eq!(snapshot.unknown_count(), 3);
    }

    #[test]
    fn test_relay_driven_from_the_output_side() {
        // The relay's output boundary node sits on a powered net; its
        // signal input is recovered through the backward contact rule.
        let mut nodes = vec![
            Node::isolated(NodeKind::Source), // 0: power rail
            Node::isolated(NodeKind::Source), // 1: relay output boundary
            Node::isolated(NodeKind::Sink),   // 2: relay signal input
            Node::isolated(NodeKind::Sink),   // 3: relay coil
            Node::isolated(NodeKind::Source), // 4: power for the coil
        ];
        connect(&mut nodes, 0, 1);
        connect(&mut nodes, 4, 3);
        let definition = Definition::new(
            "Main",
            nodes,
            vec![
                Element::Power(Power::new(NodeId(0))),
                Element::Power(Power::new(NodeId(4))),
                Element::Subcircuit(Subcircuit::new(
                    "RelayNormallyOpen",
                    vec![NodeId(2), NodeId(3)],
                    vec![NodeId(1)],
                )),
            ],
        );

        let snapshot = resolve(&definition).unwrap();
        assert_eq!(snapshot.state(NodeId(1)), Signal::High);
        assert_eq!(snapshot.state(NodeId(2)), Signal::High);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut nodes = vec![
            Node::isolated(NodeKind::Source),
            Node::isolated(NodeKind::Sink),
            Node::isolated(NodeKind::Sink),
            Node::isolated(NodeKind::Source),
        ];
        connect(&mut nodes, 0, 1);
        connect(&mut nodes, 0, 2);
        let definition = Definition::new(
            "Main",
            nodes,
            vec![
                Element::Input(Input::new(NodeId(0), true)),
                Element::And(AndGate::new(vec![NodeId(1), NodeId(2)], NodeId(3))),
            ],
        );

        let first = resolve(&definition).unwrap();
        let second = resolve(&definition).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.state(NodeId(3)), Signal::High);
    }
}
