//! Latches: SR latch and D latch.

use crate::netlist::{NodeId, Signal};

/// An SR latch.
///
/// Only the S input is consulted: the output resolves high when S is
/// high and low otherwise, including when S is unknown. R is wired but
/// never read; see `test_sr_latch_reset_is_ignored`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SrLatch {
    /// Set input pin node
    pub set: NodeId,
    /// Reset input pin node (wired, not consulted)
    pub reset: NodeId,
    /// Q output pin node
    pub q: NodeId,
}

impl SrLatch {
    /// Create a new SR latch.
    pub fn new(set: NodeId, reset: NodeId, q: NodeId) -> Self {
        Self { set, reset, q }
    }

    pub(crate) fn evaluate(&self, states: &mut [Signal]) {
        states[self.q.index()] = Signal::from_bool(states[self.set.index()].is_high());
    }
}

/// A D latch.
///
/// The engine never evaluates a D latch: a one-shot snapshot has no
/// clock edge to sample on. Its Q output is instead seeded to the
/// configured level (low when unconfigured), which doubles as the
/// loop breaker for feedback paths through the latch.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DLatch {
    /// Data input pin node
    pub data: NodeId,
    /// Clock input pin node
    pub clock: NodeId,
    /// Q output pin node
    pub q: NodeId,
    /// Seed level for Q. `None` seeds low.
    pub manual_seed: Option<bool>,
}

impl DLatch {
    /// Create a new D latch with Q seeded low.
    pub fn new(data: NodeId, clock: NodeId, q: NodeId) -> Self {
        Self {
            data,
            clock,
            q,
            manual_seed: None,
        }
    }

    /// Create a D latch with Q seeded to the given level.
    pub fn with_seed(data: NodeId, clock: NodeId, q: NodeId, high: bool) -> Self {
        Self {
            data,
            clock,
            q,
            manual_seed: Some(high),
        }
    }

    pub(crate) fn seed(&self, states: &mut [Signal]) {
        states[self.q.index()] = Signal::from_bool(self.manual_seed.unwrap_or(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sr_latch_set_dominates() {
        let mut states = vec![Signal::High, Signal::Low, Signal::Unknown];
        SrLatch::new(NodeId(0), NodeId(1), NodeId(2)).evaluate(&mut states);
        assert_eq!(states[2], Signal::High);
    }

    #[test]
    fn test_sr_latch_reset_is_ignored() {
        // S and R both high resolves high: R is not consulted at all.
        // Changing this changes every rendered latch.
        let mut states = vec![Signal::High, Signal::High, Signal::Unknown];
        SrLatch::new(NodeId(0), NodeId(1), NodeId(2)).evaluate(&mut states);
        assert_eq!(states[2], Signal::High);

        let mut states = vec![Signal::Low, Signal::High, Signal::Unknown];
        SrLatch::new(NodeId(0), NodeId(1), NodeId(2)).evaluate(&mut states);
        assert_eq!(states[2], Signal::Low);
    }

    #[test]
    fn test_sr_latch_unknown_set_resolves_low() {
        let mut states = vec![Signal::Unknown, Signal::Unknown, Signal::Unknown];
        SrLatch::new(NodeId(0), NodeId(1), NodeId(2)).evaluate(&mut states);
        assert_eq!(states[2], Signal::Low);
    }

    #[test]
    fn test_d_latch_seeds_configured_level() {
        let mut states = vec![Signal::Unknown; 3];
        DLatch::new(NodeId(0), NodeId(1), NodeId(2)).seed(&mut states);
        assert_eq!(states[2], Signal::Low);

        let mut states = vec![Signal::Unknown; 3];
        DLatch::with_seed(NodeId(0), NodeId(1), NodeId(2), true).seed(&mut states);
        assert_eq!(states[2], Signal::High);
    }
}
