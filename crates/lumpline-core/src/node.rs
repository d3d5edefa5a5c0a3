//! Node identifiers for the generated netlist.

use std::fmt;

/// Unique identifier for a node in the generated netlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The ground node (node 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Create a new NodeId from a raw value.
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the raw node ID value.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Check if this is the ground node.
    pub fn is_ground(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Hands out monotonically increasing node identifiers.
///
/// The allocator sits on one node at a time; series elements claim the pair
/// (current, step) so consecutive slots chain through shared endpoints.
#[derive(Debug, Clone)]
pub struct NodeAllocator {
    next: u32,
}

impl NodeAllocator {
    /// Start allocating at `start`.
    pub fn new(start: NodeId) -> Self {
        Self {
            next: start.as_u32(),
        }
    }

    /// The node the allocator currently sits on.
    pub fn current(&self) -> NodeId {
        NodeId(self.next)
    }

    /// Advance to the next node and return it.
    pub fn step(&mut self) -> NodeId {
        self.next += 1;
        NodeId(self.next)
    }
}
