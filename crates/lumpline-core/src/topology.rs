//! Node numbering for the lumped ladder.
//!
//! Every conductor becomes a chain of identical sections. A section enters
//! at one node, runs its series resistor and inductor across the next two,
//! then reserves one node pair per neighboring conductor for the coupling
//! sources. The last reserved pair hands its far node to the next section,
//! so each conductor chain is numbered contiguously; chains follow one
//! another with consecutive numbering as well.
//!
//! Shunt elements hang off the section entry node, so the node a conductor
//! chain begins at is also where the inter-conductor coupling capacitors
//! attach.

use crate::node::{NodeAllocator, NodeId};

/// Node assignments for one lumped section of one conductor.
#[derive(Debug, Clone)]
pub struct SectionNodes {
    /// Node the section enters at; shunt elements connect it to ground.
    pub entry: NodeId,
    /// Terminals of the series resistor.
    pub resistor: (NodeId, NodeId),
    /// Terminals of the series inductor.
    pub inductor: (NodeId, NodeId),
    /// Output node pairs reserved for coupling sources, one per other
    /// conductor in ascending conductor order.
    pub coupling: Vec<(NodeId, NodeId)>,
}

impl SectionNodes {
    fn allocate(allocator: &mut NodeAllocator, num_conductors: usize) -> Self {
        let entry = allocator.current();
        let resistor = (entry, allocator.step());
        let inductor = (resistor.1, allocator.step());
        let coupling = (1..num_conductors)
            .map(|_| {
                let from = allocator.current();
                (from, allocator.step())
            })
            .collect();
        Self {
            entry,
            resistor,
            inductor,
            coupling,
        }
    }

    /// Node the section ends at; the next section enters here.
    pub fn exit(&self) -> NodeId {
        self.coupling.last().map(|pair| pair.1).unwrap_or(self.inductor.1)
    }
}

/// Complete node plan for a bundle of conductor chains.
#[derive(Debug, Clone)]
pub struct LadderTopology {
    sections: Vec<Vec<SectionNodes>>,
    start_nodes: Vec<NodeId>,
}

impl LadderTopology {
    /// Number the whole ladder, starting both counting and the first
    /// conductor chain at `start`.
    pub fn build(num_conductors: usize, num_sections: usize, start: NodeId) -> Self {
        let mut allocator = NodeAllocator::new(start);
        let mut sections = Vec::with_capacity(num_conductors);
        let mut start_nodes = Vec::with_capacity(num_conductors);
        for conductor in 0..num_conductors {
            if conductor > 0 {
                allocator.step();
            }
            start_nodes.push(allocator.current());
            let chain = (0..num_sections)
                .map(|_| SectionNodes::allocate(&mut allocator, num_conductors))
                .collect();
            sections.push(chain);
        }
        Self {
            sections,
            start_nodes,
        }
    }

    pub fn num_conductors(&self) -> usize {
        self.sections.len()
    }

    pub fn num_sections(&self) -> usize {
        self.sections.first().map(Vec::len).unwrap_or(0)
    }

    /// Node assignments for one section of one conductor.
    ///
    /// Panics when either index is out of range.
    pub fn section(&self, conductor: usize, section: usize) -> &SectionNodes {
        &self.sections[conductor][section]
    }

    /// Node a conductor chain begins at.
    ///
    /// Panics when the conductor index is out of range.
    pub fn start_node(&self, conductor: usize) -> NodeId {
        self.start_nodes[conductor]
    }
}
