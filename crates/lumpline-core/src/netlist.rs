//! Lumped netlist synthesis and card rendering.
//!
//! [`Netlist::synthesize`] walks a node plan and fills in element values
//! from the section parameters. Within a section the emission order is
//! shunt elements, series resistor, series inductor, then the coupling
//! sources toward every other conductor in ascending order. Conductor
//! chains render first, each followed by a blank line, then the
//! inter-conductor coupling capacitors.

use std::fmt;
use std::io;

use crate::node::NodeId;
use crate::sections::SectionParameters;
use crate::topology::LadderTopology;

/// One emitted circuit element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Series or shunt resistor.
    Resistor {
        node_pos: NodeId,
        node_neg: NodeId,
        resistance: f64,
    },
    /// Shunt or inter-conductor capacitor.
    Capacitor {
        node_pos: NodeId,
        node_neg: NodeId,
        capacitance: f64,
    },
    /// Series inductor.
    Inductor {
        node_pos: NodeId,
        node_neg: NodeId,
        inductance: f64,
    },
    /// Voltage-controlled voltage source coupling one conductor's series
    /// branch into another's. The control pair sits across the other
    /// conductor's inductor in the same section.
    Vcvs {
        out_pos: NodeId,
        out_neg: NodeId,
        ctrl_pos: NodeId,
        ctrl_neg: NodeId,
        gain: f64,
    },
}

/// Element totals across a whole netlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementCounts {
    pub resistors: usize,
    pub capacitors: usize,
    pub inductors: usize,
    pub coupling_sources: usize,
}

/// A synthesized lumped netlist, ready to render.
#[derive(Debug, Clone)]
pub struct Netlist {
    conductors: Vec<Vec<Element>>,
    couplings: Vec<Element>,
}

impl Netlist {
    /// Fill a node plan with element values.
    pub fn synthesize(section: &SectionParameters, topology: &LadderTopology) -> Self {
        let size = topology.num_conductors();
        let mut conductors = Vec::with_capacity(size);
        for conductor in 0..size {
            let mut elements = Vec::new();
            for index in 0..topology.num_sections() {
                let nodes = topology.section(conductor, index);
                if section.has_ground_conductance() {
                    elements.push(Element::Resistor {
                        node_pos: nodes.entry,
                        node_neg: NodeId::GROUND,
                        resistance: section.ground_resistance,
                    });
                }
                elements.push(Element::Capacitor {
                    node_pos: nodes.entry,
                    node_neg: NodeId::GROUND,
                    capacitance: section.capacitance[(conductor, conductor)],
                });
                elements.push(Element::Resistor {
                    node_pos: nodes.resistor.0,
                    node_neg: nodes.resistor.1,
                    resistance: section.resistance,
                });
                elements.push(Element::Inductor {
                    node_pos: nodes.inductor.0,
                    node_neg: nodes.inductor.1,
                    inductance: section.inductance[(conductor, conductor)],
                });
                for (slot, other) in (0..size).filter(|&c| c != conductor).enumerate() {
                    let (out_pos, out_neg) = nodes.coupling[slot];
                    let (ctrl_pos, ctrl_neg) = topology.section(other, index).inductor;
                    elements.push(Element::Vcvs {
                        out_pos,
                        out_neg,
                        ctrl_pos,
                        ctrl_neg,
                        gain: section.inductance[(conductor, other)]
                            / section.inductance[(other, other)],
                    });
                }
            }
            conductors.push(elements);
        }

        let mut couplings = Vec::new();
        for current in 0..size {
            for next in current + 1..size {
                couplings.push(Element::Capacitor {
                    node_pos: topology.start_node(current),
                    node_neg: topology.start_node(next),
                    capacitance: section.capacitance[(current, next)],
                });
            }
        }

        Self {
            conductors,
            couplings,
        }
    }

    /// All elements in emission order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.conductors.iter().flatten().chain(self.couplings.iter())
    }

    /// Tally elements by kind.
    pub fn counts(&self) -> ElementCounts {
        let mut counts = ElementCounts::default();
        for element in self.elements() {
            match element {
                Element::Resistor { .. } => counts.resistors += 1,
                Element::Capacitor { .. } => counts.capacitors += 1,
                Element::Inductor { .. } => counts.inductors += 1,
                Element::Vcvs { .. } => counts.coupling_sources += 1,
            }
        }
        counts
    }

    /// Write the rendered netlist to any writer.
    pub fn write_to(&self, writer: &mut impl io::Write) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl fmt::Display for Netlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sequence = SequenceNumbers::default();
        for elements in &self.conductors {
            for element in elements {
                sequence.write_card(f, element)?;
            }
            writeln!(f)?;
        }
        for element in &self.couplings {
            sequence.write_card(f, element)?;
        }
        Ok(())
    }
}

/// Per-kind card numbering, assigned in emission order.
#[derive(Default)]
struct SequenceNumbers {
    resistors: usize,
    capacitors: usize,
    inductors: usize,
    sources: usize,
}

impl SequenceNumbers {
    fn write_card(&mut self, f: &mut fmt::Formatter<'_>, element: &Element) -> fmt::Result {
        match *element {
            Element::Resistor {
                node_pos,
                node_neg,
                resistance,
            } => {
                self.resistors += 1;
                writeln!(
                    f,
                    "R{} {} {} {:e}",
                    self.resistors,
                    node_pos.as_u32(),
                    node_neg.as_u32(),
                    resistance
                )
            }
            Element::Capacitor {
                node_pos,
                node_neg,
                capacitance,
            } => {
                self.capacitors += 1;
                writeln!(
                    f,
                    "C{} {} {} {:e}",
                    self.capacitors,
                    node_pos.as_u32(),
                    node_neg.as_u32(),
                    capacitance
                )
            }
            Element::Inductor {
                node_pos,
                node_neg,
                inductance,
            } => {
                self.inductors += 1;
                writeln!(
                    f,
                    "L{} {} {} {:e}",
                    self.inductors,
                    node_pos.as_u32(),
                    node_neg.as_u32(),
                    inductance
                )
            }
            Element::Vcvs {
                out_pos,
                out_neg,
                ctrl_pos,
                ctrl_neg,
                gain,
            } => {
                self.sources += 1;
                writeln!(
                    f,
                    "E{} {} {} {} {} {:e}",
                    self.sources,
                    out_pos.as_u32(),
                    out_neg.as_u32(),
                    ctrl_pos.as_u32(),
                    ctrl_neg.as_u32(),
                    gain
                )
            }
        }
    }
}
