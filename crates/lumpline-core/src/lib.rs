//! Lumped-element modeling of coupled lossy interconnects for Lumpline.
//!
//! This crate turns per-unit-length R/L/C/G parameters of a coupled
//! transmission-line bundle into a ladder of lumped sections, sized from
//! the line's modal delay, and renders the result as simulator cards.

pub mod error;
pub mod netlist;
pub mod node;
pub mod params;
pub mod sections;
pub mod topology;
pub mod units;

pub use error::{Error, Result};
pub use netlist::{Element, ElementCounts, Netlist};
pub use node::{NodeAllocator, NodeId};
pub use params::LineParameters;
pub use sections::{DiscretizationPlan, LineGeometry, SectionParameters};
pub use topology::{LadderTopology, SectionNodes};
pub use units::parse_value;
