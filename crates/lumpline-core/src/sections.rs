//! Discretization of a distributed line into lumped sections.
//!
//! A distributed RLCG line is only well approximated by a ladder of lumped
//! sections when each section is short compared to the signal edge. The
//! estimator here sizes the ladder from the worst-case modal delay of the
//! coupled system, then the per-section element values follow by scaling
//! the per-meter parameters with the section length.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::params::LineParameters;

/// Sections allotted per rise time of total line delay.
const SECTIONS_PER_RISE_TIME: f64 = 20.0;

/// Physical extent and excitation of a line run.
#[derive(Debug, Clone, Copy)]
pub struct LineGeometry {
    /// Line length in meters.
    pub length: f64,
    /// Fastest signal rise time the model must stay accurate for (seconds).
    pub rise_time: f64,
}

impl LineGeometry {
    /// Validate and construct a geometry.
    pub fn new(length: f64, rise_time: f64) -> Result<Self> {
        if !length.is_finite() || !(length > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "length must be positive and finite, got {length}"
            )));
        }
        if !rise_time.is_finite() || !(rise_time > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "rise time must be positive and finite, got {rise_time}"
            )));
        }
        Ok(Self { length, rise_time })
    }
}

/// Number of lumped sections each conductor is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscretizationPlan {
    /// Section count; always at least 1.
    pub num_sections: usize,
}

impl DiscretizationPlan {
    /// Estimate how many lumped sections are needed for the ladder to hold
    /// up to the given rise time.
    ///
    /// The worst-case modal delay per meter is `sqrt(rho(L) * rho(C))`
    /// where `rho` is the spectral radius of the per-meter matrix. The
    /// estimate places [`SECTIONS_PER_RISE_TIME`] sections per rise time
    /// of total line delay and rounds to the nearest whole section.
    pub fn estimate(params: &LineParameters, geometry: &LineGeometry) -> Result<Self> {
        let l_radius = spectral_radius(&params.inductance);
        let c_radius = spectral_radius(&params.capacitance);
        let delay_per_meter = (l_radius * c_radius).sqrt();
        let sections =
            (SECTIONS_PER_RISE_TIME * delay_per_meter * geometry.length / geometry.rise_time)
                .round();
        if !sections.is_finite() || !(sections >= 1.0) {
            return Err(Error::Discretization(format!(
                "section estimate came to {sections}; the line is electrically too short \
                 for a lumped model at this rise time"
            )));
        }
        Ok(Self {
            num_sections: sections as usize,
        })
    }
}

/// Element values for one lumped section of every conductor.
#[derive(Debug, Clone)]
pub struct SectionParameters {
    /// Series resistance per section (ohms).
    pub resistance: f64,
    /// Shunt resistance to ground per section (ohms); infinite when the
    /// line has no conductance to ground.
    pub ground_resistance: f64,
    /// Section inductance matrix (henries).
    pub inductance: DMatrix<f64>,
    /// Section capacitance matrix (farads).
    pub capacitance: DMatrix<f64>,
}

impl SectionParameters {
    /// Scale per-meter parameters down to one section's worth.
    pub fn derive(
        params: &LineParameters,
        geometry: &LineGeometry,
        plan: DiscretizationPlan,
    ) -> Self {
        let per_section = geometry.length / plan.num_sections as f64;
        Self {
            resistance: params.resistance * per_section,
            ground_resistance: 1.0 / (params.conductance * per_section),
            inductance: &params.inductance * per_section,
            capacitance: &params.capacitance * per_section,
        }
    }

    /// Whether the shunt path to ground carries a real resistor.
    pub fn has_ground_conductance(&self) -> bool {
        self.ground_resistance.is_finite()
    }
}

/// Largest eigenvalue magnitude of a square matrix.
///
/// Coupling matrices are symmetric in practice but nothing here requires
/// it, so the general complex spectrum is used and reduced by magnitude.
fn spectral_radius(matrix: &DMatrix<f64>) -> f64 {
    let eigenvalues: DVector<Complex64> = matrix.complex_eigenvalues();
    eigenvalues.iter().map(|ev| ev.norm()).fold(0.0, f64::max)
}
