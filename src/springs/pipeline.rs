use crate::base::{Direction, INCHES_PER_FOOT};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Holds the pipe and installation data of a pipeline configuration
///
/// Diameter and wall thickness are given in inches; depth of cover and length in feet.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PipelineConfiguration {
    /// Identifier such as "Config_0012"
    pub config_id: String,

    /// Outside diameter (in)
    pub pipe_od: f64,

    /// Wall thickness (in); must be < pipe_od / 2
    pub pipe_wt: f64,

    /// Grade name such as "X-52"; resolved by a [crate::base::GradeTable]
    pub grade: String,

    /// Depth of cover (ft)
    pub depth_of_cover: f64,

    /// Length of pipe within the displacement zone (ft); must be > 0
    pub length_in_pgd: f64,

    /// Coating name; resolved by a [crate::base::CoatingTable]
    pub coating: String,

    /// Internal pressure (psi); must be ≥ 0
    pub internal_pressure: f64,

    /// Direction of the ground displacement relative to the pipe axis
    pub direction: Direction,
}

impl PipelineConfiguration {
    /// Returns the outer radius (in)
    pub fn outer_radius(&self) -> f64 {
        self.pipe_od / 2.0
    }

    /// Returns the inner radius (in)
    pub fn inner_radius(&self) -> f64 {
        self.outer_radius() - self.pipe_wt
    }

    /// Returns the steel cross-section area (in²)
    pub fn wall_area(&self) -> f64 {
        let (ro, ri) = (self.outer_radius(), self.inner_radius());
        PI * (ro * ro - ri * ri)
    }

    /// Returns the outside diameter in feet
    pub fn od_ft(&self) -> f64 {
        self.pipe_od / INCHES_PER_FOOT
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        let values = [
            ("pipe_od", self.pipe_od),
            ("pipe_wt", self.pipe_wt),
            ("depth_of_cover", self.depth_of_cover),
            ("length_in_pgd", self.length_in_pgd),
            ("internal_pressure", self.internal_pressure),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Some(format!("{}: {} = {:?} must be finite", self.config_id, name, value));
            }
        }
        if self.pipe_od <= 0.0 {
            return Some(format!("{}: pipe_od = {:?} must be > 0", self.config_id, self.pipe_od));
        }
        if self.pipe_wt <= 0.0 {
            return Some(format!("{}: pipe_wt = {:?} must be > 0", self.config_id, self.pipe_wt));
        }
        if self.pipe_wt >= self.outer_radius() {
            return Some(format!(
                "{}: pipe_wt = {:?} must be smaller than the outer radius {:?}",
                self.config_id,
                self.pipe_wt,
                self.outer_radius()
            ));
        }
        if self.depth_of_cover < 0.0 {
            return Some(format!(
                "{}: depth_of_cover = {:?} must be ≥ 0",
                self.config_id, self.depth_of_cover
            ));
        }
        if self.length_in_pgd <= 0.0 {
            return Some(format!(
                "{}: length_in_pgd = {:?} must be > 0",
                self.config_id, self.length_in_pgd
            ));
        }
        if self.internal_pressure < 0.0 {
            return Some(format!(
                "{}: internal_pressure = {:?} must be ≥ 0",
                self.config_id, self.internal_pressure
            ));
        }
        None // all good
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
