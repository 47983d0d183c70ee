use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the properties of a soil layer
///
/// # Notes
///
/// * Layers are ordered top-to-bottom; the cumulative depth is the running sum of thicknesses
/// * The cohesion is given for total-stress and effective-stress analyses
/// * The friction angle is the effective-stress friction angle φ'
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SoilLayer {
    /// Label such as "Slope Material" or "Foundation Material"
    ///
    /// **(readonly)**
    pub name: String,

    /// Unit weight γ (pcf)
    ///
    /// **(readonly)**
    pub unit_weight: f64,

    /// Cohesion for total-stress analyses (psf)
    ///
    /// **(readonly)**
    pub cohesion_total: f64,

    /// Cohesion for effective-stress analyses (psf)
    ///
    /// **(readonly)**
    pub cohesion_effective: f64,

    /// Friction angle φ' in degrees; 0 ≤ φ' ≤ 90
    ///
    /// **(readonly)**
    pub friction_angle: f64,

    /// Thickness of the layer (ft); must be > 0
    ///
    /// **(readonly)**
    pub thickness: f64,
}

impl SoilLayer {
    /// Allocates a new instance
    pub fn new(
        name: &str,
        unit_weight: f64,
        cohesion_total: f64,
        cohesion_effective: f64,
        friction_angle: f64,
        thickness: f64,
    ) -> Result<Self, StrError> {
        let layer = SoilLayer {
            name: name.to_string(),
            unit_weight,
            cohesion_total,
            cohesion_effective,
            friction_angle,
            thickness,
        };
        if let Some(msg) = layer.validate() {
            log::error!("{}", msg);
            return Err("cannot allocate soil layer because layer.validate() failed");
        }
        Ok(layer)
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.friction_angle >= 0.0 && self.friction_angle <= 90.0) {
            return Some(format!(
                "friction_angle of layer '{}' = {:?} is incorrect; it must be 0 ≤ φ ≤ 90",
                self.name, self.friction_angle
            ));
        }
        if !(self.thickness > 0.0) || !self.thickness.is_finite() {
            return Some(format!(
                "thickness of layer '{}' = {:?} is incorrect; it must be > 0",
                self.name, self.thickness
            ));
        }
        if !(self.unit_weight > 0.0) || !self.unit_weight.is_finite() {
            return Some(format!(
                "unit_weight of layer '{}' = {:?} is incorrect; it must be > 0",
                self.name, self.unit_weight
            ));
        }
        if !(self.cohesion_total >= 0.0) || !(self.cohesion_effective >= 0.0) {
            return Some(format!(
                "cohesion of layer '{}' = ({:?}, {:?}) is incorrect; it must be ≥ 0",
                self.name, self.cohesion_total, self.cohesion_effective
            ));
        }
        None // all good
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
