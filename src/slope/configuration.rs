use super::{SlopeGeometry, FOUNDATION_MATERIAL, SLOPE_MATERIAL};
use crate::stratigraphy::{layer_at_depth, SoilLayer, SoilSpringParameters};
use crate::sweep::SoilScenario;
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds a complete slope configuration for the stability screening
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SlopeConfiguration {
    /// Identifier such as "Config_0007"
    ///
    /// **(readonly)**
    pub config_id: String,

    /// Name of the soil scenario
    ///
    /// **(readonly)**
    pub scenario: String,

    /// Slope angle (degrees) of the sweep axis
    ///
    /// **(readonly)**
    pub slope_angle: f64,

    /// Slope height (ft) of the sweep axis
    ///
    /// **(readonly)**
    pub slope_height: f64,

    /// Groundwater depth as a fraction of the slope height
    ///
    /// **(readonly)**
    pub groundwater_ratio: f64,

    /// Groundwater depth below the surface (ft) = slope_height × groundwater_ratio
    ///
    /// **(readonly)**
    pub groundwater_depth: f64,

    /// Multi-point geometry
    ///
    /// **(readonly)**
    pub geometry: SlopeGeometry,

    /// The two layers: "Slope Material" then "Foundation Material"
    ///
    /// **(readonly)**
    pub soil_layers: Vec<SoilLayer>,
}

impl SlopeConfiguration {
    /// Allocates a new instance
    ///
    /// # Errors
    ///
    /// Returns an error if the soil scenario does not have exactly two valid layers,
    /// if the geometry is invalid, or if the groundwater ratio is negative.
    pub fn new(
        config_id: &str,
        slope_angle: f64,
        slope_height: f64,
        groundwater_ratio: f64,
        scenario: &SoilScenario,
    ) -> Result<Self, StrError> {
        if let Some(msg) = scenario.validate() {
            log::error!("{}: {}", config_id, msg);
            return Err("cannot allocate slope configuration because scenario.validate() failed");
        }
        let geometry = SlopeGeometry::new(slope_angle, slope_height).map_err(|e| {
            log::error!("{}: {}", config_id, e);
            e
        })?;
        if !(groundwater_ratio >= 0.0) || !groundwater_ratio.is_finite() {
            log::error!("{}: groundwater_ratio = {:?} must be ≥ 0", config_id, groundwater_ratio);
            return Err("groundwater_ratio must be ≥ 0");
        }
        let expected = [SLOPE_MATERIAL, FOUNDATION_MATERIAL];
        for (layer, name) in scenario.layers.iter().zip(expected) {
            if layer.name != name {
                log::warn!(
                    "{}: layer '{}' of scenario '{}' is used as the {}",
                    config_id,
                    layer.name,
                    scenario.name,
                    name
                );
            }
        }
        Ok(SlopeConfiguration {
            config_id: config_id.to_string(),
            scenario: scenario.name.clone(),
            slope_angle,
            slope_height,
            groundwater_ratio,
            groundwater_depth: slope_height * groundwater_ratio,
            geometry,
            soil_layers: scenario.layers.clone(),
        })
    }

    /// Returns the horizontal run (ft) of the slope face
    pub fn horizontal_run(&self) -> f64 {
        self.slope_height / f64::tan(self.slope_angle.to_radians())
    }

    /// Returns the soil-spring parameters at a depth below the ground surface
    ///
    /// See [layer_at_depth] for the lookup rules.
    pub fn soil_at_depth(&self, depth: Option<f64>) -> SoilSpringParameters {
        layer_at_depth(&self.soil_layers, depth)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
