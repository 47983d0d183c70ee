use super::Direction;
use crate::springs::PipelineConfiguration;
use crate::stratigraphy::{SoilLayer, SoilSource, SoilSpringParameters};
use crate::sweep::SoilScenario;

/// Holds samples of soil scenarios and pipelines (US customary units)
pub struct SampleParams {}

impl SampleParams {
    /// Returns a soil layer without validation (the values must be consistent)
    fn layer(name: &str, unit_weight: f64, c_total: f64, c_effective: f64, phi: f64, thickness: f64) -> SoilLayer {
        SoilLayer {
            name: name.to_string(),
            unit_weight,                     // pcf
            cohesion_total: c_total,         // psf
            cohesion_effective: c_effective, // psf
            friction_angle: phi,             // degrees
            thickness,                       // ft
        }
    }

    /// Returns the low-strength two-layer scenario
    pub fn soil_scenario_weak() -> SoilScenario {
        SoilScenario {
            name: "Weak Soil Scenario".to_string(),
            description: "Low strength soils requiring detailed analysis".to_string(),
            layers: vec![
                SampleParams::layer("Slope Material", 115.0, 100.0, 50.0, 15.0, 20.0),
                SampleParams::layer("Foundation Material", 120.0, 200.0, 100.0, 25.0, 30.0),
            ],
        }
    }

    /// Returns the moderate-strength two-layer scenario
    pub fn soil_scenario_medium() -> SoilScenario {
        SoilScenario {
            name: "Medium Soil Scenario".to_string(),
            description: "Moderate strength soils with typical properties".to_string(),
            layers: vec![
                SampleParams::layer("Slope Material", 120.0, 200.0, 100.0, 25.0, 20.0),
                SampleParams::layer("Foundation Material", 125.0, 400.0, 200.0, 35.0, 30.0),
            ],
        }
    }

    /// Returns the high-strength two-layer scenario
    pub fn soil_scenario_strong() -> SoilScenario {
        SoilScenario {
            name: "Strong Soil Scenario".to_string(),
            description: "High strength soils with good stability characteristics".to_string(),
            layers: vec![
                SampleParams::layer("Slope Material", 125.0, 400.0, 200.0, 35.0, 20.0),
                SampleParams::layer("Foundation Material", 130.0, 1000.0, 500.0, 40.0, 30.0),
            ],
        }
    }

    /// Returns the 16 in X-42 pipe used as the soil-springs regression baseline
    ///
    /// OD = 16 in, WT = 0.375 in, DOC = 10 ft, L = 10 ft, p = 1500 psi
    pub fn pipeline_reference(direction: Direction) -> PipelineConfiguration {
        PipelineConfiguration {
            config_id: "Reference".to_string(),
            pipe_od: 16.0,
            pipe_wt: 0.375,
            grade: "X-42".to_string(),
            depth_of_cover: 10.0,
            length_in_pgd: 10.0,
            coating: "FBE".to_string(),
            internal_pressure: 1500.0,
            direction,
        }
    }

    /// Returns the soil of the regression baseline (φ = 30°, c = 100 psf, γ = 125 pcf)
    pub fn soil_reference() -> SoilSpringParameters {
        SoilSpringParameters {
            friction_angle: 30.0,
            cohesion: 100.0,
            unit_weight: 125.0,
            source: SoilSource::Default,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
