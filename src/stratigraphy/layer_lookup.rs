use super::SoilLayer;
use serde::{Deserialize, Serialize};

/// Defines the friction angle (degrees) used when no soil layer is available
pub const DEFAULT_SOIL_FRICTION_ANGLE: f64 = 30.0;

/// Defines the cohesion (psf) used when no soil layer is available
pub const DEFAULT_SOIL_COHESION: f64 = 100.0;

/// Defines the unit weight (pcf) used when no soil layer is available
pub const DEFAULT_SOIL_UNIT_WEIGHT: f64 = 125.0;

/// Identifies where a set of soil-spring parameters comes from
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum SoilSource {
    /// The layer (index, name) containing the requested depth
    Layer { index: usize, name: String, depth: f64 },

    /// The deepest layer (index, name), used for a depth below the stratigraphy
    Extrapolated { index: usize, name: String, depth: f64 },

    /// The thickness-weighted average of all layers
    WeightedAverage { names: Vec<String> },

    /// The built-in default soil (no layers were given)
    Default,
}

impl SoilSource {
    /// Returns a human-readable provenance label
    pub fn label(&self) -> String {
        match self {
            SoilSource::Layer { name, depth, .. } => format!("{} (at {} ft depth)", name, depth),
            SoilSource::Extrapolated { name, depth, .. } => {
                format!("{} (extrapolated to {} ft depth)", name, depth)
            }
            SoilSource::WeightedAverage { names } => format!("Weighted average: {}", names.join(", ")),
            SoilSource::Default => "Default".to_string(),
        }
    }
}

/// Holds the soil parameters used by the soil-springs calculation
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SoilSpringParameters {
    /// Friction angle φ' in degrees
    pub friction_angle: f64,

    /// Cohesion (psf); effective-stress cohesion of the selected layer
    pub cohesion: f64,

    /// Unit weight γ (pcf)
    pub unit_weight: f64,

    /// Provenance of these values
    pub source: SoilSource,
}

impl SoilSpringParameters {
    /// Returns the built-in default soil
    pub fn default_soil() -> Self {
        SoilSpringParameters {
            friction_angle: DEFAULT_SOIL_FRICTION_ANGLE,
            cohesion: DEFAULT_SOIL_COHESION,
            unit_weight: DEFAULT_SOIL_UNIT_WEIGHT,
            source: SoilSource::Default,
        }
    }

    /// Copies the parameters of a layer
    fn from_layer(layer: &SoilLayer, source: SoilSource) -> Self {
        SoilSpringParameters {
            friction_angle: layer.friction_angle,
            cohesion: layer.cohesion_effective,
            unit_weight: layer.unit_weight,
            source,
        }
    }
}

/// Returns the soil-spring parameters applicable at a given depth
///
/// # Input
///
/// * `layers` -- top-to-bottom layers
/// * `depth` -- depth below the ground surface (ft). None means that the
///   thickness-weighted average of all layers is returned.
///
/// # Notes
///
/// * Each layer covers the half-open interval `[top, bottom)`; thus a depth exactly on a
///   boundary belongs to the layer below. The bottom of the last layer is inclusive.
/// * A depth below the last layer returns the deepest layer tagged as extrapolated
/// * An empty list returns the default soil (φ = 30°, c = 100 psf, γ = 125 pcf)
/// * A negative depth is taken as the ground surface
pub fn layer_at_depth(layers: &[SoilLayer], depth: Option<f64>) -> SoilSpringParameters {
    if layers.is_empty() {
        log::warn!("no soil layers available; using the default soil");
        return SoilSpringParameters::default_soil();
    }
    let depth = match depth {
        Some(d) if d.is_finite() => f64::max(d, 0.0),
        Some(d) => {
            log::warn!("depth = {:?} is not finite; using the weighted average of all layers", d);
            return weighted_average(layers);
        }
        None => return weighted_average(layers),
    };
    let last = layers.len() - 1;
    let mut top = 0.0;
    for (index, layer) in layers.iter().enumerate() {
        let bottom = top + layer.thickness;
        if depth < bottom || (index == last && depth <= bottom) {
            let name = layer.name.clone();
            return SoilSpringParameters::from_layer(layer, SoilSource::Layer { index, name, depth });
        }
        top = bottom;
    }
    let deepest = &layers[last];
    log::warn!(
        "depth {} ft is below the stratigraphy ({} ft); extrapolating {}",
        depth,
        top,
        deepest.name
    );
    let name = deepest.name.clone();
    SoilSpringParameters::from_layer(deepest, SoilSource::Extrapolated { index: last, name, depth })
}

/// Returns the thickness-weighted average of friction angle, cohesion, and unit weight
///
/// An empty list returns the default soil.
pub fn weighted_average(layers: &[SoilLayer]) -> SoilSpringParameters {
    if layers.is_empty() {
        return SoilSpringParameters::default_soil();
    }
    let names: Vec<_> = layers.iter().map(|l| l.name.clone()).collect();
    let total: f64 = layers.iter().map(|l| l.thickness).sum();
    if total <= 0.0 {
        return SoilSpringParameters::from_layer(&layers[0], SoilSource::WeightedAverage { names });
    }
    let (mut phi, mut c, mut gamma) = (0.0, 0.0, 0.0);
    for layer in layers {
        phi += layer.friction_angle * layer.thickness;
        c += layer.cohesion_effective * layer.thickness;
        gamma += layer.unit_weight * layer.thickness;
    }
    SoilSpringParameters {
        friction_angle: phi / total,
        cohesion: c / total,
        unit_weight: gamma / total,
        source: SoilSource::WeightedAverage { names },
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
