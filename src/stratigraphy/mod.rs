//! Implements the soil stratigraphy model and the depth-to-layer lookup

mod layer_lookup;
mod soil_layer;
pub use crate::stratigraphy::layer_lookup::*;
pub use crate::stratigraphy::soil_layer::*;
