//! Implements the pipeline configuration and the closed-form soil-springs stress engine

mod pipeline;
mod soil_springs;
pub use crate::springs::pipeline::*;
pub use crate::springs::soil_springs::*;
