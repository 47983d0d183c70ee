//! Implements the slope geometry, the slope configurations, and the stability screening

mod configuration;
mod geometry;
mod screening;
mod solver;
pub use crate::slope::configuration::*;
pub use crate::slope::geometry::*;
pub use crate::slope::screening::*;
pub use crate::slope::solver::*;
