//! Implements the base structures shared by the screening and stress modules

mod constants;
mod enums;
mod sample_params;
mod tables;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::sample_params::*;
pub use crate::base::tables::*;
