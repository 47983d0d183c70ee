//! Implements the project parameters and the cartesian-product sweeps

mod combinator;
mod parameters;
pub use crate::sweep::combinator::*;
pub use crate::sweep::parameters::*;
