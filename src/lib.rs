//! Pgdsim -- Slope screening and soil-springs stress sweeps for buried pipelines
//!
//! The crate sweeps slope geometry, soil strength, and groundwater parameters,
//! screens each slope configuration by its Factor of Safety, and, for the slopes
//! requiring a detailed analysis, computes the soil-pipe interaction force and the
//! resulting pipe stresses caused by permanent ground displacement (PGD).
//!
//! The data flows one way:
//!
//! ```text
//! sweep → slope screening → soil layer at pipe depth → soil springs → decision matrix
//! ```
//!
//! # Units
//!
//! * Pipe diameter and wall thickness in inches
//! * Depth of cover, lengths, slope heights, and layer thicknesses in feet
//! * Unit weights in pcf; cohesion in psf
//! * Pressures and stresses in psi; soil forces in lb/ft
//!
//! # Example
//!
//! ```
//! use pgdsim::prelude::*;
//!
//! let params = ProjectParameters::new();
//! let slopes = SlopeSweep::new(&params).unwrap().with_cap(Some(10));
//! let slope_configs = slopes.build().unwrap();
//! let screening = screen(&MockSolver::new(7), &slope_configs).unwrap();
//!
//! let pipes = PipelineSweep::new(&params).unwrap().with_cap(Some(4));
//! let pipe_configs = pipes.build().unwrap();
//!
//! let springs = SoilSprings::new(GradeTable::new(), CoatingTable::new()).unwrap();
//! let aggregation = Aggregator::new(&springs)
//!     .aggregate(&screening.results, &slope_configs, &pipe_configs)
//!     .unwrap();
//! assert!(aggregation.results.len() <= 10 * 4);
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod decision;
pub mod prelude;
pub mod slope;
pub mod springs;
pub mod stratigraphy;
pub mod sweep;
