//! Makes available common structures needed to run a screening
//!
//! You may write `use pgdsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{CoatingTable, Direction, GradeTable, Priority, SampleParams, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::decision::{
    ActionPlan, Aggregation, Aggregator, DecisionReport, DecisionSummary, IntegratedAnalysisResult,
};
pub use crate::slope::{
    classify, screen, MockSolver, Screening, SlopeAnalysisResult, SlopeConfiguration, StabilitySolver, TabulatedSolver,
};
pub use crate::springs::{PipelineConfiguration, SoilSprings, StressResult};
pub use crate::stratigraphy::{layer_at_depth, SoilLayer, SoilSpringParameters};
pub use crate::sweep::{PipelineSweep, ProjectParameters, SlopeSweep, SoilScenario};
