//! Implements the decision matrix: aggregation, ranking, action plans, summary, and report

mod actions;
mod aggregator;
mod report;
mod summary;
pub use crate::decision::actions::*;
pub use crate::decision::aggregator::*;
pub use crate::decision::report::*;
pub use crate::decision::summary::*;
