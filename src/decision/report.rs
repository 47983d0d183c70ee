use super::{ActionPlan, Aggregation, DecisionSummary, IntegratedAnalysisResult, SkippedEvaluation, SlopeDecisionRow};
use crate::slope::Screening;
use crate::sweep::ProjectParameters;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the decision matrix of a screening run, ready for export
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DecisionReport {
    pub project_name: String,
    pub description: String,

    /// Name of the stability solver
    pub solver: String,

    /// Slope-only decision matrix
    pub slope_rows: Vec<SlopeDecisionRow>,

    /// Ranked integrated results
    pub integrated_results: Vec<IntegratedAnalysisResult>,

    /// Action plan of each integrated result (same order)
    pub action_plans: Vec<ActionPlan>,

    /// Pipeline evaluations rejected by the stress engine
    pub skipped: Vec<SkippedEvaluation>,

    pub summary: DecisionSummary,
}

impl DecisionReport {
    /// Allocates a new instance
    pub fn new(params: &ProjectParameters, solver: &str, screening: &Screening, aggregation: &Aggregation) -> Self {
        DecisionReport {
            project_name: params.project_name.clone(),
            description: params.description.clone(),
            solver: solver.to_string(),
            slope_rows: screening.results.iter().map(SlopeDecisionRow::new).collect(),
            integrated_results: aggregation.results.clone(),
            action_plans: aggregation.results.iter().map(ActionPlan::from_result).collect(),
            skipped: aggregation.skipped.clone(),
            summary: DecisionSummary::new(screening, aggregation),
        }
    }

    /// Returns the path of the report file
    pub fn path(out_dir: &str, fn_stem: &str) -> String {
        format!("{}/{}-decision.json", out_dir, fn_stem)
    }

    /// Reads a JSON file containing the report
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open report file")?;
        let buffered = BufReader::new(file);
        let report = serde_json::from_reader(buffered).map_err(|_| "cannot parse report file")?;
        Ok(report)
    }

    /// Writes a JSON file with the report
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create report file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write report file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
