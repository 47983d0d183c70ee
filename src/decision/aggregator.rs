use crate::base::{Priority, CRITICAL_FOS, DETAILED_ANALYSIS_FOS, HIGH_FOS, MAX_INTEGRATED_ROWS, MEDIUM_FOS};
use crate::slope::{SlopeAnalysisResult, SlopeConfiguration};
use crate::springs::{PipelineConfiguration, SoilSprings};
use crate::stratigraphy::SoilSpringParameters;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Defines the recommendation categories of the decision matrix
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Recommendation {
    /// The slope is unstable (FoS < 1.0)
    Critical,

    /// The pipeline stresses exceed the allowable stress
    HighPriorityExceeds,

    /// The slope is marginal (FoS < 1.5)
    MediumMonitor,

    /// The slope is acceptable but should be monitored (FoS < 2.0)
    LowMonitor,

    /// No immediate action is required
    Acceptable,
}

impl Recommendation {
    /// Returns the recommendation for the governing FoS and the exceedance flag
    ///
    /// The checks are made in order: FoS < 1.0, exceedance, FoS < 1.5, FoS < 2.0.
    pub fn new(min_fos: f64, exceeds_allowable: bool) -> Self {
        if min_fos < CRITICAL_FOS {
            Recommendation::Critical
        } else if exceeds_allowable {
            Recommendation::HighPriorityExceeds
        } else if min_fos < MEDIUM_FOS {
            Recommendation::MediumMonitor
        } else if min_fos < DETAILED_ANALYSIS_FOS {
            Recommendation::LowMonitor
        } else {
            Recommendation::Acceptable
        }
    }

    /// Returns the message text
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Critical => "CRITICAL: Immediate detailed analysis required - Slope unstable",
            Recommendation::HighPriorityExceeds => {
                "HIGH PRIORITY: Pipeline stresses exceed allowable - Detailed analysis required"
            }
            Recommendation::MediumMonitor => {
                "MEDIUM PRIORITY: Slope stability marginal - Monitor and consider analysis"
            }
            Recommendation::LowMonitor => "LOW PRIORITY: Acceptable but monitor conditions",
            Recommendation::Acceptable => "ACCEPTABLE: No immediate action required",
        }
    }
}

/// Returns the integrated priority level
///
/// Critical if FoS < 1.0 or the pipeline stresses exceed the allowable; High if FoS < 1.2;
/// Medium if FoS < 1.5; Low otherwise. Note that, unlike [crate::slope::classify], the
/// exceedance flag may promote an otherwise stable slope to Critical.
pub fn priority_level(min_fos: f64, exceeds_allowable: bool) -> Priority {
    if min_fos < CRITICAL_FOS || exceeds_allowable {
        Priority::Critical
    } else if min_fos < HIGH_FOS {
        Priority::High
    } else if min_fos < MEDIUM_FOS {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Holds the integrated result of one (slope configuration, pipeline configuration) pair
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct IntegratedAnalysisResult {
    /// Combined key "{slope config_id}/{pipeline config_id}"
    pub row_id: String,

    /// Slope configuration identifier
    pub config_id: String,

    /// Name of the soil scenario of the slope
    pub scenario: String,

    /// Governing (minimum) Factor of Safety of the slope
    pub slope_fos: f64,

    pub pipeline: PipelineConfiguration,

    /// Soil at the depth of cover
    pub soil: SoilSpringParameters,

    /// Soil force (lb/ft)
    pub longitudinal_force: f64,

    /// Axial stress (psi)
    pub axial_stress: f64,

    /// Hoop stress (psi)
    pub hoop_stress: f64,

    /// Allowable stress (psi)
    pub allowable_stress: f64,

    /// Remaining allowable stress (psi)
    pub remaining_allowable_stress: f64,

    /// Allowable length (ft)
    pub allowable_length: f64,

    pub exceeds_allowable: bool,

    /// Grade actually used
    pub grade_source: String,

    pub recommendation: Recommendation,

    pub priority_level: Priority,
}

/// Holds a pipeline evaluation that was skipped because of invalid input
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SkippedEvaluation {
    pub row_id: String,
    pub reason: String,
}

/// Holds the ranked integrated results and the skipped evaluations
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Aggregation {
    /// Ranked results (priority level, then slope FoS)
    pub results: Vec<IntegratedAnalysisResult>,

    /// Pipeline evaluations rejected by the stress engine
    pub skipped: Vec<SkippedEvaluation>,
}

/// Joins the slope screening with the soil-springs results
pub struct Aggregator<'a> {
    springs: &'a SoilSprings,
    pipelines_per_slope: Option<usize>,
    max_rows: usize,
}

impl<'a> Aggregator<'a> {
    /// Allocates a new instance
    pub fn new(springs: &'a SoilSprings) -> Self {
        Aggregator {
            springs,
            pipelines_per_slope: None,
            max_rows: MAX_INTEGRATED_ROWS,
        }
    }

    /// Limits the number of pipeline configurations evaluated per slope (the leading ones)
    pub fn with_pipelines_per_slope(mut self, limit: Option<usize>) -> Self {
        self.pipelines_per_slope = limit;
        self
    }

    /// Sets the maximum number of integrated rows (default [MAX_INTEGRATED_ROWS])
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Evaluates one (slope, pipeline) pair
    ///
    /// The soil is taken from the slope stratigraphy at the depth of cover of the pipe.
    pub fn evaluate(
        &self,
        slope_result: &SlopeAnalysisResult,
        slope_config: &SlopeConfiguration,
        pipe: &PipelineConfiguration,
    ) -> Result<IntegratedAnalysisResult, StrError> {
        let soil = slope_config.soil_at_depth(Some(pipe.depth_of_cover));
        let stress = self.springs.compute_soil_springs(pipe, &soil)?;
        let slope_fos = slope_result.min_fos();
        Ok(IntegratedAnalysisResult {
            row_id: format!("{}/{}", slope_result.config_id, pipe.config_id),
            config_id: slope_result.config_id.clone(),
            scenario: slope_config.scenario.clone(),
            slope_fos,
            pipeline: pipe.clone(),
            soil,
            longitudinal_force: stress.longitudinal_force,
            axial_stress: stress.axial_stress,
            hoop_stress: stress.hoop_stress,
            allowable_stress: stress.allowable_stress,
            remaining_allowable_stress: stress.remaining_allowable_stress,
            allowable_length: stress.allowable_length,
            exceeds_allowable: stress.exceeds_allowable,
            grade_source: stress.grade_source,
            recommendation: Recommendation::new(slope_fos, stress.exceeds_allowable),
            priority_level: priority_level(slope_fos, stress.exceeds_allowable),
        })
    }

    /// Aggregates and ranks the integrated results
    ///
    /// Only slopes requiring a detailed analysis (min FoS < 2.0) are evaluated.
    ///
    /// # Errors
    ///
    /// Duplicate slope config_ids and slope results without a matching configuration are structural
    /// errors and abort the aggregation. So does a run whose number of flagged slopes times the number
    /// of pipelines per slope exceeds the maximum number of rows. A pipeline rejected by the stress
    /// engine is logged and recorded in [Aggregation::skipped].
    pub fn aggregate(
        &self,
        slope_results: &[SlopeAnalysisResult],
        slope_configs: &[SlopeConfiguration],
        pipeline_configs: &[PipelineConfiguration],
    ) -> Result<Aggregation, StrError> {
        let mut configs: HashMap<&str, &SlopeConfiguration> = HashMap::new();
        for config in slope_configs {
            if configs.insert(config.config_id.as_str(), config).is_some() {
                log::error!("slope config_id {} is duplicated", config.config_id);
                return Err("slope config_ids must be unique");
            }
        }
        let npipe = match self.pipelines_per_slope {
            Some(n) => usize::min(n, pipeline_configs.len()),
            None => pipeline_configs.len(),
        };
        let flagged = slope_results.iter().filter(|r| is_flagged(r)).count();
        if flagged.saturating_mul(npipe) > self.max_rows {
            log::error!(
                "{} flagged slopes × {} pipelines per slope exceeds the limit of {} integrated rows",
                flagged,
                npipe,
                self.max_rows
            );
            return Err("too many integrated rows; limit the pipelines per slope or cap the sweeps");
        }
        let mut aggregation = Aggregation::default();
        for slope_result in slope_results {
            if !is_flagged(slope_result) {
                continue;
            }
            let slope_config = match configs.get(slope_result.config_id.as_str()) {
                Some(c) => *c,
                None => {
                    log::error!("{}: slope result has no matching slope configuration", slope_result.config_id);
                    return Err("slope result has no matching slope configuration");
                }
            };
            for pipe in &pipeline_configs[..npipe] {
                match self.evaluate(slope_result, slope_config, pipe) {
                    Ok(row) => aggregation.results.push(row),
                    Err(e) => {
                        let row_id = format!("{}/{}", slope_result.config_id, pipe.config_id);
                        log::warn!("{}: skipping pipeline evaluation: {}", row_id, e);
                        aggregation.skipped.push(SkippedEvaluation {
                            row_id,
                            reason: e.to_string(),
                        });
                    }
                }
            }
            log::debug!("completed integration for {}", slope_result.config_id);
        }
        rank(&mut aggregation.results);
        log::info!(
            "aggregated {} integrated results ({} skipped)",
            aggregation.results.len(),
            aggregation.skipped.len()
        );
        Ok(aggregation)
    }
}

fn is_flagged(result: &SlopeAnalysisResult) -> bool {
    result.requires_detailed_analysis || result.min_fos() < DETAILED_ANALYSIS_FOS
}

/// Sorts the results by priority level and then by slope FoS (stable)
pub fn rank(results: &mut [IntegratedAnalysisResult]) {
    results.sort_by(|a, b| {
        a.priority_level
            .cmp(&b.priority_level)
            .then(a.slope_fos.total_cmp(&b.slope_fos))
    });
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
