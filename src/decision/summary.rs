use super::{Aggregation, IntegratedAnalysisResult};
use crate::base::{Priority, MEDIUM_FOS};
use crate::slope::{Screening, SlopeAnalysisResult, UnavailableResult};
use serde::{Deserialize, Serialize};

/// Defines the number of critical rows listed in the summary
pub const TOP_CRITICAL_COUNT: usize = 5;

/// Holds a row of the slope-only decision matrix
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SlopeDecisionRow {
    pub config_id: String,
    pub total_stress_fos: f64,
    pub effective_stress_fos: f64,
    pub min_fos: f64,
    pub requires_detailed_analysis: bool,
    pub priority: Priority,
}

impl SlopeDecisionRow {
    /// Allocates a new instance from a screening result
    pub fn new(result: &SlopeAnalysisResult) -> Self {
        SlopeDecisionRow {
            config_id: result.config_id.clone(),
            total_stress_fos: result.total_stress_fos,
            effective_stress_fos: result.effective_stress_fos,
            min_fos: result.min_fos(),
            requires_detailed_analysis: result.requires_detailed_analysis,
            priority: result.priority,
        }
    }
}

/// Holds the number of items per priority tier
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct PriorityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    /// Counts the priorities
    pub fn new<I>(priorities: I) -> Self
    where
        I: IntoIterator<Item = Priority>,
    {
        let mut counts = PriorityCounts::default();
        for priority in priorities {
            match priority {
                Priority::Critical => counts.critical += 1,
                Priority::High => counts.high += 1,
                Priority::Medium => counts.medium += 1,
                Priority::Low => counts.low += 1,
            }
        }
        counts
    }

    /// Returns the count of a priority
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Critical => self.critical,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    /// Returns the total count
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Holds the executive summary of a screening run
///
/// Values are given at full precision.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DecisionSummary {
    /// Number of slope configurations (analyzed or unavailable)
    pub total_slope_configs: usize,

    /// Number of slope configurations with results
    pub slopes_analyzed: usize,

    /// Number of slope configurations requiring a detailed analysis
    pub requiring_detailed_analysis: usize,

    /// Smallest governing FoS (None if there are no results)
    pub min_fos: Option<f64>,

    /// Largest governing FoS
    pub max_fos: Option<f64>,

    /// Mean governing FoS
    pub mean_fos: Option<f64>,

    /// Slope-only priority breakdown
    pub slope_priorities: PriorityCounts,

    /// Number of integrated rows
    pub integrated_rows: usize,

    /// Integrated priority breakdown
    pub integrated_priorities: PriorityCounts,

    /// Number of integrated rows exceeding the allowable stress
    pub exceeding_allowable: usize,

    /// Critical rows with the lowest FoS (at most five)
    pub top_critical: Vec<IntegratedAnalysisResult>,

    /// Slope configurations without stability results
    pub unavailable: Vec<UnavailableResult>,

    /// Number of skipped pipeline evaluations
    pub skipped_evaluations: usize,

    /// Key recommendations
    pub key_recommendations: Vec<String>,
}

impl DecisionSummary {
    /// Allocates a new instance
    pub fn new(screening: &Screening, aggregation: &Aggregation) -> Self {
        let fos: Vec<f64> = screening.results.iter().map(|r| r.min_fos()).collect();
        let (min_fos, max_fos, mean_fos) = if fos.is_empty() {
            (None, None, None)
        } else {
            let min = fos.iter().copied().fold(f64::INFINITY, f64::min);
            let max = fos.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = fos.iter().sum::<f64>() / (fos.len() as f64);
            (Some(min), Some(max), Some(mean))
        };
        let slope_priorities = PriorityCounts::new(screening.results.iter().map(|r| r.priority));
        let integrated_priorities = PriorityCounts::new(aggregation.results.iter().map(|r| r.priority_level));
        let exceeding_allowable = aggregation.results.iter().filter(|r| r.exceeds_allowable).count();

        let mut top_critical: Vec<_> = aggregation
            .results
            .iter()
            .filter(|r| r.priority_level == Priority::Critical)
            .cloned()
            .collect();
        top_critical.sort_by(|a, b| a.slope_fos.total_cmp(&b.slope_fos));
        top_critical.truncate(TOP_CRITICAL_COUNT);

        let mut key_recommendations = Vec::new();
        if slope_priorities.critical > 0 {
            key_recommendations.push(format!(
                "IMMEDIATE ACTION: {} configurations have critical slope stability issues",
                slope_priorities.critical
            ));
        }
        let marginal = fos.iter().filter(|f| **f < MEDIUM_FOS).count();
        if marginal > 0 {
            key_recommendations.push(format!(
                "MONITORING REQUIRED: {} configurations have Factor of Safety < 1.5",
                marginal
            ));
        }
        if exceeding_allowable > 0 {
            key_recommendations.push(format!(
                "PIPELINE CONCERN: {} pipeline configurations exceed allowable stress",
                exceeding_allowable
            ));
        }
        key_recommendations.push("Review all Critical and High priority configurations immediately".to_string());
        key_recommendations
            .push("Consider design modifications for configurations exceeding allowable limits".to_string());
        key_recommendations.push("Implement monitoring program for marginal configurations".to_string());

        DecisionSummary {
            total_slope_configs: screening.results.len() + screening.unavailable.len(),
            slopes_analyzed: screening.results.len(),
            requiring_detailed_analysis: screening.flagged().count(),
            min_fos,
            max_fos,
            mean_fos,
            slope_priorities,
            integrated_rows: aggregation.results.len(),
            integrated_priorities,
            exceeding_allowable,
            top_critical,
            unavailable: screening.unavailable.clone(),
            skipped_evaluations: aggregation.skipped.len(),
            key_recommendations,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{DecisionSummary, PriorityCounts, SlopeDecisionRow};
    use crate::base::Priority;
    use crate::decision::Aggregation;
    use crate::slope::{Screening, SlopeAnalysisResult, UnavailableResult};
    use approx::assert_relative_eq;

    #[test]
    fn priority_counts_work() {
        let counts = PriorityCounts::new([Priority::Low, Priority::Critical, Priority::Low]);
        assert_eq!(counts.get(Priority::Low), 2);
        assert_eq!(counts.get(Priority::Critical), 1);
        assert_eq!(counts.get(Priority::High), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn slope_decision_row_works() {
        let res = SlopeAnalysisResult::new("Config_0004", 1.7, 1.45, None).unwrap();
        let row = SlopeDecisionRow::new(&res);
        assert_eq!(row.min_fos, 1.45);
        assert_eq!(row.priority, Priority::Medium);
        assert!(row.requires_detailed_analysis);
    }

    #[test]
    fn new_works() {
        let screening = Screening {
            results: vec![
                SlopeAnalysisResult::new("Config_0000", 0.95, 1.2, None).unwrap(),
                SlopeAnalysisResult::new("Config_0001", 2.3, 2.1, None).unwrap(),
                SlopeAnalysisResult::new("Config_0002", 1.4, 1.6, None).unwrap(),
            ],
            unavailable: vec![UnavailableResult {
                config_id: "Config_0003".to_string(),
                reason: "no tabulated FoS for Config_0003".to_string(),
            }],
        };
        let summary = DecisionSummary::new(&screening, &Aggregation::default());
        assert_eq!(summary.total_slope_configs, 4);
        assert_eq!(summary.slopes_analyzed, 3);
        assert_eq!(summary.requiring_detailed_analysis, 2);
        assert_eq!(summary.min_fos, Some(0.95));
        assert_eq!(summary.max_fos, Some(2.1));
        assert_relative_eq!(summary.mean_fos.unwrap(), (0.95 + 2.1 + 1.4) / 3.0, epsilon = 1e-15);
        assert_eq!(summary.slope_priorities.critical, 1);
        assert_eq!(summary.slope_priorities.medium, 1);
        assert_eq!(summary.slope_priorities.low, 1);
        assert_eq!(summary.integrated_rows, 0);
        assert_eq!(summary.top_critical.len(), 0);
        assert_eq!(summary.unavailable.len(), 1);
        assert_eq!(
            summary.key_recommendations[0],
            "IMMEDIATE ACTION: 1 configurations have critical slope stability issues"
        );
        assert_eq!(
            summary.key_recommendations[1],
            "MONITORING REQUIRED: 2 configurations have Factor of Safety < 1.5"
        );
        assert_eq!(summary.key_recommendations.len(), 5);
    }

    #[test]
    fn empty_screening_works() {
        let summary = DecisionSummary::new(&Screening::default(), &Aggregation::default());
        assert_eq!(summary.total_slope_configs, 0);
        assert_eq!(summary.min_fos, None);
        assert_eq!(summary.mean_fos, None);
        assert_eq!(summary.key_recommendations.len(), 3);
    }
}
