use super::IntegratedAnalysisResult;
use crate::base::{Priority, CRITICAL_FOS, DETAILED_ANALYSIS_FOS, HIGH_FOS, MEDIUM_FOS};
use serde::{Deserialize, Serialize};

/// Defines the overall risk levels
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum RiskLevel {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl RiskLevel {
    /// Assesses the risk from the governing FoS and the exceedance flag
    pub fn new(min_fos: f64, exceeds_allowable: bool) -> Self {
        if min_fos < CRITICAL_FOS || exceeds_allowable {
            RiskLevel::VeryHigh
        } else if min_fos < HIGH_FOS {
            RiskLevel::High
        } else if min_fos < MEDIUM_FOS {
            RiskLevel::Medium
        } else if min_fos < DETAILED_ANALYSIS_FOS {
            RiskLevel::Low
        } else {
            RiskLevel::VeryLow
        }
    }

    /// Returns the label of the risk level
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "VERY HIGH",
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
            RiskLevel::VeryLow => "VERY LOW",
        }
    }
}

/// Holds the follow-up action recommended for an integrated result
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ActionPlan {
    pub row_id: String,
    pub action: String,
    pub timeline: String,
    pub estimated_cost: String,
    pub risk: RiskLevel,
}

impl ActionPlan {
    /// Allocates a new instance from the governing FoS, the exceedance flag, and the priority
    pub fn new(row_id: &str, min_fos: f64, exceeds_allowable: bool, priority: Priority) -> Self {
        let action = if min_fos < CRITICAL_FOS || exceeds_allowable {
            "Immediate detailed geotechnical analysis and design review"
        } else if min_fos < HIGH_FOS || priority == Priority::Critical {
            "Detailed analysis within 30 days, consider design modifications"
        } else if min_fos < MEDIUM_FOS || priority == Priority::High {
            "Engineering evaluation within 60 days"
        } else {
            "Routine monitoring and periodic review"
        };
        let timeline = if min_fos < CRITICAL_FOS || priority == Priority::Critical {
            "Immediate (0-7 days)"
        } else if min_fos < HIGH_FOS || priority == Priority::High {
            "Short-term (1-4 weeks)"
        } else if min_fos < MEDIUM_FOS || priority == Priority::Medium {
            "Medium-term (1-3 months)"
        } else {
            "Long-term (6-12 months)"
        };
        let estimated_cost = match priority {
            Priority::Critical => "$50,000 - $200,000",
            Priority::High => "$20,000 - $75,000",
            Priority::Medium => "$10,000 - $30,000",
            Priority::Low => "$5,000 - $15,000",
        };
        ActionPlan {
            row_id: row_id.to_string(),
            action: action.to_string(),
            timeline: timeline.to_string(),
            estimated_cost: estimated_cost.to_string(),
            risk: RiskLevel::new(min_fos, exceeds_allowable),
        }
    }

    /// Allocates the plan of an integrated result
    pub fn from_result(result: &IntegratedAnalysisResult) -> Self {
        ActionPlan::new(
            &result.row_id,
            result.slope_fos,
            result.exceeds_allowable,
            result.priority_level,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
