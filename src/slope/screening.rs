use crate::base::{Priority, CRITICAL_FOS, DETAILED_ANALYSIS_FOS, HIGH_FOS, MEDIUM_FOS};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the kind of circular failure surface
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum SurfaceKind {
    DeepSeated,
    Typical,
    Shallow,
}

/// Holds a circular failure surface (slip circle)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FailureSurface {
    pub kind: SurfaceKind,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

/// Holds the result of the stability analysis of one slope configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SlopeAnalysisResult {
    /// Identifier of the slope configuration
    pub config_id: String,

    /// Factor of Safety from the total-stress analysis
    pub total_stress_fos: f64,

    /// Factor of Safety from the effective-stress analysis
    pub effective_stress_fos: f64,

    /// Indicates that min(FoS) < 2.0
    pub requires_detailed_analysis: bool,

    /// Slope-only priority tier
    pub priority: Priority,

    /// Critical slip surface, if reported by the solver
    pub failure_surface: Option<FailureSurface>,
}

impl SlopeAnalysisResult {
    /// Allocates a new instance and classifies the configuration
    pub fn new(
        config_id: &str,
        total_stress_fos: f64,
        effective_stress_fos: f64,
        failure_surface: Option<FailureSurface>,
    ) -> Result<Self, StrError> {
        let (requires_detailed_analysis, priority) = classify(total_stress_fos, effective_stress_fos).map_err(|e| {
            log::error!(
                "{}: invalid factors of safety ({:?}, {:?})",
                config_id,
                total_stress_fos,
                effective_stress_fos
            );
            e
        })?;
        Ok(SlopeAnalysisResult {
            config_id: config_id.to_string(),
            total_stress_fos,
            effective_stress_fos,
            requires_detailed_analysis,
            priority,
            failure_surface,
        })
    }

    /// Returns the governing (minimum) Factor of Safety
    pub fn min_fos(&self) -> f64 {
        f64::min(self.total_stress_fos, self.effective_stress_fos)
    }
}

/// Classifies a slope by its Factor of Safety pair
///
/// Returns `(requires_detailed, priority)` where, with `min_fos = min(total_fos, effective_fos)`:
///
/// * `requires_detailed` is true if `min_fos < 2.0`
/// * `priority` is Critical if `min_fos < 1.0`, High if `min_fos < 1.2`, Medium if `min_fos < 1.5`, and Low otherwise
///
/// Thus, `min_fos = 1.0` gives High and `min_fos = 1.5` gives Low.
///
/// # Errors
///
/// Negative or non-finite values are rejected.
pub fn classify(total_fos: f64, effective_fos: f64) -> Result<(bool, Priority), StrError> {
    if !total_fos.is_finite() || !effective_fos.is_finite() {
        return Err("factor of safety must be finite");
    }
    if total_fos < 0.0 || effective_fos < 0.0 {
        return Err("factor of safety must be ≥ 0");
    }
    let min_fos = f64::min(total_fos, effective_fos);
    let priority = if min_fos < CRITICAL_FOS {
        Priority::Critical
    } else if min_fos < HIGH_FOS {
        Priority::High
    } else if min_fos < MEDIUM_FOS {
        Priority::Medium
    } else {
        Priority::Low
    };
    Ok((min_fos < DETAILED_ANALYSIS_FOS, priority))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
