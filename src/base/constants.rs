/// Defines the directory where the decision reports are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/pgdsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/pgdsim/test";

/// Defines the number of leading pipeline configurations evaluated per flagged slope by the driver
pub const DEFAULT_PIPELINES_PER_SLOPE: usize = 5;

/// Defines the maximum number of (slope, pipeline) rows produced by one aggregation
pub const MAX_INTEGRATED_ROWS: usize = 1_000_000;

/// Defines the minimum Factor of Safety below which a detailed analysis is required
///
/// Both the standard band (FoS < 1.5) and the marginal band (1.5 ≤ FoS < 2.0) trigger the escalation.
pub const DETAILED_ANALYSIS_FOS: f64 = 2.0;

/// Defines the Factor of Safety below which the slope priority is Critical
pub const CRITICAL_FOS: f64 = 1.0;

/// Defines the Factor of Safety below which the slope priority is High
pub const HIGH_FOS: f64 = 1.2;

/// Defines the Factor of Safety below which the slope priority is Medium
pub const MEDIUM_FOS: f64 = 1.5;

/// Defines the Factor of Safety above which the (mock) failure surface is not generated
pub const FAILURE_SURFACE_MAX_FOS: f64 = 2.5;

/// Defines the fraction of SMYS allowed for combined loading
pub const ALLOWABLE_SMYS_FRACTION: f64 = 0.72;

/// Defines the fraction of the hoop stress added to the axial stress (combination rule)
pub const HOOP_COMBINATION_FACTOR: f64 = 0.5;

/// Defines the bearing capacity factor Nc for deep strip foundations
pub const BEARING_CAPACITY_NC: f64 = 9.0;

/// Defines the allowable length (ft) reported when the soil force is zero
pub const ALLOWABLE_LENGTH_CAP: f64 = 1000.0;

/// Defines the number of inches in one foot
pub const INCHES_PER_FOOT: f64 = 12.0;
