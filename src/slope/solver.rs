use super::{FailureSurface, SlopeAnalysisResult, SlopeConfiguration, SurfaceKind};
use crate::base::FAILURE_SURFACE_MAX_FOS;
use crate::StrError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Defines the smallest radius (ft) of a generated slip circle
pub const MIN_SLIP_RADIUS: f64 = 25.0;

/// Holds the outcome of a stability analysis
#[derive(Clone, Debug, PartialEq)]
pub enum SolverOutcome {
    /// The analysis ran and produced the two factors of safety
    Solved {
        total_fos: f64,
        effective_fos: f64,
        failure_surface: Option<FailureSurface>,
    },

    /// The analysis could not be performed (the reason is given)
    Unavailable(String),
}

/// Defines the capability of computing the factors of safety of a slope configuration
///
/// Implementations may wrap an external finite-element program, a table of results
/// handed over from such a program, or a placeholder generator.
pub trait StabilitySolver {
    /// Analyzes a configuration
    fn analyze(&self, config: &SlopeConfiguration) -> SolverOutcome;

    /// Returns a short name for logging
    fn name(&self) -> &str;
}

/// Returns a circular failure surface consistent with a Factor of Safety and the slope shape
///
/// No surface is returned for very stable slopes (FoS > 2.5). Otherwise, a deep-seated circle is
/// used for FoS < 1.2 or angle > 35°, a typical circle for FoS < 1.5 or angle > 25°, and a shallow
/// circle otherwise. The radius is at least 25 ft.
pub fn circular_failure_surface(fos: f64, slope_angle: f64, slope_height: f64) -> Option<FailureSurface> {
    if fos > FAILURE_SURFACE_MAX_FOS {
        return None;
    }
    let h = slope_height;
    let run = h / f64::tan(slope_angle.to_radians());
    let (kind, cx, cy, r) = if fos < 1.2 || slope_angle > 35.0 {
        (SurfaceKind::DeepSeated, 0.4 * run, 1.6 * h, 1.2 * h)
    } else if fos < 1.5 || slope_angle > 25.0 {
        (SurfaceKind::Typical, 0.6 * run, 1.4 * h, 0.9 * h)
    } else {
        (SurfaceKind::Shallow, 0.8 * run, 1.3 * h, 0.7 * h)
    };
    Some(FailureSurface {
        kind,
        center_x: cx,
        center_y: cy,
        radius: f64::max(r, MIN_SLIP_RADIUS),
    })
}

/// Implements a reproducible placeholder solver
///
/// Each configuration draws from its own ChaCha8 stream (selected by hashing the config_id), so the
/// factors of safety do not depend on the order of the analyses.
pub struct MockSolver {
    seed: u64,
}

impl MockSolver {
    /// Allocates a new instance
    pub fn new(seed: u64) -> Self {
        MockSolver { seed }
    }

    /// Returns the random generator of a configuration
    fn generator(&self, config_id: &str) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(fnv1a(config_id));
        rng
    }
}

impl StabilitySolver for MockSolver {
    fn analyze(&self, config: &SlopeConfiguration) -> SolverOutcome {
        let mut rng = self.generator(&config.config_id);
        let total_fos = round2(rng.gen_range(0.8..2.5));
        let effective_fos = round2(rng.gen_range(0.7..2.2));
        let failure_surface = circular_failure_surface(effective_fos, config.slope_angle, config.slope_height);
        SolverOutcome::Solved {
            total_fos,
            effective_fos,
            failure_surface,
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Holds the factors of safety of one configuration computed elsewhere
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TabulatedFos {
    pub total_stress_fos: f64,
    pub effective_stress_fos: f64,
    #[serde(default)]
    pub failure_surface: Option<FailureSurface>,
}

/// Implements a solver that looks up results from an external solver run
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TabulatedSolver {
    /// Maps config_id to the factors of safety
    pub fos: BTreeMap<String, TabulatedFos>,
}

impl TabulatedSolver {
    /// Allocates a new empty table
    pub fn new() -> Self {
        TabulatedSolver { fos: BTreeMap::new() }
    }

    /// Inserts the results of a configuration
    pub fn insert(&mut self, config_id: &str, total_stress_fos: f64, effective_stress_fos: f64) -> &mut Self {
        self.fos.insert(
            config_id.to_string(),
            TabulatedFos {
                total_stress_fos,
                effective_stress_fos,
                failure_surface: None,
            },
        );
        self
    }

    /// Reads a JSON file containing the table
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open FoS table file")?;
        let buffered = BufReader::new(file);
        let table = serde_json::from_reader(buffered).map_err(|_| "cannot parse FoS table file")?;
        Ok(table)
    }

    /// Writes a JSON file with the table
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
        let mut file = File::create(&path).map_err(|_| "cannot create FoS table file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write FoS table file")?;
        Ok(())
    }
}

impl StabilitySolver for TabulatedSolver {
    fn analyze(&self, config: &SlopeConfiguration) -> SolverOutcome {
        match self.fos.get(&config.config_id) {
            Some(entry) => SolverOutcome::Solved {
                total_fos: entry.total_stress_fos,
                effective_fos: entry.effective_stress_fos,
                failure_surface: entry.failure_surface.clone(),
            },
            None => SolverOutcome::Unavailable(format!("no tabulated FoS for {}", config.config_id)),
        }
    }

    fn name(&self) -> &str {
        "tabulated"
    }
}

/// Holds a configuration that the solver could not analyze
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UnavailableResult {
    pub config_id: String,
    pub reason: String,
}

/// Holds the results of screening a set of slope configurations
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Screening {
    /// Results in the order of the configurations
    pub results: Vec<SlopeAnalysisResult>,

    /// Configurations without results
    pub unavailable: Vec<UnavailableResult>,
}

impl Screening {
    /// Returns the results requiring a detailed analysis
    pub fn flagged(&self) -> impl Iterator<Item = &SlopeAnalysisResult> {
        self.results.iter().filter(|r| r.requires_detailed_analysis)
    }
}

/// Screens slope configurations with a stability solver
///
/// Unavailable analyses are logged and collected in [Screening::unavailable].
///
/// # Errors
///
/// Returns an error if the solver reports an invalid (negative or non-finite) Factor of Safety.
pub fn screen(solver: &dyn StabilitySolver, configs: &[SlopeConfiguration]) -> Result<Screening, StrError> {
    log::info!("screening {} slope configurations with the {} solver", configs.len(), solver.name());
    let mut screening = Screening::default();
    for config in configs {
        match solver.analyze(config) {
            SolverOutcome::Solved {
                total_fos,
                effective_fos,
                failure_surface,
            } => {
                let result = SlopeAnalysisResult::new(&config.config_id, total_fos, effective_fos, failure_surface)?;
                screening.results.push(result);
            }
            SolverOutcome::Unavailable(reason) => {
                log::warn!("{}: stability analysis unavailable: {}", config.config_id, reason);
                screening.unavailable.push(UnavailableResult {
                    config_id: config.config_id.clone(),
                    reason,
                });
            }
        }
    }
    log::info!(
        "{} of {} slope configurations require a detailed analysis",
        screening.flagged().count(),
        screening.results.len()
    );
    Ok(screening)
}

/// Returns the 64-bit FNV-1a hash of a string
fn fnv1a(text: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in text.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// Rounds to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{
        circular_failure_surface, fnv1a, screen, MockSolver, SolverOutcome, StabilitySolver, SurfaceKind,
        TabulatedSolver,
    };
    use crate::base::{SampleParams, DEFAULT_TEST_DIR};
    use crate::slope::SlopeConfiguration;
    use approx::assert_relative_eq;

    fn configs() -> Vec<SlopeConfiguration> {
        let scenario = SampleParams::soil_scenario_weak();
        (0..5)
            .map(|i| {
                let id = format!("Config_{:04}", i);
                SlopeConfiguration::new(&id, 20.0 + 5.0 * i as f64, 30.0, 0.7, &scenario).unwrap()
            })
            .collect()
    }

    #[test]
    fn fnv1a_works() {
        assert_eq!(fnv1a(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a("a"), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn circular_failure_surface_works() {
        assert_eq!(circular_failure_surface(2.6, 30.0, 40.0), None);

        let s = circular_failure_surface(1.1, 20.0, 40.0).unwrap();
        assert_eq!(s.kind, SurfaceKind::DeepSeated);
        assert_relative_eq!(s.center_y, 64.0, epsilon = 1e-12);
        assert_relative_eq!(s.radius, 48.0, epsilon = 1e-12);

        let s = circular_failure_surface(1.8, 30.0, 40.0).unwrap();
        assert_eq!(s.kind, SurfaceKind::Typical);
        assert_relative_eq!(s.radius, 36.0, epsilon = 1e-12);

        let s = circular_failure_surface(2.0, 45.0, 20.0).unwrap();
        assert_eq!(s.kind, SurfaceKind::DeepSeated);
        assert_relative_eq!(s.center_x, 8.0, epsilon = 1e-12);

        let s = circular_failure_surface(1.9, 20.0, 20.0).unwrap();
        assert_eq!(s.kind, SurfaceKind::Shallow);
        assert_eq!(s.radius, 25.0); // 0.7 × 20 = 14 is below the floor
    }

    #[test]
    fn mock_solver_is_reproducible() {
        let configs = configs();
        let solver = MockSolver::new(42);
        let forward: Vec<_> = configs.iter().map(|c| solver.analyze(c)).collect();
        let backward: Vec<_> = configs.iter().rev().map(|c| solver.analyze(c)).collect();
        for (i, outcome) in forward.iter().enumerate() {
            assert_eq!(outcome, &backward[configs.len() - 1 - i]);
            match outcome {
                SolverOutcome::Solved {
                    total_fos,
                    effective_fos,
                    ..
                } => {
                    assert!(*total_fos >= 0.8 && *total_fos <= 2.5);
                    assert!(*effective_fos >= 0.7 && *effective_fos <= 2.2);
                    assert_relative_eq!(total_fos * 100.0, (total_fos * 100.0).round(), epsilon = 1e-9);
                }
                SolverOutcome::Unavailable(_) => panic!("mock solver must always solve"),
            }
        }
        assert_eq!(solver.name(), "mock");
    }

    #[test]
    fn screen_works() {
        let configs = configs();
        let screening = screen(&MockSolver::new(1), &configs).unwrap();
        assert_eq!(screening.results.len(), 5);
        assert_eq!(screening.unavailable.len(), 0);
        for (res, config) in screening.results.iter().zip(&configs) {
            assert_eq!(res.config_id, config.config_id);
        }
    }

    #[test]
    fn screen_reports_unavailable() {
        let configs = configs();
        let mut solver = TabulatedSolver::new();
        solver.insert("Config_0000", 1.4, 1.2).insert("Config_0003", 2.3, 2.1);
        let screening = screen(&solver, &configs).unwrap();
        assert_eq!(screening.results.len(), 2);
        assert_eq!(screening.unavailable.len(), 3);
        assert_eq!(screening.unavailable[0].config_id, "Config_0001");
        assert_eq!(screening.unavailable[0].reason, "no tabulated FoS for Config_0001");
        assert_eq!(screening.flagged().count(), 1);
    }

    #[test]
    fn screen_captures_errors() {
        let configs = configs();
        let mut solver = TabulatedSolver::new();
        solver.insert("Config_0002", -1.0, 1.2);
        assert_eq!(
            screen(&solver, &configs).err(),
            Some("factor of safety must be ≥ 0")
        );
    }

    #[test]
    fn tabulated_solver_json_works() {
        let mut solver = TabulatedSolver::new();
        solver.insert("Config_0000", 1.4, 1.2);
        let path = format!("{}/fos_table.json", DEFAULT_TEST_DIR);
        solver.write_json(&path).unwrap();
        let read = TabulatedSolver::read_json(&path).unwrap();
        assert_eq!(read, solver);
        let read: TabulatedSolver =
            serde_json::from_str(r#"{"fos":{"Config_0001":{"total_stress_fos":1.0,"effective_stress_fos":0.9}}}"#)
                .unwrap();
        assert_eq!(read.fos["Config_0001"].failure_surface, None);
        assert_eq!(
            TabulatedSolver::read_json("/tmp/pgdsim/__not_found__.json").err(),
            Some("cannot open FoS table file")
        );
    }
}
