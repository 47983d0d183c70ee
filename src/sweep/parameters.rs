use crate::base::{CoatingTable, Direction, GradeTable, SampleParams};
use crate::stratigraphy::SoilLayer;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Defines the number of layers of a soil scenario
pub const SCENARIO_LAYER_COUNT: usize = 2;

/// Holds a named two-layer soil scenario
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SoilScenario {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// "Slope Material" then "Foundation Material"
    pub layers: Vec<SoilLayer>,
}

impl SoilScenario {
    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.layers.len() != SCENARIO_LAYER_COUNT {
            return Some(format!(
                "soil scenario '{}' must have exactly 2 layers (Slope Material and Foundation Material), found {}",
                self.name,
                self.layers.len()
            ));
        }
        for layer in &self.layers {
            if let Some(msg) = layer.validate() {
                return Some(format!("soil scenario '{}': {}", self.name, msg));
            }
        }
        None // all good
    }
}

/// Holds all parameters of a screening project
///
/// Each `Vec` is a sweep axis; the sweeps expand them into the cartesian product of configurations.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProjectParameters {
    pub project_name: String,

    #[serde(default)]
    pub description: String,

    /// Slope angles (degrees)
    pub slope_angles: Vec<f64>,

    /// Slope heights (ft)
    pub slope_heights: Vec<f64>,

    /// Groundwater depths as fractions of the slope height
    pub groundwater_ratios: Vec<f64>,

    pub soil_scenarios: Vec<SoilScenario>,

    /// Outside diameters (in)
    pub pipe_outside_diameters: Vec<f64>,

    /// Wall thicknesses (in)
    pub pipe_wall_thicknesses: Vec<f64>,

    pub pipe_grades: Vec<String>,

    /// Depths of cover (ft)
    pub pipe_depths_of_cover: Vec<f64>,

    /// Lengths in the displacement zone (ft)
    pub pipe_lengths_in_pgd: Vec<f64>,

    pub pipe_coatings: Vec<String>,

    /// Internal pressures (psi)
    pub internal_pressures: Vec<f64>,

    pub pgd_directions: Vec<Direction>,

    /// Maximum number of slope configurations (keeps the first ones)
    #[serde(default)]
    pub slope_cap: Option<usize>,

    /// Maximum number of pipeline configurations (keeps the first ones)
    #[serde(default)]
    pub pipe_cap: Option<usize>,

    /// Overrides the built-in grade → SMYS table
    #[serde(default)]
    pub grade_smys: Option<GradeTable>,

    /// Overrides the built-in coating → roughness table
    #[serde(default)]
    pub coating_roughness: Option<CoatingTable>,

    /// Seed of the placeholder stability solver
    #[serde(default)]
    pub seed: u64,
}

impl ProjectParameters {
    /// Allocates the default project
    pub fn new() -> Self {
        ProjectParameters {
            project_name: "PGD Default Analysis".to_string(),
            description: "Standard parametric slope stability analysis".to_string(),
            slope_angles: vec![15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0],
            slope_heights: vec![20.0, 30.0, 40.0, 50.0, 60.0, 80.0, 100.0],
            groundwater_ratios: vec![0.5, 0.7, 0.9],
            soil_scenarios: vec![
                SampleParams::soil_scenario_weak(),
                SampleParams::soil_scenario_medium(),
                SampleParams::soil_scenario_strong(),
            ],
            pipe_outside_diameters: vec![16.0, 20.0, 24.0, 30.0, 36.0],
            pipe_wall_thicknesses: vec![0.375, 0.5, 0.625, 0.75],
            pipe_grades: ["X-52", "X-60", "X-65", "X-70"].iter().map(|s| s.to_string()).collect(),
            pipe_depths_of_cover: vec![4.0, 6.0, 8.0, 10.0, 12.0, 15.0],
            pipe_lengths_in_pgd: vec![5.0, 10.0, 15.0, 20.0, 30.0, 50.0],
            pipe_coatings: ["FBE", "3LPE", "Concrete", "Tape"].iter().map(|s| s.to_string()).collect(),
            internal_pressures: vec![1000.0, 1200.0, 1440.0, 1600.0],
            pgd_directions: vec![Direction::Perpendicular, Direction::Parallel],
            slope_cap: None,
            pipe_cap: None,
            grade_smys: None,
            coating_roughness: None,
            seed: 42,
        }
    }

    /// Returns the grade → SMYS table (the override or the built-in one)
    pub fn grade_table(&self) -> GradeTable {
        self.grade_smys.clone().unwrap_or_default()
    }

    /// Returns the coating → roughness table (the override or the built-in one)
    pub fn coating_table(&self) -> CoatingTable {
        self.coating_roughness.clone().unwrap_or_default()
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        let sizes = [
            ("slope_angles", self.slope_angles.len()),
            ("slope_heights", self.slope_heights.len()),
            ("groundwater_ratios", self.groundwater_ratios.len()),
            ("soil_scenarios", self.soil_scenarios.len()),
            ("pipe_outside_diameters", self.pipe_outside_diameters.len()),
            ("pipe_wall_thicknesses", self.pipe_wall_thicknesses.len()),
            ("pipe_grades", self.pipe_grades.len()),
            ("pipe_depths_of_cover", self.pipe_depths_of_cover.len()),
            ("pipe_lengths_in_pgd", self.pipe_lengths_in_pgd.len()),
            ("pipe_coatings", self.pipe_coatings.len()),
            ("internal_pressures", self.internal_pressures.len()),
            ("pgd_directions", self.pgd_directions.len()),
        ];
        for (name, size) in sizes {
            if size == 0 {
                return Some(format!("{} must not be empty", name));
            }
        }
        for angle in &self.slope_angles {
            if !(*angle > 0.0 && *angle < 90.0) {
                return Some(format!("slope angle = {:?} is incorrect; it must be 0 < angle < 90", angle));
            }
        }
        let checks: [(&str, &Vec<f64>, bool); 7] = [
            ("slope height", &self.slope_heights, false),
            ("groundwater ratio", &self.groundwater_ratios, true),
            ("pipe outside diameter", &self.pipe_outside_diameters, false),
            ("pipe wall thickness", &self.pipe_wall_thicknesses, false),
            ("depth of cover", &self.pipe_depths_of_cover, true),
            ("length in PGD zone", &self.pipe_lengths_in_pgd, false),
            ("internal pressure", &self.internal_pressures, true),
        ];
        for (name, values, zero_ok) in checks {
            for value in values {
                let ok = value.is_finite() && if zero_ok { *value >= 0.0 } else { *value > 0.0 };
                if !ok {
                    let bound = if zero_ok { "≥ 0" } else { "> 0" };
                    return Some(format!("{} = {:?} is incorrect; it must be {}", name, value, bound));
                }
            }
        }
        for scenario in &self.soil_scenarios {
            if let Some(msg) = scenario.validate() {
                return Some(msg);
            }
        }
        if let Some(table) = &self.grade_smys {
            if let Some(msg) = table.validate() {
                return Some(msg);
            }
        }
        if let Some(table) = &self.coating_roughness {
            if let Some(msg) = table.validate() {
                return Some(msg);
            }
        }
        None // all good
    }

    /// Reads a JSON file containing the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open parameters file")?;
        let buffered = BufReader::new(file);
        let params: ProjectParameters =
            serde_json::from_reader(buffered).map_err(|_| "cannot parse parameters file")?;
        if let Some(msg) = params.validate() {
            log::error!("{}", msg);
            return Err("cannot read parameters because params.validate() failed");
        }
        Ok(params)
    }

    /// Writes a JSON file with the parameters
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
        let mut file = File::create(&path).map_err(|_| "cannot create parameters file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write parameters file")?;
        Ok(())
    }
}

impl Default for ProjectParameters {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
