use super::{ProjectParameters, SoilScenario};
use crate::base::Direction;
use crate::slope::SlopeConfiguration;
use crate::springs::PipelineConfiguration;
use crate::StrError;

/// Returns the identifier of the i-th configuration of a sweep
pub fn config_id(index: usize) -> String {
    format!("Config_{:04}", index)
}

/// Decomposes a sequence number into the positions along each axis
///
/// The first axis is the outermost one (slowest varying) and the last axis the innermost one.
fn positions(mut index: usize, sizes: &[usize]) -> Vec<usize> {
    let mut pos = vec![0; sizes.len()];
    for (k, size) in sizes.iter().enumerate().rev() {
        pos[k] = index % size;
        index /= size;
    }
    pos
}

/// Returns the product of axis sizes (saturating)
fn product(sizes: &[usize]) -> usize {
    sizes.iter().fold(1_usize, |acc, n| acc.saturating_mul(*n))
}

/// Checks that all values of an axis satisfy a condition
fn check_axis(name: &str, values: &[f64], zero_ok: bool) -> Result<(), StrError> {
    if values.is_empty() {
        log::error!("sweep axis {} is empty", name);
        return Err("sweep axes must not be empty");
    }
    for value in values {
        let ok = value.is_finite() && if zero_ok { *value >= 0.0 } else { *value > 0.0 };
        if !ok {
            log::error!("sweep axis {} has an invalid value {:?}", name, value);
            return Err("sweep axis has an invalid value");
        }
    }
    Ok(())
}

/// Expands the slope axes into slope configurations
///
/// The traversal order is (outermost to innermost): slope angle → slope height → groundwater ratio
/// → soil scenario. Thus, `Config_0000` to `Config_{n-1}` cover all scenarios of the first
/// (angle, height, ratio) triple, and so on.
///
/// # Example
///
/// ```
/// use pgdsim::prelude::*;
///
/// let params = ProjectParameters::new();
/// let sweep = SlopeSweep::new(&params).unwrap();
/// assert_eq!(sweep.total_combinations(), 7 * 7 * 3 * 3);
///
/// let config = sweep.config_at(4).unwrap();
/// assert_eq!(config.config_id, "Config_0004");
/// assert_eq!(config.scenario, "Medium Soil Scenario");
/// assert_eq!(config.groundwater_ratio, 0.7);
/// ```
pub struct SlopeSweep {
    angles: Vec<f64>,
    heights: Vec<f64>,
    ratios: Vec<f64>,
    scenarios: Vec<SoilScenario>,
    cap: Option<usize>,
}

impl SlopeSweep {
    /// Allocates a new instance
    ///
    /// # Errors
    ///
    /// Returns an error if an axis is empty, if a value is out of range, or if a soil scenario
    /// does not have exactly two valid layers. The detailed reason is logged.
    pub fn new(params: &ProjectParameters) -> Result<Self, StrError> {
        for angle in &params.slope_angles {
            if !(*angle > 0.0 && *angle < 90.0) {
                log::error!("slope angle = {:?} is incorrect; it must be 0 < angle < 90", angle);
                return Err("sweep axis has an invalid value");
            }
        }
        check_axis("slope_angles", &params.slope_angles, false)?;
        check_axis("slope_heights", &params.slope_heights, false)?;
        check_axis("groundwater_ratios", &params.groundwater_ratios, true)?;
        if params.soil_scenarios.is_empty() {
            log::error!("sweep axis soil_scenarios is empty");
            return Err("sweep axes must not be empty");
        }
        for scenario in &params.soil_scenarios {
            if let Some(msg) = scenario.validate() {
                log::error!("{}", msg);
                return Err("cannot allocate SlopeSweep because scenario.validate() failed");
            }
        }
        let sweep = SlopeSweep {
            angles: params.slope_angles.clone(),
            heights: params.slope_heights.clone(),
            ratios: params.groundwater_ratios.clone(),
            scenarios: params.soil_scenarios.clone(),
            cap: None,
        }
        .with_cap(params.slope_cap);
        log::info!(
            "slope sweep: {} combinations ({} angles × {} heights × {} groundwater ratios × {} soil scenarios)",
            sweep.total_combinations(),
            sweep.angles.len(),
            sweep.heights.len(),
            sweep.ratios.len(),
            sweep.scenarios.len()
        );
        Ok(sweep)
    }

    /// Limits the number of configurations (keeps the first ones in traversal order)
    pub fn with_cap(mut self, cap: Option<usize>) -> Self {
        self.cap = cap;
        if let Some(n) = cap {
            if n < self.total_combinations() {
                log::info!(
                    "slope sweep capped at {} of {} combinations",
                    n,
                    self.total_combinations()
                );
            }
        }
        self
    }

    fn sizes(&self) -> [usize; 4] {
        [self.angles.len(), self.heights.len(), self.ratios.len(), self.scenarios.len()]
    }

    /// Returns the product of all axis lengths (ignores the cap)
    pub fn total_combinations(&self) -> usize {
        product(&self.sizes())
    }

    /// Returns the number of configurations to be generated (considers the cap)
    pub fn len(&self) -> usize {
        match self.cap {
            Some(n) => usize::min(n, self.total_combinations()),
            None => self.total_combinations(),
        }
    }

    /// Returns true if no configuration will be generated
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the configuration with a given sequence number
    pub fn config_at(&self, index: usize) -> Result<SlopeConfiguration, StrError> {
        if index >= self.len() {
            return Err("configuration index is out of range");
        }
        let p = positions(index, &self.sizes());
        SlopeConfiguration::new(
            &config_id(index),
            self.angles[p[0]],
            self.heights[p[1]],
            self.ratios[p[2]],
            &self.scenarios[p[3]],
        )
    }

    /// Returns an iterator over all configurations
    pub fn iter(&self) -> impl Iterator<Item = Result<SlopeConfiguration, StrError>> + '_ {
        (0..self.len()).map(move |i| self.config_at(i))
    }

    /// Generates all configurations
    pub fn build(&self) -> Result<Vec<SlopeConfiguration>, StrError> {
        self.iter().collect()
    }
}

/// Expands the pipeline axes into pipeline configurations
///
/// The traversal order is (outermost to innermost): outside diameter → wall thickness → grade
/// → depth of cover → length in PGD zone → coating → internal pressure → direction.
///
/// Combinations with a wall thickness not smaller than the outer radius are generated anyway;
/// the stress engine rejects them individually.
pub struct PipelineSweep {
    ods: Vec<f64>,
    wts: Vec<f64>,
    grades: Vec<String>,
    docs: Vec<f64>,
    lengths: Vec<f64>,
    coatings: Vec<String>,
    pressures: Vec<f64>,
    directions: Vec<Direction>,
    cap: Option<usize>,
}

impl PipelineSweep {
    /// Allocates a new instance
    ///
    /// # Errors
    ///
    /// Returns an error if an axis is empty or if a value is out of range. The detailed reason is logged.
    pub fn new(params: &ProjectParameters) -> Result<Self, StrError> {
        check_axis("pipe_outside_diameters", &params.pipe_outside_diameters, false)?;
        check_axis("pipe_wall_thicknesses", &params.pipe_wall_thicknesses, false)?;
        check_axis("pipe_depths_of_cover", &params.pipe_depths_of_cover, true)?;
        check_axis("pipe_lengths_in_pgd", &params.pipe_lengths_in_pgd, false)?;
        check_axis("internal_pressures", &params.internal_pressures, true)?;
        if params.pipe_grades.is_empty() || params.pipe_coatings.is_empty() || params.pgd_directions.is_empty() {
            log::error!("pipe_grades, pipe_coatings, and pgd_directions must not be empty");
            return Err("sweep axes must not be empty");
        }
        let sweep = PipelineSweep {
            ods: params.pipe_outside_diameters.clone(),
            wts: params.pipe_wall_thicknesses.clone(),
            grades: params.pipe_grades.clone(),
            docs: params.pipe_depths_of_cover.clone(),
            lengths: params.pipe_lengths_in_pgd.clone(),
            coatings: params.pipe_coatings.clone(),
            pressures: params.internal_pressures.clone(),
            directions: params.pgd_directions.clone(),
            cap: None,
        }
        .with_cap(params.pipe_cap);
        log::info!("pipeline sweep: {} combinations", sweep.total_combinations());
        Ok(sweep)
    }

    /// Limits the number of configurations (keeps the first ones in traversal order)
    pub fn with_cap(mut self, cap: Option<usize>) -> Self {
        self.cap = cap;
        if let Some(n) = cap {
            if n < self.total_combinations() {
                log::info!(
                    "pipeline sweep capped at {} of {} combinations",
                    n,
                    self.total_combinations()
                );
            }
        }
        self
    }

    fn sizes(&self) -> [usize; 8] {
        [
            self.ods.len(),
            self.wts.len(),
            self.grades.len(),
            self.docs.len(),
            self.lengths.len(),
            self.coatings.len(),
            self.pressures.len(),
            self.directions.len(),
        ]
    }

    /// Returns the product of all axis lengths (ignores the cap)
    pub fn total_combinations(&self) -> usize {
        product(&self.sizes())
    }

    /// Returns the number of configurations to be generated (considers the cap)
    pub fn len(&self) -> usize {
        match self.cap {
            Some(n) => usize::min(n, self.total_combinations()),
            None => self.total_combinations(),
        }
    }

    /// Returns true if no configuration will be generated
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the configuration with a given sequence number
    pub fn config_at(&self, index: usize) -> Result<PipelineConfiguration, StrError> {
        if index >= self.len() {
            return Err("configuration index is out of range");
        }
        let p = positions(index, &self.sizes());
        Ok(PipelineConfiguration {
            config_id: config_id(index),
            pipe_od: self.ods[p[0]],
            pipe_wt: self.wts[p[1]],
            grade: self.grades[p[2]].clone(),
            depth_of_cover: self.docs[p[3]],
            length_in_pgd: self.lengths[p[4]],
            coating: self.coatings[p[5]].clone(),
            internal_pressure: self.pressures[p[6]],
            direction: self.directions[p[7]],
        })
    }

    /// Returns an iterator over all configurations
    pub fn iter(&self) -> impl Iterator<Item = Result<PipelineConfiguration, StrError>> + '_ {
        (0..self.len()).map(move |i| self.config_at(i))
    }

    /// Generates all configurations
    pub fn build(&self) -> Result<Vec<PipelineConfiguration>, StrError> {
        self.iter().collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
