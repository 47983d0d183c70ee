use super::PipelineConfiguration;
use crate::base::{
    CoatingTable, Direction, GradeTable, ALLOWABLE_LENGTH_CAP, ALLOWABLE_SMYS_FRACTION, BEARING_CAPACITY_NC,
    HOOP_COMBINATION_FACTOR,
};
use crate::stratigraphy::SoilSpringParameters;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Defines the cohesion (psf) at which the adhesion factor reaches one
pub const ADHESION_REFERENCE_COHESION: f64 = 1000.0;

/// Holds the results of the soil-springs calculation for one pipe and soil
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StressResult {
    /// Displacement direction used in the calculation
    pub direction: Direction,

    /// Soil force per unit length of pipe (lb/ft); longitudinal or lateral depending on the direction
    pub longitudinal_force: f64,

    /// Axial stress (psi) = force × length / wall_area
    pub axial_stress: f64,

    /// Hoop stress (psi) from the thin-wall (Barlow) formula
    pub hoop_stress: f64,

    /// Allowable stress (psi) = 0.72 SMYS
    pub allowable_stress: f64,

    /// Combined stress (psi) = axial + 0.5 hoop
    pub total_applied_stress: f64,

    /// Remaining allowable stress (psi); clamped at zero
    pub remaining_allowable_stress: f64,

    /// Length of pipe (ft) that brings the axial stress to the allowable value
    pub allowable_length: f64,

    /// Indicates that total_applied_stress > allowable_stress
    pub exceeds_allowable: bool,

    /// Steel cross-section area (in²)
    pub wall_area: f64,

    /// Active earth pressure coefficient
    pub ka: f64,

    /// Passive earth pressure coefficient
    pub kp: f64,

    /// Adhesion factor applied to the cohesion (parallel direction)
    pub adhesion_factor: f64,

    /// SMYS (psi) used in the allowable stress
    pub smys: f64,

    /// Grade actually used (notes the fallback for unknown grades)
    pub grade_source: String,

    /// Coating roughness coefficient (reported only)
    pub roughness: f64,

    /// Coating actually used (notes the fallback for unknown coatings)
    pub coating_source: String,
}

/// Returns the active and passive earth pressure coefficients (Rankine)
///
/// ```text
/// Ka = tan²(45° - φ/2)
/// Kp = tan²(45° + φ/2)
/// ```
pub fn earth_pressure_coefficients(friction_angle: f64) -> (f64, f64) {
    let ta = f64::tan((45.0 - friction_angle / 2.0).to_radians());
    let tp = f64::tan((45.0 + friction_angle / 2.0).to_radians());
    (ta * ta, tp * tp)
}

/// Returns the adhesion factor for a given cohesion (psf)
///
/// The factor is one for cohesionless soils; otherwise `min(1, 0.5 (1 + c/1000))`.
pub fn adhesion_factor(cohesion: f64) -> f64 {
    if cohesion == 0.0 {
        1.0
    } else {
        f64::min(1.0, 0.5 * (1.0 + cohesion / ADHESION_REFERENCE_COHESION))
    }
}

/// Implements the closed-form soil-springs stress calculation
pub struct SoilSprings {
    /// Grade → SMYS table
    grades: GradeTable,

    /// Coating → roughness table
    coatings: CoatingTable,
}

impl SoilSprings {
    /// Allocates a new instance
    pub fn new(grades: GradeTable, coatings: CoatingTable) -> Result<Self, StrError> {
        if let Some(msg) = grades.validate() {
            log::error!("{}", msg);
            return Err("cannot allocate SoilSprings because grades.validate() failed");
        }
        if let Some(msg) = coatings.validate() {
            log::error!("{}", msg);
            return Err("cannot allocate SoilSprings because coatings.validate() failed");
        }
        Ok(SoilSprings { grades, coatings })
    }

    /// Returns the grade table
    pub fn grades(&self) -> &GradeTable {
        &self.grades
    }

    /// Returns the coating table
    pub fn coatings(&self) -> &CoatingTable {
        &self.coatings
    }

    /// Computes the soil force and the resulting pipe stresses
    ///
    /// # Notes
    ///
    /// * Parallel: `F = (tan φ γ DOC + α c) π D` with the adhesion factor α
    /// * Perpendicular: `F = 9 c D + ½ γ DOC² Kp D`
    /// * `D` is the outside diameter in feet, so F is given in lb/ft
    /// * The allowable length is capped at 1000 ft when the force is zero
    ///
    /// # Errors
    ///
    /// Structurally invalid pipes (non-positive wall thickness, wall thickness not smaller than the
    /// outer radius, negative pressure, non-finite values) and invalid soil parameters are rejected.
    /// Stress exceedance is reported by [StressResult::exceeds_allowable] and is not an error.
    pub fn compute_soil_springs(
        &self,
        pipe: &PipelineConfiguration,
        soil: &SoilSpringParameters,
    ) -> Result<StressResult, StrError> {
        if let Some(msg) = pipe.validate() {
            log::error!("{}", msg);
            return Err("cannot compute soil springs because pipe.validate() failed");
        }
        check_soil(soil)?;

        // lookups
        let (smys, grade_source) = self.grades.resolve(&pipe.grade)?;
        let (roughness, coating_source) = self.coatings.resolve(&pipe.coating);

        // geometry
        let wall_area = pipe.wall_area();
        let od_ft = pipe.od_ft();
        let (ka, kp) = earth_pressure_coefficients(soil.friction_angle);
        let alpha = adhesion_factor(soil.cohesion);

        // soil force per unit length
        let (phi, c, gamma, doc) = (soil.friction_angle, soil.cohesion, soil.unit_weight, pipe.depth_of_cover);
        let longitudinal_force = match pipe.direction {
            Direction::Parallel => {
                let friction = f64::tan(phi.to_radians());
                let normal_stress = gamma * doc;
                (friction * normal_stress + alpha * c) * PI * od_ft
            }
            Direction::Perpendicular => {
                let cohesion_term = c * od_ft * BEARING_CAPACITY_NC;
                let friction_term = 0.5 * gamma * doc * doc * kp * od_ft;
                cohesion_term + friction_term
            }
        };

        // stresses
        let axial_stress = longitudinal_force * pipe.length_in_pgd / wall_area;
        let hoop_stress = pipe.internal_pressure * pipe.inner_radius() / pipe.pipe_wt;
        let allowable_stress = ALLOWABLE_SMYS_FRACTION * smys;
        let total_applied_stress = axial_stress + HOOP_COMBINATION_FACTOR * hoop_stress;
        let remaining_allowable_stress = f64::max(0.0, allowable_stress - total_applied_stress);
        let allowable_length = if longitudinal_force > 0.0 {
            let max_allowable_axial = allowable_stress - HOOP_COMBINATION_FACTOR * hoop_stress;
            if max_allowable_axial > 0.0 {
                max_allowable_axial * wall_area / longitudinal_force
            } else {
                0.0
            }
        } else {
            ALLOWABLE_LENGTH_CAP
        };

        Ok(StressResult {
            direction: pipe.direction,
            longitudinal_force,
            axial_stress,
            hoop_stress,
            allowable_stress,
            total_applied_stress,
            remaining_allowable_stress,
            allowable_length,
            exceeds_allowable: total_applied_stress > allowable_stress,
            wall_area,
            ka,
            kp,
            adhesion_factor: alpha,
            smys,
            grade_source,
            roughness,
            coating_source,
        })
    }
}

/// Checks the soil parameters
fn check_soil(soil: &SoilSpringParameters) -> Result<(), StrError> {
    if !soil.friction_angle.is_finite() || !soil.cohesion.is_finite() || !soil.unit_weight.is_finite() {
        return Err("soil parameters must be finite");
    }
    if soil.friction_angle < 0.0 || soil.friction_angle >= 90.0 {
        return Err("soil friction angle must satisfy 0 ≤ φ < 90");
    }
    if soil.cohesion < 0.0 || soil.unit_weight < 0.0 {
        return Err("soil cohesion and unit weight must be ≥ 0");
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{adhesion_factor, earth_pressure_coefficients, SoilSprings};
    use crate::base::{CoatingTable, Direction, GradeTable, SampleParams};
    use approx::assert_relative_eq;

    fn springs() -> SoilSprings {
        SoilSprings::new(GradeTable::new(), CoatingTable::new()).unwrap()
    }

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            SoilSprings::new(GradeTable::empty(), CoatingTable::new()).err(),
            Some("cannot allocate SoilSprings because grades.validate() failed")
        );
        assert_eq!(
            SoilSprings::new(GradeTable::new(), CoatingTable::new().with("Glass", 0.0)).err(),
            Some("cannot allocate SoilSprings because coatings.validate() failed")
        );
    }

    #[test]
    fn earth_pressure_coefficients_work() {
        let (ka, kp) = earth_pressure_coefficients(30.0);
        assert_relative_eq!(ka, 1.0 / 3.0, epsilon = 1e-14);
        assert_relative_eq!(kp, 3.0, epsilon = 1e-14);
        let (ka, kp) = earth_pressure_coefficients(0.0);
        assert_relative_eq!(ka, 1.0, epsilon = 1e-15);
        assert_relative_eq!(kp, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn adhesion_factor_works() {
        assert_eq!(adhesion_factor(0.0), 1.0);
        assert_eq!(adhesion_factor(100.0), 0.55);
        assert_eq!(adhesion_factor(500.0), 0.75);
        assert_eq!(adhesion_factor(1000.0), 1.0);
        assert_eq!(adhesion_factor(2500.0), 1.0);
    }

    #[test]
    fn parallel_works() {
        let pipe = SampleParams::pipeline_reference(Direction::Parallel);
        let soil = SampleParams::soil_reference();
        let res = springs().compute_soil_springs(&pipe, &soil).unwrap();
        assert_relative_eq!(res.longitudinal_force, 3253.3824016536146, max_relative = 1e-12);
        assert_relative_eq!(res.axial_stress, 1767.3963212504912, max_relative = 1e-12);
        assert_eq!(res.hoop_stress, 30500.0);
        assert_relative_eq!(res.allowable_stress, 30240.0, max_relative = 1e-15);
        assert_relative_eq!(res.total_applied_stress, 17017.39632125049, max_relative = 1e-12);
        assert_relative_eq!(res.remaining_allowable_stress, 13222.60367874951, max_relative = 1e-12);
        assert_relative_eq!(res.allowable_length, 84.8140273902691, max_relative = 1e-12);
        assert!(!res.exceeds_allowable);
        assert_eq!(res.adhesion_factor, 0.55);
        assert_eq!(res.smys, 42_000.0);
        assert_eq!(res.grade_source, "X-42");
        assert_eq!(res.roughness, 0.6);
        assert_eq!(res.coating_source, "FBE");
    }

    #[test]
    fn perpendicular_works() {
        let pipe = SampleParams::pipeline_reference(Direction::Perpendicular);
        let soil = SampleParams::soil_reference();
        let res = springs().compute_soil_springs(&pipe, &soil).unwrap();
        assert_relative_eq!(res.longitudinal_force, 26200.0, max_relative = 1e-12);
        assert_relative_eq!(res.axial_stress, 14233.120457412799, max_relative = 1e-12);
        assert_relative_eq!(res.remaining_allowable_stress, 756.8795425872013, max_relative = 1e-9);
        assert_relative_eq!(res.allowable_length, 10.531773439880508, max_relative = 1e-12);
        assert!(!res.exceeds_allowable);
    }

    #[test]
    fn zero_force_gives_length_cap() {
        let mut pipe = SampleParams::pipeline_reference(Direction::Parallel);
        pipe.internal_pressure = 0.0;
        let mut soil = SampleParams::soil_reference();
        soil.friction_angle = 0.0;
        soil.cohesion = 0.0;
        let res = springs().compute_soil_springs(&pipe, &soil).unwrap();
        assert_eq!(res.longitudinal_force, 0.0);
        assert_eq!(res.axial_stress, 0.0);
        assert_relative_eq!(res.remaining_allowable_stress, 30240.0, max_relative = 1e-15);
        assert_eq!(res.allowable_length, 1000.0);

        // the perpendicular branch keeps the passive term (Kp = 1)
        pipe.direction = Direction::Perpendicular;
        let res = springs().compute_soil_springs(&pipe, &soil).unwrap();
        assert_relative_eq!(res.longitudinal_force, 8333.33333333333, max_relative = 1e-12);
        assert_relative_eq!(res.axial_stress, 4527.073936836133, max_relative = 1e-12);
        assert_relative_eq!(res.allowable_length, 66.79811379695299, max_relative = 1e-12);
    }

    #[test]
    fn exceedance_is_reported() {
        let mut pipe = SampleParams::pipeline_reference(Direction::Perpendicular);
        pipe.pipe_od = 36.0;
        pipe.pipe_wt = 0.75;
        pipe.grade = "X-52".to_string();
        pipe.depth_of_cover = 15.0;
        pipe.length_in_pgd = 50.0;
        pipe.internal_pressure = 1440.0;
        let mut soil = SampleParams::soil_reference();
        soil.friction_angle = 25.0;
        soil.unit_weight = 120.0;
        let res = springs().compute_soil_springs(&pipe, &soil).unwrap();
        assert_relative_eq!(res.longitudinal_force, 102488.46884593208, max_relative = 1e-12);
        assert_relative_eq!(res.wall_area, 83.05585577928015, max_relative = 1e-12);
        assert_relative_eq!(res.axial_stress, 61698.52076311984, max_relative = 1e-12);
        assert_eq!(res.hoop_stress, 33120.0);
        assert_relative_eq!(res.allowable_stress, 37440.0, max_relative = 1e-15);
        assert_eq!(res.remaining_allowable_stress, 0.0);
        assert_relative_eq!(res.allowable_length, 16.920989143455262, max_relative = 1e-12);
        assert!(res.exceeds_allowable);
    }

    #[test]
    fn unknown_grade_uses_weakest() {
        let mut pipe = SampleParams::pipeline_reference(Direction::Parallel);
        pipe.grade = "X-99".to_string();
        pipe.coating = "Wax".to_string();
        let res = springs().compute_soil_springs(&pipe, &SampleParams::soil_reference()).unwrap();
        assert_eq!(res.smys, 42_000.0);
        assert_eq!(res.grade_source, "X-42 (default for unknown grade 'X-99')");
        assert_eq!(res.coating_source, "default for unknown coating 'Wax'");
    }

    #[test]
    fn compute_soil_springs_handles_wrong_input() {
        let springs = springs();
        let soil = SampleParams::soil_reference();
        let mut pipe = SampleParams::pipeline_reference(Direction::Parallel);
        pipe.pipe_wt = -0.1;
        assert_eq!(
            springs.compute_soil_springs(&pipe, &soil).err(),
            Some("cannot compute soil springs because pipe.validate() failed")
        );
        pipe.pipe_wt = 8.0;
        assert!(springs.compute_soil_springs(&pipe, &soil).is_err());
        pipe.pipe_wt = 0.375;
        pipe.internal_pressure = -10.0;
        assert!(springs.compute_soil_springs(&pipe, &soil).is_err());
        pipe.internal_pressure = 1500.0;
        let mut bad = soil.clone();
        bad.friction_angle = 90.0;
        assert_eq!(
            springs.compute_soil_springs(&pipe, &bad).err(),
            Some("soil friction angle must satisfy 0 ≤ φ < 90")
        );
        bad.friction_angle = f64::NAN;
        assert_eq!(
            springs.compute_soil_springs(&pipe, &bad).err(),
            Some("soil parameters must be finite")
        );
    }
}
