use approx::assert_relative_eq;
use pgdsim::prelude::*;
use pgdsim::StrError;

// Soil springs for the 16 in X-42 regression baseline
//
// TEST GOAL
//
// This test verifies the closed-form soil-springs calculation against reference values
// computed independently, and checks the properties expected of the stress engine.
//
// CONFIGURATION AND PARAMETERS
//
// Pipe: OD = 16 in, WT = 0.375 in, grade X-42 (SMYS = 42,000 psi)
// Installation: DOC = 10 ft, length in PGD zone = 10 ft, p = 1500 psi
// Soil: φ = 30°, c = 100 psf, γ = 125 pcf
//
// REFERENCE VALUES
//
// Parallel:      F = 3253.382 lb/ft,  σa = 1767.396 psi, L_allow = 84.814 ft
// Perpendicular: F = 26200.00 lb/ft,  σa = 14233.12 psi, L_allow = 10.532 ft

fn engine() -> Result<SoilSprings, StrError> {
    SoilSprings::new(GradeTable::new(), CoatingTable::new())
}

#[test]
fn test_soil_springs_reference() -> Result<(), StrError> {
    let springs = engine()?;
    let soil = SampleParams::soil_reference();

    // parallel
    let pipe = SampleParams::pipeline_reference(Direction::Parallel);
    let res = springs.compute_soil_springs(&pipe, &soil)?;
    assert_relative_eq!(res.longitudinal_force, 3253.3824016536146, max_relative = 1e-12);
    assert_relative_eq!(res.axial_stress, 1767.3963212504912, max_relative = 1e-12);
    assert_relative_eq!(res.remaining_allowable_stress, 13222.60367874951, max_relative = 1e-12);
    assert_relative_eq!(res.allowable_length, 84.8140273902691, max_relative = 1e-12);
    assert!(!res.exceeds_allowable);

    // perpendicular
    let pipe = SampleParams::pipeline_reference(Direction::Perpendicular);
    let res = springs.compute_soil_springs(&pipe, &soil)?;
    assert_relative_eq!(res.longitudinal_force, 26199.999999999985, max_relative = 1e-12);
    assert_relative_eq!(res.axial_stress, 14233.120457412799, max_relative = 1e-12);
    assert_relative_eq!(res.remaining_allowable_stress, 756.8795425872013, max_relative = 1e-9);
    assert_relative_eq!(res.allowable_length, 10.531773439880508, max_relative = 1e-12);
    assert!(!res.exceeds_allowable);
    Ok(())
}

#[test]
fn test_soil_springs_properties() -> Result<(), StrError> {
    let springs = engine()?;
    let soil = SampleParams::soil_reference();

    // identical inputs give bit-identical outputs
    let pipe = SampleParams::pipeline_reference(Direction::Parallel);
    assert_eq!(
        springs.compute_soil_springs(&pipe, &soil)?,
        springs.compute_soil_springs(&pipe, &soil)?
    );

    // the two branches differ whenever c > 0 or φ > 0
    for (phi, c) in [(30.0, 0.0), (0.0, 100.0), (20.0, 250.0)] {
        let mut s = soil.clone();
        s.friction_angle = phi;
        s.cohesion = c;
        let par = springs.compute_soil_springs(&SampleParams::pipeline_reference(Direction::Parallel), &s)?;
        let per = springs.compute_soil_springs(&SampleParams::pipeline_reference(Direction::Perpendicular), &s)?;
        assert_ne!(par.longitudinal_force, per.longitudinal_force);
    }

    // axial stress is non-decreasing with the length in the PGD zone
    for direction in [Direction::Parallel, Direction::Perpendicular] {
        let mut pipe = SampleParams::pipeline_reference(direction);
        let mut previous = 0.0;
        for length in [1.0, 5.0, 10.0, 20.0, 50.0, 100.0] {
            pipe.length_in_pgd = length;
            let res = springs.compute_soil_springs(&pipe, &soil)?;
            assert!(res.axial_stress >= previous);
            previous = res.axial_stress;
        }
    }

    // remaining allowable stress is non-increasing with the internal pressure
    let mut pipe = SampleParams::pipeline_reference(Direction::Parallel);
    let mut previous = f64::MAX;
    for pressure in [0.0, 500.0, 1000.0, 1500.0, 2000.0, 3000.0] {
        pipe.internal_pressure = pressure;
        let res = springs.compute_soil_springs(&pipe, &soil)?;
        assert!(res.remaining_allowable_stress <= previous);
        previous = res.remaining_allowable_stress;
    }

    // the exceedance flag agrees with its defining inequality
    let params = ProjectParameters::new();
    let pipes = PipelineSweep::new(&params)?.with_cap(Some(400)).build()?;
    for pipe in &pipes {
        let res = springs.compute_soil_springs(pipe, &soil)?;
        let total = res.axial_stress + 0.5 * res.hoop_stress;
        assert_eq!(res.exceeds_allowable, total > res.allowable_stress);
        assert!(res.remaining_allowable_stress >= 0.0);
    }
    Ok(())
}
