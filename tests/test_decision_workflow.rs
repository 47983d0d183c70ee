use pgdsim::prelude::*;
use pgdsim::StrError;

// Complete screening workflow with the placeholder and tabulated solvers
//
// TEST GOAL
//
// This test verifies the one-way data flow: sweep → slope screening → soil layer at the pipe
// depth → soil springs → ranked decision matrix → JSON report.
//
// CONFIGURATION AND PARAMETERS
//
// Default project with 30 slope configurations and 8 pipeline configurations

#[test]
fn test_decision_workflow() -> Result<(), StrError> {
    // sweeps
    let mut params = ProjectParameters::new();
    params.slope_cap = Some(30);
    params.pipe_cap = Some(8);
    let slope_configs = SlopeSweep::new(&params)?.build()?;
    let pipe_configs = PipelineSweep::new(&params)?.build()?;
    assert_eq!(slope_configs.len(), 30);
    assert_eq!(pipe_configs.len(), 8);

    // screening (reproducible)
    let solver = MockSolver::new(params.seed);
    let screening = screen(&solver, &slope_configs)?;
    assert_eq!(screening, screen(&solver, &slope_configs)?);
    assert_eq!(screening.results.len(), 30);
    for res in &screening.results {
        let (detailed, priority) = classify(res.total_stress_fos, res.effective_stress_fos)?;
        assert_eq!(res.requires_detailed_analysis, detailed);
        assert_eq!(res.priority, priority);
    }

    // aggregation
    let springs = SoilSprings::new(params.grade_table(), params.coating_table())?;
    let aggregation = Aggregator::new(&springs).aggregate(&screening.results, &slope_configs, &pipe_configs)?;
    let nflagged = screening.flagged().count();
    assert_eq!(aggregation.results.len() + aggregation.skipped.len(), nflagged * 8);
    for pair in aggregation.results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.priority_level <= b.priority_level);
        if a.priority_level == b.priority_level {
            assert!(a.slope_fos <= b.slope_fos);
        }
    }
    for row in &aggregation.results {
        assert!(row.slope_fos < 2.0);
        if row.slope_fos < 1.0 || row.exceeds_allowable {
            assert_eq!(row.priority_level, Priority::Critical);
        }
        assert!(row.row_id.starts_with(&row.config_id));
    }

    // report
    let report = DecisionReport::new(&params, solver.name(), &screening, &aggregation);
    assert_eq!(report.summary.total_slope_configs, 30);
    assert_eq!(report.summary.requiring_detailed_analysis, nflagged);
    assert_eq!(report.summary.integrated_rows, aggregation.results.len());
    assert_eq!(report.summary.integrated_priorities.total(), aggregation.results.len());
    assert!(report.summary.top_critical.len() <= 5);
    let path = DecisionReport::path(DEFAULT_TEST_DIR, "test_decision_workflow");
    report.write_json(&path)?;
    let read = DecisionReport::read_json(&path)?;
    assert_eq!(read.integrated_results.len(), report.integrated_results.len());
    Ok(())
}

#[test]
fn test_decision_workflow_tabulated() -> Result<(), StrError> {
    let mut params = ProjectParameters::new();
    params.slope_cap = Some(4);
    params.pipe_cap = Some(2);
    let slope_configs = SlopeSweep::new(&params)?.build()?;
    let pipe_configs = PipelineSweep::new(&params)?.build()?;

    // FoS from an external run; Config_0002 is missing
    let mut solver = TabulatedSolver::new();
    solver
        .insert("Config_0000", 0.95, 1.10)
        .insert("Config_0001", 2.40, 2.20)
        .insert("Config_0003", 1.60, 1.30);
    let screening = screen(&solver, &slope_configs)?;
    assert_eq!(screening.results.len(), 3);
    assert_eq!(screening.unavailable.len(), 1);
    assert_eq!(screening.unavailable[0].config_id, "Config_0002");

    let springs = SoilSprings::new(params.grade_table(), params.coating_table())?;
    let aggregation = Aggregator::new(&springs).aggregate(&screening.results, &slope_configs, &pipe_configs)?;
    assert_eq!(aggregation.results.len(), 4);
    assert_eq!(aggregation.results[0].config_id, "Config_0000");
    assert_eq!(aggregation.results[0].priority_level, Priority::Critical);
    assert_eq!(
        aggregation.results[0].recommendation.message(),
        "CRITICAL: Immediate detailed analysis required - Slope unstable"
    );

    let summary = DecisionSummary::new(&screening, &aggregation);
    assert_eq!(summary.total_slope_configs, 4);
    assert_eq!(summary.unavailable.len(), 1);
    assert_eq!(summary.min_fos, Some(0.95));
    assert_eq!(summary.max_fos, Some(2.2));
    Ok(())
}
