use pgdsim::base::{DEFAULT_OUT_DIR, DEFAULT_PIPELINES_PER_SLOPE};
use pgdsim::prelude::*;
use pgdsim::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pgd_screening",
    about = "Screens slope configurations and computes soil-springs pipe stresses for the flagged slopes"
)]
struct Options {
    /// JSON file with the project parameters (the default project is used if absent)
    #[structopt(long)]
    params: Option<String>,

    /// Output directory (defaults to pgdsim::base::DEFAULT_OUT_DIR)
    #[structopt(long)]
    out_dir: Option<String>,

    /// Filename stem of the report
    #[structopt(long, default_value = "pgd_screening")]
    stem: String,

    /// Seed of the placeholder stability solver
    #[structopt(long)]
    seed: Option<u64>,

    /// Maximum number of slope configurations
    #[structopt(long)]
    slope_cap: Option<usize>,

    /// Maximum number of pipeline configurations
    #[structopt(long)]
    pipe_cap: Option<usize>,

    /// Number of leading pipeline configurations evaluated per flagged slope (default 5)
    #[structopt(long)]
    pipes_per_slope: Option<usize>,

    /// Evaluates the whole pipeline sweep for every flagged slope (ignores --pipes-per-slope)
    #[structopt(long)]
    all_pipes: bool,

    /// JSON file with factors of safety from an external solver run (replaces the placeholder solver)
    #[structopt(long)]
    fos_table: Option<String>,
}

fn main() -> Result<(), StrError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // parse options
    let options = Options::from_args();

    // parameters
    let mut params = match &options.params {
        Some(path) => ProjectParameters::read_json(path)?,
        None => ProjectParameters::new(),
    };
    if let Some(seed) = options.seed {
        params.seed = seed;
    }
    if options.slope_cap.is_some() {
        params.slope_cap = options.slope_cap;
    }
    if options.pipe_cap.is_some() {
        params.pipe_cap = options.pipe_cap;
    }
    if let Some(msg) = params.validate() {
        log::error!("{}", msg);
        return Err("cannot run the screening because params.validate() failed");
    }
    log::info!("project: {}", params.project_name);

    // slope screening
    let slope_configs = SlopeSweep::new(&params)?.build()?;
    let solver: Box<dyn StabilitySolver> = match &options.fos_table {
        Some(path) => Box::new(TabulatedSolver::read_json(path)?),
        None => Box::new(MockSolver::new(params.seed)),
    };
    let screening = screen(solver.as_ref(), &slope_configs)?;

    // soil springs for the flagged slopes
    let pipe_configs = PipelineSweep::new(&params)?.build()?;
    let springs = SoilSprings::new(params.grade_table(), params.coating_table())?;
    let pipes_per_slope = if options.all_pipes {
        None
    } else {
        Some(options.pipes_per_slope.unwrap_or(DEFAULT_PIPELINES_PER_SLOPE))
    };
    let aggregation = Aggregator::new(&springs)
        .with_pipelines_per_slope(pipes_per_slope)
        .aggregate(&screening.results, &slope_configs, &pipe_configs)?;

    // report
    let report = DecisionReport::new(&params, solver.name(), &screening, &aggregation);
    let out_dir = options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR);
    let path = DecisionReport::path(out_dir, &options.stem);
    report.write_json(&path)?;

    // message
    let summary = &report.summary;
    let thin_line = format!("{:─^1$}", "", path.len());
    println!("\n\n{}", thin_line);
    println!(
        "{} of {} slopes require a detailed analysis; {} integrated rows ({} critical)",
        summary.requiring_detailed_analysis,
        summary.total_slope_configs,
        summary.integrated_rows,
        summary.integrated_priorities.critical
    );
    println!("The decision report is:");
    println!("{}", path);
    println!("{}\n\n", thin_line);
    Ok(())
}
