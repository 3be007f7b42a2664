use clap::Parser;
use exact_riemann::{Profile, ProblemConfig};
use log::LevelFilter;
use std::path;

#[derive(Parser)]
#[clap(about = "Sample the exact solution of a Riemann problem on a uniform grid")]
pub struct Cli {
    /// The path to the config file to read (JSON, or YAML for .yml/.yaml files)
    #[clap(parse(from_os_str))]
    pub config: path::PathBuf,
    /// Write the profile here instead of the fileName from the configuration
    #[clap(short, long, parse(from_os_str))]
    pub output: Option<path::PathBuf>,
    /// Log level (error, warn, info, debug, trace); defaults to RUST_LOG or info
    #[clap(long)]
    pub log_level: Option<LevelFilter>,
}

fn init_logging(level: Option<LevelFilter>) {
    let level = level
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // parse command line parameters
    let args = Cli::parse();
    init_logging(args.log_level);

    // read configuration
    let config = ProblemConfig::from_file(&args.config)?;
    let gamma = config.adiabatic_index();
    let (left, right) = config.states()?;

    // solve
    let solution = config.solver().solve(&left, &right, &gamma)?;
    log::info!("f = {}", solution.residual());
    log::info!("pstar = {}", solution.p_star());
    log::info!("vstar = {}", solution.v_star());
    for line in solution.to_string().lines() {
        log::info!("{line}");
    }

    // sample and write output
    let profile = Profile::sample(&solution, config.number, config.time)?;
    let filename = args
        .output
        .unwrap_or_else(|| path::PathBuf::from(&config.file_name));
    profile.save(&filename)?;
    log::info!("output {}", filename.display());

    Ok(())
}
