use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::{error, info};
use posegon::{config::RunConfig, ops::run_job, output::make_svg, PolygonSetData};


#[derive(Parser)]
pub struct Args {
    /// Path to the run config.
    pub config: PathBuf,
}


fn main() {
    if let Err(_) = std::env::var("RUST_LOG") {
        unsafe { std::env::set_var("RUST_LOG", "info") };
    }

    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err:#}");
        std::process::exit(1);
    }
}


fn run(args: Args) -> Result<()> {
    let config = RunConfig::load(&args.config)?;

    if !config.outdir.exists() {
        std::fs::create_dir_all(&config.outdir)?;
    }
    ensure!(config.outdir.is_dir(), "{:?} should be a directory", config.outdir);

    let name = config.name;
    let engine = config.engine;

    let mut results = Vec::with_capacity(config.jobs.len());

    for (i, job) in config.jobs.into_iter().enumerate() {
        let kind = format!("{:?}", job.kind);
        let result = run_job(job, &engine).with_context(|| format!("Job {i:02} ({kind}) failed"))?;

        let area = PolygonSetData::from_set(&result)?.area();
        info!("Job {i:02} - {kind}: {} polygon(s), area {area:.3}", result.len());

        results.push(result);
    }

    let document = make_svg(&results);
    let output_path = config.outdir.join(format!("{name}.svg"));
    svg::save(&output_path, &document)?;

    info!("Produced the overview SVG at {output_path:?}");

    Ok(())
}
