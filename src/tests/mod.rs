
use std::path::Path;

use anyhow::{ensure, Result};

use crate::{output::make_svg, Pose, PosePolygon, PosePolygonSet};

pub const OUTDIR: &str = "tmp/test-output/";

fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    ensure!(dir.is_dir(), "{dir:?} should be a directory");
    Ok(())
}

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}

pub fn save(name: &str, sets: &[PosePolygonSet]) -> Result<()> {
    ensure_dir(OUTDIR)?;
    let path = Path::new(OUTDIR).join(name).with_extension("svg");
    svg::save(path, &make_svg(sets))?;
    Ok(())
}

/// Rectangle of a robot standing at `pose`, every corner facing the same way.
pub fn footprint(pose: Pose, half_length: f64, half_width: f64) -> PosePolygon {
    let (sin, cos) = pose.theta.sin_cos();

    [(half_length, -half_width), (half_length, half_width), (-half_length, half_width), (-half_length, -half_width)]
        .into_iter()
        .map(|(dx, dy)| Pose::new(pose.x + cos * dx - sin * dy, pose.y + sin * dx + cos * dy, pose.theta))
        .collect()
}
