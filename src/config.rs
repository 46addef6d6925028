use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{orientation::OrientationPolicy, polygon::PosePolygon};


#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest segment used to approximate arcs when offsetting
    pub resolution: f64,
    pub orientation: OrientationPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resolution: 0.1,
            orientation: OrientationPolicy::default(),
        }
    }
}


#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "op")]
pub enum JobKind {
    Normalize,
    Union,
    Intersection,
    Difference,
    Xor,
    Offset {
        distance: f64,
    },
}

#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub kind: JobKind,
    pub lhs: Vec<PosePolygon>,
    #[serde(default)]
    pub rhs: Vec<PosePolygon>,
}

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    pub name: String,
    pub outdir: PathBuf,
    #[serde(default)]
    pub engine: EngineConfig,
    pub jobs: Vec<JobConfig>,
}

impl RunConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).with_context(|| format!("Could not open {path:?}"))?;
        let config: Self = serde_norway::from_reader(file).with_context(|| format!("Could not parse {path:?}"))?;
        config.engine.orientation.validate().with_context(|| format!("Invalid engine settings in {path:?}"))?;
        Ok(config)
    }
}
