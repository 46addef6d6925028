pub mod concept;
pub mod config;
pub mod engine;
pub mod ops;
pub mod orientation;
pub mod output;
pub mod polygon;
pub mod polygon_set;
pub mod pose;

#[cfg(test)]
mod tests;

pub use concept::{Axis, Coordinate, PointConcept, PointMutConcept, PolygonConcept, PolygonMutConcept, PolygonSetConcept, PolygonSetMutConcept, Winding};
pub use config::EngineConfig;
pub use engine::PolygonSetData;
pub use orientation::{OrientationIndex, OrientationPolicy, OrientedPoint};
pub use polygon::PosePolygon;
pub use polygon_set::PosePolygonSet;
pub use pose::Pose;
