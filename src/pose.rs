use serde::Deserialize;

use crate::concept::{Axis, Coordinate, PointConcept, PointMutConcept};
use crate::orientation::OrientedPoint;


/// A planar position with a heading attached.
///
/// Only `x` and `y` take part in geometry, `theta` rides along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub theta: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// A pose with no heading information, `theta` is 0.
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub fn same_position(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl From<(f64, f64, f64)> for Pose {
    fn from((x, y, theta): (f64, f64, f64)) -> Self {
        Self::new(x, y, theta)
    }
}


impl PointConcept for Pose {
    fn get(&self, axis: Axis) -> Coordinate {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl PointMutConcept for Pose {
    fn set(&mut self, axis: Axis, value: Coordinate) {
        *self = match axis {
            Axis::Horizontal => Pose::new(value, self.y, self.theta),
            Axis::Vertical => Pose::new(self.x, value, self.theta),
        };
    }

    fn construct(x: Coordinate, y: Coordinate) -> Self {
        Pose::at(x, y)
    }
}

impl OrientedPoint for Pose {
    fn orientation(&self) -> f64 {
        self.theta
    }

    fn set_orientation(&mut self, theta: f64) {
        self.theta = theta;
    }
}
