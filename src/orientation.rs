use std::collections::HashMap;

use anyhow::{ensure, Result};
use log::debug;
use serde::Deserialize;

use crate::concept::{Axis, PointConcept, PointMutConcept, PolygonConcept, PolygonMutConcept, PolygonSetConcept};
use crate::engine::PolygonSetData;


pub trait OrientedPoint: PointMutConcept + Clone {
    fn orientation(&self) -> f64;
    fn set_orientation(&mut self, theta: f64);
}


#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrientationPolicy {
    /// Let result vertices take the position and heading of a coinciding input vertex.
    pub inherit: bool,
    /// Heading for vertices with no input counterpart.
    pub synthesized_theta: f64,
    /// How far apart two vertices may be and still count as coinciding, as a
    /// fraction of the larger side of the input vertices' bounding box.
    pub tolerance: f64,
}

impl Default for OrientationPolicy {
    fn default() -> Self {
        Self {
            inherit: true,
            synthesized_theta: 0.0,
            // the engine rounds onto a grid of about 2^-29 of the extent
            tolerance: 1e-6,
        }
    }
}

impl OrientationPolicy {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.tolerance.is_finite() && self.tolerance >= 0.0,
            "Orientation tolerance must be a finite non-negative number, got {}", self.tolerance
        );
        Ok(())
    }
}


/// Input vertices bucketed into square cells as wide as the match distance.
pub struct AnchorGrid<'a> {
    anchors: &'a [(f64, f64, f64)],
    distance: f64,
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl AnchorGrid<'_> {
    fn cell(&self, x: f64, y: f64) -> (i64, i64) {
        if self.distance > 0.0 {
            ((x / self.distance).floor() as i64, (y / self.distance).floor() as i64)
        } else {
            // exact matching, `+ 0.0` folds -0.0 into 0.0
            ((x + 0.0).to_bits() as i64, (y + 0.0).to_bits() as i64)
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// (x, y, theta) of the first input vertex within the match distance of (x, y).
    pub fn find(&self, x: f64, y: f64) -> Option<(f64, f64, f64)> {
        let (cx, cy) = self.cell(x, y);
        let reach = if self.distance > 0.0 { 1 } else { 0 };
        let distance_sq = self.distance * self.distance;

        let mut first: Option<usize> = None;

        for dx in -reach..=reach {
            for dy in -reach..=reach {
                let Some(bucket) = self.cells.get(&(cx.saturating_add(dx), cy.saturating_add(dy))) else {
                    continue;
                };

                for &i in bucket {
                    let (ax, ay, _) = self.anchors[i];
                    let (ex, ey) = (ax - x, ay - y);
                    if ex * ex + ey * ey <= distance_sq && first.is_none_or(|f| i < f) {
                        first = Some(i);
                    }
                }
            }
        }

        first.map(|i| self.anchors[i])
    }
}


#[derive(Clone, Debug, Default)]
pub struct OrientationIndex {
    /// (x, y, theta) of every input vertex, in input order
    anchors: Vec<(f64, f64, f64)>,
}

impl OrientationIndex {
    pub fn new() -> Self {
        Self { anchors: vec![] }
    }

    pub fn from_polygons<'a, P>(polygons: impl IntoIterator<Item = &'a P>) -> Self
    where
        P: PolygonConcept + 'a,
        P::Point: OrientedPoint,
    {
        let mut index = Self::new();
        for polygon in polygons {
            index.add(polygon);
        }
        index
    }

    pub fn from_sets<S>(sets: &[&S]) -> Self
    where
        S: PolygonSetConcept,
        <S::Polygon as PolygonConcept>::Point: OrientedPoint,
    {
        Self::from_polygons(sets.iter().flat_map(|set| set.polygons()))
    }

    pub fn add<P>(&mut self, polygon: &P)
    where
        P: PolygonConcept,
        P::Point: OrientedPoint,
    {
        self.anchors.extend(polygon.points().map(|p| {
            let (x, y) = p.x_y();
            (x, y, p.orientation())
        }));
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Larger side of the bounding box of all input vertices.
    pub fn extent(&self) -> f64 {
        let Some(&(x0, y0, _)) = self.anchors.first() else {
            return 0.0;
        };

        let (min_x, min_y, max_x, max_y) = self.anchors.iter()
            .fold((x0, y0, x0, y0), |(min_x, min_y, max_x, max_y), &(x, y, _)| {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            });

        (max_x - min_x).max(max_y - min_y)
    }

    pub fn grid(&self, policy: &OrientationPolicy) -> Result<AnchorGrid<'_>> {
        policy.validate()?;

        let mut grid = AnchorGrid {
            anchors: &self.anchors,
            distance: policy.tolerance * self.extent(),
            cells: HashMap::new(),
        };

        for (i, &(x, y, _)) in self.anchors.iter().enumerate() {
            let cell = grid.cell(x, y);
            grid.cells.entry(cell).or_default().push(i);
        }

        Ok(grid)
    }

    /// Give every vertex of `polygons` a heading according to `policy`.
    ///
    /// A vertex that coincides with an input vertex is moved onto it and takes
    /// its heading, so input vertices the engine kept come back unchanged.
    pub fn restore<P>(&self, polygons: &mut [P], policy: &OrientationPolicy) -> Result<()>
    where
        P: PolygonMutConcept,
        P::Point: OrientedPoint,
    {
        let grid = self.grid(policy)?;
        let mut matched = 0;

        for polygon in polygons.iter_mut() {
            let points: Vec<P::Point> = polygon.points()
                .map(|p| {
                    let (x, y) = p.x_y();
                    let mut p = p.clone();

                    let anchor = if policy.inherit { grid.find(x, y) } else { None };
                    match anchor {
                        Some((ax, ay, theta)) => {
                            p.set(Axis::Horizontal, ax);
                            p.set(Axis::Vertical, ay);
                            p.set_orientation(theta);
                            matched += 1;
                        },
                        None => p.set_orientation(policy.synthesized_theta),
                    }

                    p
                })
                .collect();

            polygon.set_points(points);
        }

        debug!("Matched {matched} vertices against {} input vertices within {}", self.len(), grid.distance());

        Ok(())
    }

    /// Rebuild the engine's normalized content and restore headings on it.
    pub fn rebuild<P>(&self, data: &PolygonSetData, policy: &OrientationPolicy) -> Result<Vec<P>>
    where
        P: PolygonMutConcept,
        P::Point: OrientedPoint,
    {
        let mut polygons = data.polygons::<P>()?;
        self.restore(&mut polygons, policy)?;
        Ok(polygons)
    }
}
