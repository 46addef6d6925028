use std::collections::VecDeque;

use anyhow::Result;
use log::debug;

use crate::concept::{PolygonSetConcept, PolygonSetMutConcept};
use crate::engine::PolygonSetData;
use crate::orientation::{OrientationIndex, OrientationPolicy};
use crate::polygon::PosePolygon;


/// Polygons in insertion order. Duplicates and overlaps are allowed.
pub type PosePolygonSet = VecDeque<PosePolygon>;


impl PolygonSetConcept for PosePolygonSet {
    type Polygon = PosePolygon;

    type Polygons<'a> = std::collections::vec_deque::Iter<'a, PosePolygon>;

    fn polygons(&self) -> Self::Polygons<'_> {
        self.iter()
    }

    fn clean(&self) -> bool {
        false
    }

    fn sorted(&self) -> bool {
        false
    }
}

impl PolygonSetMutConcept for PosePolygonSet {
    fn set<I>(&mut self, polygons: I) -> Result<()>
    where
        I: IntoIterator<Item = PosePolygon>,
    {
        assign(self, polygons, &OrientationPolicy::default())
    }
}


/// Replace `target` with the normalized form of `polygons`.
///
/// Headings of input vertices that survive normalization are kept, new
/// vertices are given headings according to `policy`. On error `target` is
/// left empty.
pub fn assign<I>(target: &mut PosePolygonSet, polygons: I, policy: &OrientationPolicy) -> Result<()>
where
    I: IntoIterator<Item = PosePolygon>,
{
    let polygons: Vec<PosePolygon> = polygons.into_iter().collect();

    target.clear();

    let mut data = PolygonSetData::new();
    data.extend(&polygons)?;

    let index = OrientationIndex::from_polygons(&polygons);
    let rebuilt: Vec<PosePolygon> = index.rebuild(&data, policy)?;

    debug!("Normalized {} polygon(s) into {}", polygons.len(), rebuilt.len());

    target.extend(rebuilt);
    Ok(())
}


#[cfg(test)]
mod tests {
    use anyhow::{ensure, Result};

    use crate::concept::PolygonConcept;
    use crate::Pose;

    use super::*;

    fn square(x: f64, y: f64, side: f64, theta: f64) -> PosePolygon {
        vec![
            Pose::new(x, y, theta),
            Pose::new(x + side, y, theta + 0.1),
            Pose::new(x + side, y + side, theta + 0.2),
            Pose::new(x, y + side, theta + 0.3),
        ]
    }

    fn find(set: &PosePolygonSet, x: f64, y: f64) -> Option<Pose> {
        set.polygons().flatten().copied().find(|p| p.same_position(&Pose::at(x, y)))
    }

    #[test]
    fn never_reports_normalized() -> Result<()> {
        let mut set = PosePolygonSet::new();
        ensure!(!set.clean() && !set.sorted());

        set.set([square(0.0, 0.0, 1.0, 0.0)])?;
        ensure!(!set.clean() && !set.sorted());

        set.push_back(square(0.0, 0.0, 1.0, 0.0));
        ensure!(!set.clean() && !set.sorted());

        Ok(())
    }

    #[test]
    fn traversal_keeps_insertion_order() {
        let a = square(0.0, 0.0, 1.0, 0.0);
        let b = square(0.0, 0.0, 1.0, 0.0);
        let c = square(5.0, 0.0, 1.0, 0.0);
        let set: PosePolygonSet = [a.clone(), b.clone(), c.clone()].into();

        let seen: Vec<&PosePolygon> = set.polygons().collect();
        assert_eq!(seen, vec![&a, &b, &c]);
        assert_eq!(set.polygons().count(), 3);
    }

    #[test]
    fn set_keeps_the_normalized_input() -> Result<()> {
        let mut set = PosePolygonSet::new();
        set.set([square(0.0, 0.0, 2.0, 1.0), square(1.0, 1.0, 2.0, 2.0)])?;

        ensure!(set.len() == 1, "expected one merged polygon, got {set:?}");
        ensure!(set[0].size() == 8, "got {:?}", set[0]);
        ensure!((PolygonSetData::from_set(&set)?.area() - 7.0).abs() < 1e-9);

        let expected = [
            (0.0, 0.0, 1.0),
            (2.0, 0.0, 1.1),
            (2.0, 1.0, 0.0),
            (3.0, 1.0, 2.1),
            (3.0, 3.0, 2.2),
            (1.0, 3.0, 2.3),
            (1.0, 2.0, 0.0),
            (0.0, 2.0, 1.3),
        ];

        for (x, y, theta) in expected {
            let p = find(&set, x, y).ok_or_else(|| anyhow::anyhow!("({x}, {y}) is missing"))?;
            ensure!((p.theta - theta).abs() < 1e-12, "({x}, {y}) has heading {}, expected {theta}", p.theta);
        }

        Ok(())
    }

    #[test]
    fn set_replaces_previous_content() -> Result<()> {
        let mut set: PosePolygonSet = [square(10.0, 10.0, 1.0, 0.0)].into();
        set.set([square(0.0, 0.0, 1.0, 0.0), square(3.0, 0.0, 1.0, 0.0)])?;

        ensure!(set.len() == 2);
        ensure!(find(&set, 10.0, 10.0).is_none());

        set.set(std::iter::empty())?;
        ensure!(set.is_empty());

        Ok(())
    }

    #[test]
    fn set_returns_input_vertices_exactly() -> Result<()> {
        for scale in [1e-3, 1.0, 10.0, 1e6, 1e30] {
            let triangle = vec![
                Pose::new(0.1 * scale, 0.1 * scale, 1.0),
                Pose::new(3.7 * scale, 0.3 * scale, 2.0),
                Pose::new(2.9 * scale, 4.13 * scale, 3.0),
            ];

            let mut set = PosePolygonSet::new();
            set.set([triangle.clone()])?;

            ensure!(set.len() == 1 && set[0].size() == 3, "scale {scale}: got {set:?}");
            for pose in &triangle {
                ensure!(set[0].contains(pose), "scale {scale}: {pose:?} did not come back, got {:?}", set[0]);
            }
        }

        Ok(())
    }

    #[test]
    fn set_joins_enclosed_holes() -> Result<()> {
        let rect = |x0: f64, y0: f64, x1: f64, y1: f64, theta: f64| {
            vec![Pose::new(x0, y0, theta), Pose::new(x1, y0, theta), Pose::new(x1, y1, theta), Pose::new(x0, y1, theta)]
        };
        let frame = [
            rect(0.0, 0.0, 3.0, 1.0, 1.0),
            rect(0.0, 2.0, 3.0, 3.0, 2.0),
            rect(0.0, 0.0, 1.0, 3.0, 3.0),
            rect(2.0, 0.0, 3.0, 3.0, 4.0),
        ];

        let mut set: PosePolygonSet = [square(10.0, 10.0, 1.0, 0.0)].into();
        set.set(frame)?;

        ensure!(set.len() == 1, "got {set:?}");
        ensure!(set[0].size() == 10, "got {:?}", set[0]);
        ensure!((PolygonSetData::from_set(&set)?.area() - 8.0).abs() < 1e-9);

        ensure!(find(&set, 0.0, 0.0).map(|p| p.theta) == Some(1.0));
        ensure!(find(&set, 3.0, 3.0).map(|p| p.theta) == Some(2.0));
        ensure!(find(&set, 1.0, 1.0).map(|p| p.theta) == Some(0.0));

        Ok(())
    }

    #[test]
    fn set_reports_what_it_can_not_represent() {
        let broken = vec![Pose::at(0.0, 0.0), Pose::at(f64::NAN, 0.0), Pose::at(1.0, 1.0)];

        let mut set: PosePolygonSet = [square(10.0, 10.0, 1.0, 0.0)].into();
        assert!(set.set([square(0.0, 0.0, 1.0, 0.0), broken]).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn assign_rejects_negative_tolerance() {
        let policy = OrientationPolicy {
            tolerance: -0.5,
            ..OrientationPolicy::default()
        };

        let mut set = PosePolygonSet::new();
        assert!(assign(&mut set, [square(0.0, 0.0, 1.0, 0.0)], &policy).is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn assign_uses_the_given_policy() -> Result<()> {
        let policy = OrientationPolicy {
            synthesized_theta: 9.0,
            ..OrientationPolicy::default()
        };

        let mut set = PosePolygonSet::new();
        assign(&mut set, [square(0.0, 0.0, 2.0, 1.0), square(1.0, 1.0, 2.0, 2.0)], &policy)?;

        ensure!(find(&set, 2.0, 1.0).map(|p| p.theta) == Some(9.0));
        ensure!(find(&set, 0.0, 0.0).map(|p| p.theta) == Some(1.0));

        Ok(())
    }
}
