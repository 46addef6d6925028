use crate::concept::{PolygonConcept, PolygonMutConcept, Winding};
use crate::pose::Pose;


/// Vertices of a closed shape, without a repeated closing vertex.
pub type PosePolygon = Vec<Pose>;


impl PolygonConcept for PosePolygon {
    type Point = Pose;

    type Points<'a> = std::slice::Iter<'a, Pose>;

    fn points(&self) -> Self::Points<'_> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn winding(&self) -> Winding {
        Winding::Unknown
    }
}

impl PolygonMutConcept for PosePolygon {
    fn set_points<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = Pose>,
    {
        self.clear();
        self.extend(points);
        self
    }
}
