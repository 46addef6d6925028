use anyhow::Result;

pub type Coordinate = f64;


/// Selects one of the two planar axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// The consumer has to work the direction out itself
    Unknown,
}


pub trait PointConcept {
    fn get(&self, axis: Axis) -> Coordinate;

    fn x_y(&self) -> (Coordinate, Coordinate) {
        (self.get(Axis::Horizontal), self.get(Axis::Vertical))
    }
}


pub trait PointMutConcept: PointConcept + Sized {
    /// Replace the coordinate on `axis`, leaving everything else untouched.
    fn set(&mut self, axis: Axis, value: Coordinate);

    /// The only way the engine creates points of its own.
    fn construct(x: Coordinate, y: Coordinate) -> Self;
}


pub trait PolygonConcept {
    type Point: PointConcept;

    type Points<'a>: Iterator<Item = &'a Self::Point> + Clone
    where
        Self: 'a;

    /// Vertices in stored order. Every call starts a new traversal at the first vertex.
    fn points(&self) -> Self::Points<'_>;

    fn size(&self) -> usize;

    fn winding(&self) -> Winding;
}


pub trait PolygonMutConcept: PolygonConcept + Default {
    /// Replace all vertices with the given ones, keeping their order.
    /// An empty input leaves a polygon with no vertices.
    fn set_points<I>(&mut self, points: I) -> &mut Self
    where
        I: IntoIterator<Item = Self::Point>;
}


pub trait PolygonSetConcept {
    type Polygon: PolygonConcept;

    type Polygons<'a>: Iterator<Item = &'a Self::Polygon> + Clone
    where
        Self: 'a;

    fn polygons(&self) -> Self::Polygons<'_>;

    /// Whether the set is known to be free of overlaps and self-intersections.
    fn clean(&self) -> bool;

    /// Whether the polygons are known to be in the engine's canonical order.
    fn sorted(&self) -> bool;
}


pub trait PolygonSetMutConcept: PolygonSetConcept {
    /// Replace the content with the normalized form of `polygons`.
    fn set<I>(&mut self, polygons: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::Polygon>;
}
