mod keyhole;
mod operators;

use anyhow::{anyhow, ensure, Result};
use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use geo_offset::Offset;
use log::debug;

use crate::concept::{PointConcept, PointMutConcept, PolygonConcept, PolygonMutConcept, PolygonSetConcept};


fn to_ring<P: PolygonConcept>(polygon: &P) -> Result<LineString> {
    let mut coords = Vec::with_capacity(polygon.size());

    for point in polygon.points() {
        let (x, y) = point.x_y();
        ensure!(x.is_finite() && y.is_finite(), "Vertex ({x}, {y}) has a non-finite coordinate");
        coords.push(Coord { x, y });
    }

    Ok(LineString::new(coords))
}


/// Normalized polygon set as the engine sees it: the union of everything inserted.
#[derive(Clone, Debug)]
pub struct PolygonSetData {
    shape: MultiPolygon,
}

impl Default for PolygonSetData {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonSetData {
    pub fn new() -> Self {
        Self {
            shape: MultiPolygon::new(vec![]),
        }
    }

    pub fn from_set<S: PolygonSetConcept>(set: &S) -> Result<Self> {
        let mut data = Self::new();
        data.extend(set.polygons())?;
        Ok(data)
    }

    fn to_polygon<P: PolygonConcept>(polygon: &P) -> Result<Option<Polygon>> {
        let ring = to_ring(polygon)?;

        let mut distinct = ring.0.clone();
        distinct.dedup();
        if distinct.len() > 1 && distinct.first() == distinct.last() {
            distinct.pop();
        }

        if distinct.len() < 3 {
            debug!("Dropping a polygon with {} distinct vertices", distinct.len());
            return Ok(None);
        }

        Ok(Some(Polygon::new(ring, vec![])))
    }

    pub fn insert<P: PolygonConcept>(&mut self, polygon: &P) -> Result<()> {
        if let Some(polygon) = Self::to_polygon(polygon)? {
            self.shape = self.shape.union(&polygon);
        }
        Ok(())
    }

    /// Insert all of `polygons`, merging them pairwise so each vertex goes
    /// through only a few engine passes.
    pub fn extend<'a, P>(&mut self, polygons: impl IntoIterator<Item = &'a P>) -> Result<()>
    where
        P: PolygonConcept + 'a,
    {
        let mut parts = vec![];
        for polygon in polygons {
            if let Some(polygon) = Self::to_polygon(polygon)? {
                parts.push(MultiPolygon::new(vec![polygon]));
            }
        }

        while parts.len() > 1 {
            parts = parts.chunks(2)
                .map(|pair| pair[1..].iter().fold(pair[0].clone(), |merged, part| merged.union(part)))
                .collect();
        }

        if let Some(merged) = parts.pop() {
            self.shape = self.shape.union(&merged);
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.shape.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.0.is_empty()
    }

    pub fn area(&self) -> f64 {
        self.shape.unsigned_area()
    }

    pub fn union(&self, other: &Self) -> Self {
        Self { shape: self.shape.union(&other.shape) }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self { shape: self.shape.intersection(&other.shape) }
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self { shape: self.shape.difference(&other.shape) }
    }

    pub fn xor(&self, other: &Self) -> Self {
        Self { shape: self.shape.xor(&other.shape) }
    }

    /// Grow every polygon by `distance`, rounding corners with arcs made of
    /// segments no longer than `resolution`.
    pub fn offset(&self, distance: f64, resolution: f64) -> Result<Self> {
        ensure!(distance >= 0.0, "Offset distance must not be negative, got {distance}");
        ensure!(resolution > 0.0, "Arc resolution must be positive, got {resolution}");

        if distance == 0.0 {
            return Ok(self.clone());
        }

        let arc_resolution = geo_offset::ArcResolution::SegmentLength(resolution);

        let mut grown = Self::new();
        for polygon in &self.shape {
            let parts = polygon.offset_with_arc_resolution(distance, arc_resolution)
                .map_err(|err| anyhow!("Could not offset a polygon by {distance}: {err:?}"))?;

            for part in parts {
                grown.shape = grown.shape.union(&part);
            }
        }

        debug!("Offset by {distance}: {} polygon(s) became {}", self.len(), grown.len());

        Ok(grown)
    }

    /// Rebuild the normalized content as user polygons.
    ///
    /// Every vertex comes from [`PointMutConcept::construct`]. Rings are
    /// returned without the repeated closing vertex. Holes are joined to the
    /// outer ring of their polygon through a slit, so each polygon with holes
    /// comes back as a single ring that visits both ends of every slit twice.
    pub fn polygons<P>(&self) -> Result<Vec<P>>
    where
        P: PolygonMutConcept,
        P::Point: PointMutConcept,
    {
        self.shape.iter()
            .map(|polygon| {
                let coords = keyhole::single_ring(polygon)?;

                let holes = polygon.interiors().len();
                if holes > 0 {
                    debug!("Joined {holes} hole(s) into a ring of {} vertices", coords.len());
                }

                let mut out = P::default();
                out.set_points(coords.into_iter().map(|c| <P::Point as PointMutConcept>::construct(c.x, c.y)));
                Ok(out)
            })
            .collect()
    }
}
