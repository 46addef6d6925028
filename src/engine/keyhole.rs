use anyhow::{bail, Result};
use geo::{Coord, Intersects, Line, LineString, Polygon, Winding};


fn open_ring(ring: &LineString) -> Vec<Coord> {
    let mut coords = ring.0.clone();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    coords
}

fn edges(ring: &[Coord]) -> impl Iterator<Item = Line> + '_ {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(&a, &b)| Line::new(a, b))
}

/// Indices into `ring` and `hole` of the shortest slit between them that
/// crosses no edge of `ring`, `hole` or `others`.
fn bridge(ring: &[Coord], hole: &[Coord], others: &[Vec<Coord>]) -> Option<(usize, usize)> {
    let mut candidates: Vec<(f64, usize, usize)> = ring.iter().enumerate()
        .flat_map(|(i, &o)| hole.iter().enumerate().map(move |(j, &h)| {
            let d = o - h;
            (d.x * d.x + d.y * d.y, i, j)
        }))
        .collect();
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

    candidates.into_iter()
        .map(|(_, i, j)| (i, j))
        .find(|&(i, j)| {
            let (o, h) = (ring[i], hole[j]);
            let slit = Line::new(o, h);

            edges(ring)
                .chain(edges(hole))
                .chain(others.iter().flat_map(|other| edges(other)))
                .filter(|edge| ![edge.start, edge.end].iter().any(|&p| p == o || p == h))
                .all(|edge| !slit.intersects(&edge))
        })
}

/// Walk the outer ring of `polygon` and, through a slit, around each of its
/// holes, so the polygon is described by a single open ring.
/// Holes are spliced from right to left.
pub fn single_ring(polygon: &Polygon) -> Result<Vec<Coord>> {
    let exterior_ccw = polygon.exterior().is_ccw();
    let mut ring = open_ring(polygon.exterior());

    let mut holes: Vec<Vec<Coord>> = polygon.interiors().iter()
        .map(|interior| {
            let mut hole = open_ring(interior);
            if interior.is_ccw() == exterior_ccw {
                hole.reverse();
            }
            hole
        })
        .filter(|hole| !hole.is_empty())
        .collect();

    let max_x = |hole: &Vec<Coord>| hole.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
    holes.sort_by(|a, b| max_x(a).total_cmp(&max_x(b)));

    while let Some(hole) = holes.pop() {
        let Some((i, j)) = bridge(&ring, &hole, &holes) else {
            bail!("Could not connect the hole at ({}, {}) to the outer ring", hole[0].x, hole[0].y);
        };

        let mut spliced = Vec::with_capacity(ring.len() + hole.len() + 2);
        spliced.extend_from_slice(&ring[..=i]);
        spliced.extend_from_slice(&hole[j..]);
        spliced.extend_from_slice(&hole[..=j]);
        spliced.extend_from_slice(&ring[i..]);
        ring = spliced;
    }

    Ok(ring)
}
