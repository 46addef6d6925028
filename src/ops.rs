use anyhow::Result;
use log::debug;

use crate::concept::{PolygonConcept, PolygonMutConcept, PolygonSetConcept};
use crate::config::{EngineConfig, JobConfig, JobKind};
use crate::engine::PolygonSetData;
use crate::orientation::{OrientationIndex, OrientedPoint};
use crate::polygon_set::{assign, PosePolygonSet};


fn rebuild<S>(data: &PolygonSetData, operands: &[&S], config: &EngineConfig) -> Result<S>
where
    S: PolygonSetConcept + FromIterator<S::Polygon>,
    S::Polygon: PolygonMutConcept,
    <S::Polygon as PolygonConcept>::Point: OrientedPoint,
{
    let index = OrientationIndex::from_sets(operands);
    let polygons: Vec<S::Polygon> = index.rebuild(data, &config.orientation)?;
    Ok(polygons.into_iter().collect())
}

fn binary<S>(lhs: &S, rhs: &S, config: &EngineConfig, name: &str, op: fn(&PolygonSetData, &PolygonSetData) -> PolygonSetData) -> Result<S>
where
    S: PolygonSetConcept + FromIterator<S::Polygon>,
    S::Polygon: PolygonMutConcept,
    <S::Polygon as PolygonConcept>::Point: OrientedPoint,
{
    let a = PolygonSetData::from_set(lhs)?;
    let b = PolygonSetData::from_set(rhs)?;
    let result = op(&a, &b);

    debug!("{name}: {} and {} polygon(s) gave {}", a.len(), b.len(), result.len());

    rebuild(&result, &[lhs, rhs], config)
}


pub fn union<S>(lhs: &S, rhs: &S, config: &EngineConfig) -> Result<S>
where
    S: PolygonSetConcept + FromIterator<S::Polygon>,
    S::Polygon: PolygonMutConcept,
    <S::Polygon as PolygonConcept>::Point: OrientedPoint,
{
    binary(lhs, rhs, config, "Union", |a, b| a | b)
}

pub fn intersection<S>(lhs: &S, rhs: &S, config: &EngineConfig) -> Result<S>
where
    S: PolygonSetConcept + FromIterator<S::Polygon>,
    S::Polygon: PolygonMutConcept,
    <S::Polygon as PolygonConcept>::Point: OrientedPoint,
{
    binary(lhs, rhs, config, "Intersection", |a, b| a & b)
}

pub fn difference<S>(lhs: &S, rhs: &S, config: &EngineConfig) -> Result<S>
where
    S: PolygonSetConcept + FromIterator<S::Polygon>,
    S::Polygon: PolygonMutConcept,
    <S::Polygon as PolygonConcept>::Point: OrientedPoint,
{
    binary(lhs, rhs, config, "Difference", |a, b| a - b)
}

pub fn xor<S>(lhs: &S, rhs: &S, config: &EngineConfig) -> Result<S>
where
    S: PolygonSetConcept + FromIterator<S::Polygon>,
    S::Polygon: PolygonMutConcept,
    <S::Polygon as PolygonConcept>::Point: OrientedPoint,
{
    binary(lhs, rhs, config, "Xor", |a, b| a ^ b)
}

pub fn offset<S>(set: &S, distance: f64, config: &EngineConfig) -> Result<S>
where
    S: PolygonSetConcept + FromIterator<S::Polygon>,
    S::Polygon: PolygonMutConcept,
    <S::Polygon as PolygonConcept>::Point: OrientedPoint,
{
    let result = PolygonSetData::from_set(set)?.offset(distance, config.resolution)?;
    rebuild(&result, &[set], config)
}


pub fn run_job(job: JobConfig, config: &EngineConfig) -> Result<PosePolygonSet> {
    let JobConfig { kind, lhs, rhs } = job;

    let lhs = PosePolygonSet::from(lhs);
    let rhs = PosePolygonSet::from(rhs);

    match kind {
        JobKind::Normalize => {
            let mut out = PosePolygonSet::new();
            assign(&mut out, lhs, &config.orientation)?;
            Ok(out)
        },
        JobKind::Union => union(&lhs, &rhs, config),
        JobKind::Intersection => intersection(&lhs, &rhs, config),
        JobKind::Difference => difference(&lhs, &rhs, config),
        JobKind::Xor => xor(&lhs, &rhs, config),
        JobKind::Offset { distance } => offset(&lhs, distance, config),
    }
}
