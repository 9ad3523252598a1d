//! Thin layer over the georust stack.
//!
//! Every boolean operation, buffer, hull and simplification the edit
//! recipes issue goes through `geo`; this module only adapts inputs and
//! outputs. Parsed and produced geometries are surfaced as [`Shape`], a
//! closed set of variants the recipes match on exhaustively.

use crate::error::{Result, ZoneEditError};
use geo::algorithm::buffer::{BufferStyle, LineCap, LineJoin};
use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Area, BooleanOps, Buffer, Line, Relate, SimplifyVwPreserve};
use geo_types::{Geometry, LineString, MultiPolygon, Point, Polygon};
use geojson::{Feature, GeoJson};
use rstar::{RTree, RTreeObject, AABB};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::f64::consts::FRAC_PI_2;
use wkt::{ToWkt, TryFromWkt};

const EMPTY_POLYGON_WKT: &str = "POLYGON EMPTY";

/// Geometry variants the editing core knows how to handle.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
    LineString(LineString<f64>),
    /// A closed line with at least four coordinates.
    LinearRing(LineString<f64>),
    Empty,
}

impl TryFrom<Geometry<f64>> for Shape {
    type Error = ZoneEditError;

    fn try_from(geom: Geometry<f64>) -> Result<Self> {
        match geom {
            Geometry::Polygon(poly) if poly.exterior().0.is_empty() => Ok(Shape::Empty),
            Geometry::Polygon(poly) => Ok(Shape::Polygon(poly)),
            Geometry::MultiPolygon(mpoly) if mpoly.0.is_empty() => Ok(Shape::Empty),
            Geometry::MultiPolygon(mpoly) => Ok(Shape::MultiPolygon(mpoly)),
            Geometry::LineString(ls) if ls.is_closed() && ls.0.len() >= 4 => {
                Ok(Shape::LinearRing(ls))
            }
            Geometry::LineString(ls) => Ok(Shape::LineString(ls)),
            Geometry::Point(_) | Geometry::MultiPoint(_) => {
                Err(ZoneEditError::WrongGeometryType("point geometries are not editable"))
            }
            Geometry::MultiLineString(_) => {
                Err(ZoneEditError::WrongGeometryType("multi-line geometries are not editable"))
            }
            Geometry::GeometryCollection(_) => {
                Err(ZoneEditError::WrongGeometryType("geometry collections are not editable"))
            }
            Geometry::Line(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
                Err(ZoneEditError::WrongGeometryType("unsupported geometry primitive"))
            }
        }
    }
}

impl Shape {
    /// Normalizes a boolean-op result: no components becomes `Empty`, a
    /// single component becomes a bare `Polygon`.
    pub fn from_region(mut region: MultiPolygon<f64>) -> Self {
        match region.0.len() {
            0 => Shape::Empty,
            1 => match region.0.pop() {
                Some(poly) => Shape::Polygon(poly),
                None => Shape::Empty,
            },
            _ => Shape::MultiPolygon(region),
        }
    }

    pub fn geometry_type(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "Polygon",
            Shape::MultiPolygon(_) => "MultiPolygon",
            Shape::LineString(_) => "LineString",
            Shape::LinearRing(_) => "LinearRing",
            Shape::Empty => "Empty",
        }
    }

    /// Copies the areal content into a multipolygon.
    pub fn to_region(&self) -> Result<MultiPolygon<f64>> {
        self.clone().into_region()
    }

    pub fn into_region(self) -> Result<MultiPolygon<f64>> {
        match self {
            Shape::Polygon(poly) => Ok(MultiPolygon::new(vec![poly])),
            Shape::MultiPolygon(mpoly) => Ok(mpoly),
            Shape::Empty => Ok(MultiPolygon::new(vec![])),
            Shape::LineString(_) | Shape::LinearRing(_) => Err(
                ZoneEditError::WrongGeometryType("target must be a Polygon or MultiPolygon"),
            ),
        }
    }

    pub fn into_line(self) -> Result<LineString<f64>> {
        match self {
            Shape::LineString(ls) | Shape::LinearRing(ls) => Ok(ls),
            Shape::Polygon(_) | Shape::MultiPolygon(_) | Shape::Empty => {
                Err(ZoneEditError::WrongGeometryType("line must be a LineString"))
            }
        }
    }

    /// Engine geometry for this shape; `Empty` is an empty multipolygon.
    pub fn to_geometry(&self) -> Geometry<f64> {
        match self {
            Shape::Polygon(poly) => Geometry::Polygon(poly.clone()),
            Shape::MultiPolygon(mpoly) => Geometry::MultiPolygon(mpoly.clone()),
            Shape::LineString(ls) | Shape::LinearRing(ls) => Geometry::LineString(ls.clone()),
            Shape::Empty => Geometry::MultiPolygon(MultiPolygon::new(vec![])),
        }
    }

    pub fn to_wkb(&self) -> Result<Vec<u8>> {
        wkb::geom_to_wkb(&self.to_geometry()).map_err(|e| {
            ZoneEditError::InternalConsistency(format!("failed to write wkb: {:?}", e))
        })
    }

    pub fn to_wkt(&self) -> String {
        match self {
            Shape::Polygon(poly) => poly.wkt_string(),
            Shape::MultiPolygon(mpoly) => mpoly.wkt_string(),
            Shape::LineString(ls) | Shape::LinearRing(ls) => ls.wkt_string(),
            Shape::Empty => EMPTY_POLYGON_WKT.to_owned(),
        }
    }
}

pub fn parse_wkt(wkt: &str) -> Result<Shape> {
    let geom = Geometry::<f64>::try_from_wkt_str(wkt).map_err(|e| {
        log::debug!("failed to parse wkt: {}", e);
        ZoneEditError::InvalidWkt(e.to_string())
    })?;
    Shape::try_from(geom)
}

pub fn parse_wkb(mut bytes: &[u8]) -> Result<Shape> {
    let geom = wkb::wkb_to_geom(&mut bytes).map_err(|e| {
        log::debug!("failed to parse wkb: {:?}", e);
        ZoneEditError::InvalidWkb(format!("{:?}", e))
    })?;
    Shape::try_from(geom)
}

/// Parses a GeoJSON geometry, or the geometry of a single feature.
pub fn parse_geojson(json: &str) -> Result<Shape> {
    let invalid = |e: geojson::Error| ZoneEditError::InvalidGeoJson(e.to_string());
    let geometry = match json.parse::<GeoJson>().map_err(invalid)? {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(Feature { geometry: Some(geometry), .. }) => geometry,
        GeoJson::Feature(_) => {
            return Err(ZoneEditError::InvalidGeoJson("feature has no geometry".to_owned()))
        }
        GeoJson::FeatureCollection(_) => {
            return Err(ZoneEditError::WrongGeometryType("feature collections are not editable"))
        }
    };
    let geom = Geometry::<f64>::try_from(geometry).map_err(invalid)?;
    Shape::try_from(geom)
}

fn round_style(distance: f64, quad_segs: u32) -> BufferStyle<f64> {
    // Arc step matching `quad_segs` segments per quarter circle.
    let step = FRAC_PI_2 / f64::from(quad_segs.max(1));
    BufferStyle::new(distance)
        .line_join(LineJoin::Round(step))
        .line_cap(LineCap::Round(step))
}

/// Corridor of `distance` around a line.
pub fn buffer_line(line: &LineString<f64>, distance: f64, quad_segs: u32) -> MultiPolygon<f64> {
    line.buffer_with_style(round_style(distance, quad_segs))
}

/// Grows (positive) or erodes (negative) a region.
pub fn buffer_region(region: &MultiPolygon<f64>, distance: f64, quad_segs: u32) -> MultiPolygon<f64> {
    region.buffer_with_style(round_style(distance, quad_segs))
}

pub fn buffer_polygon(poly: &Polygon<f64>, distance: f64, quad_segs: u32) -> MultiPolygon<f64> {
    poly.buffer_with_style(round_style(distance, quad_segs))
}

/// Union of many polygons, resolving overlaps between them.
pub fn cascaded_union<I>(polys: I) -> MultiPolygon<f64>
where
    I: IntoIterator<Item = Polygon<f64>>,
{
    polys
        .into_iter()
        .fold(MultiPolygon::new(vec![]), |acc, poly| acc.union(&poly))
}

/// Topology-preserving simplification. The distance tolerance is squared
/// into the effective-area threshold used by Visvalingam-Whyatt.
pub fn simplify_preserving_topology(region: &MultiPolygon<f64>, tolerance: f64) -> MultiPolygon<f64> {
    region.simplify_vw_preserve(tolerance * tolerance)
}

pub fn contains_line(region: &MultiPolygon<f64>, line: &LineString<f64>) -> bool {
    region.relate(line).is_contains()
}

/// Boundary points of a line: none for a closed line, both ends otherwise.
pub fn line_ends(line: &LineString<f64>) -> SmallVec<[Point<f64>; 2]> {
    let mut ends = SmallVec::new();
    if line.is_closed() {
        return ends;
    }
    ends.extend(line.0.first().map(|c| Point::from(*c)));
    ends.extend(line.0.last().map(|c| Point::from(*c)));
    ends
}

/// Component with the largest area; ties keep the earliest one.
pub fn largest_component(region: MultiPolygon<f64>) -> Option<Polygon<f64>> {
    let mut best: Option<(f64, Polygon<f64>)> = None;
    for poly in region.0 {
        let area = poly.unsigned_area();
        let replace = match &best {
            Some((best_area, _)) => area.partial_cmp(best_area) == Some(Ordering::Greater),
            None => true,
        };
        if replace {
            best = Some((area, poly));
        }
    }
    best.map(|(_, poly)| poly)
}

// Wrapper for ring segments to be indexable by rstar
#[derive(Clone, Copy, Debug)]
struct IndexedSegment {
    line: Line<f64>,
    index: usize,
}

impl RTreeObject for IndexedSegment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let p1 = self.line.start;
        let p2 = self.line.end;
        AABB::from_corners(
            [p1.x.min(p2.x), p1.y.min(p2.y)],
            [p1.x.max(p2.x), p1.y.max(p2.y)],
        )
    }
}

/// True when the closed ring never touches itself except where
/// consecutive segments meet.
pub fn is_simple_ring(ring: &LineString<f64>) -> bool {
    let segments: Vec<IndexedSegment> = ring
        .lines()
        .filter(|l| l.start != l.end)
        .enumerate()
        .map(|(index, line)| IndexedSegment { line, index })
        .collect();
    let n = segments.len();
    if n < 3 {
        return false;
    }
    let tree = RTree::bulk_load(segments);

    for (a, b) in tree.intersection_candidates_with_other_tree(&tree) {
        if a.index >= b.index {
            continue;
        }
        let Some(hit) = line_intersection(a.line, b.line) else {
            continue;
        };
        let adjacent = b.index == a.index + 1 || (a.index == 0 && b.index == n - 1);
        match hit {
            LineIntersection::SinglePoint { .. } if adjacent => continue,
            // Adjacent segments folding back over each other, or any
            // contact between non-adjacent ones.
            LineIntersection::SinglePoint { .. } | LineIntersection::Collinear { .. } => {
                return false
            }
        }
    }
    true
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
