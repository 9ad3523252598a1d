use crate::classifier::{classify, LineCase};
use crate::cleaner::build_polygon;
use crate::editor::ZoneEditor;
use crate::engine::{buffer_line, cascaded_union, Shape};
use crate::error::{Result, ZoneEditError};
use geo::bounding_rect::BoundingRect;
use geo::{BooleanOps, Intersects};
use geo_types::{LineString, MultiPolygon, Polygon};
use rstar::{RTree, RTreeObject, AABB};

/// Cut corridors are built with a single segment per quarter circle.
pub(crate) const CUT_LINE_QUAD_SEGS: u32 = 1;

// Wrapper for a zone component to be indexable by rstar
struct IndexedPolygon(AABB<[f64; 2]>, usize);

impl RTreeObject for IndexedPolygon {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.0
    }
}

/// Applies a line that misses the zone. A two-point line leaves the zone
/// untouched (`None`); a longer line is closed into a polygon which is
/// excluded from the zone.
pub(crate) fn exclude_closed_line(
    region: &MultiPolygon<f64>,
    line: &LineString<f64>,
) -> Option<MultiPolygon<f64>> {
    let np = line.0.len();
    if np == 2 {
        return None;
    }
    let mask = build_polygon(line, np);
    Some(region.difference(&mask))
}

/// Splits `target` along `line`.
///
/// The line is widened into a narrow corridor which is cut out of the
/// zone; every remaining connected piece becomes one output shape. For a
/// multipolygon, components the line misses are returned first as a
/// single kept shape.
pub fn cut(editor: &ZoneEditor, target: &Shape, line: &LineString<f64>) -> Result<Vec<Shape>> {
    let region = target.to_region()?;
    match classify(&region, line)? {
        LineCase::NoIntersection => {
            let piece = match exclude_closed_line(&region, line) {
                Some(excluded) => Shape::from_region(excluded),
                None => target.clone(),
            };
            return Ok(vec![piece]);
        }
        LineCase::Invalid => return Err(ZoneEditError::WrongPositionedLine),
        LineCase::Spanning | LineCase::Crossing => {}
    }

    let corridor = buffer_line(line, editor.cut_line_buff_dist, CUT_LINE_QUAD_SEGS);
    match target {
        Shape::Polygon(poly) => split_pieces(poly.difference(&corridor)),
        Shape::MultiPolygon(mpoly) => cut_components(mpoly, line, &corridor),
        Shape::Empty => Ok(Vec::new()),
        Shape::LineString(_) | Shape::LinearRing(_) => Err(ZoneEditError::WrongGeometryType(
            "target must be a Polygon or MultiPolygon",
        )),
    }
}

fn split_pieces(remainder: MultiPolygon<f64>) -> Result<Vec<Shape>> {
    match Shape::from_region(remainder) {
        Shape::Polygon(poly) => Ok(vec![Shape::Polygon(poly)]),
        Shape::MultiPolygon(mpoly) => Ok(mpoly.0.into_iter().map(Shape::Polygon).collect()),
        Shape::Empty => {
            log::warn!("cut corridor covers the whole zone");
            Ok(Vec::new())
        }
        other @ (Shape::LineString(_) | Shape::LinearRing(_)) => Err(
            ZoneEditError::InternalConsistency(format!("cut produced a {}", other.geometry_type())),
        ),
    }
}

fn cut_components(
    mpoly: &MultiPolygon<f64>,
    line: &LineString<f64>,
    corridor: &MultiPolygon<f64>,
) -> Result<Vec<Shape>> {
    let touched = touched_components(mpoly, line);
    let (hit, kept): (Vec<(usize, &Polygon<f64>)>, Vec<(usize, &Polygon<f64>)>) =
        mpoly.0.iter().enumerate().partition(|(i, _)| touched[*i]);
    log::debug!("line touches {} of {} components", hit.len(), mpoly.0.len());

    let mut pieces = Vec::with_capacity(kept.len().min(1) + hit.len());
    let kept = MultiPolygon::new(kept.into_iter().map(|(_, p)| p.clone()).collect());
    match Shape::from_region(kept) {
        Shape::Empty => {}
        shape => pieces.push(shape),
    }

    let merged = cascaded_union(hit.into_iter().map(|(_, p)| p.clone()));
    pieces.extend(split_pieces(merged.difference(corridor))?);
    Ok(pieces)
}

/// Flags the components of `mpoly` that `line` intersects.
fn touched_components(mpoly: &MultiPolygon<f64>, line: &LineString<f64>) -> Vec<bool> {
    let mut touched = vec![false; mpoly.0.len()];
    let Some(line_bbox) = line.bounding_rect() else {
        return touched;
    };

    let indexed: Vec<IndexedPolygon> = mpoly
        .0
        .iter()
        .enumerate()
        .filter_map(|(i, poly)| {
            let bbox = poly.bounding_rect()?;
            let aabb = AABB::from_corners([bbox.min().x, bbox.min().y], [bbox.max().x, bbox.max().y]);
            Some(IndexedPolygon(aabb, i))
        })
        .collect();
    let tree = RTree::bulk_load(indexed);

    let query = AABB::from_corners(
        [line_bbox.min().x, line_bbox.min().y],
        [line_bbox.max().x, line_bbox.max().y],
    );
    for cand in tree.locate_in_envelope_intersecting(&query) {
        let idx = cand.1;
        if mpoly.0[idx].intersects(line) {
            touched[idx] = true;
        }
    }
    touched
}

#[cfg(test)]
#[path = "cutter_tests.rs"]
mod tests;
