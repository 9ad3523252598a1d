//! Consolidation of scattered zone parts into hull-shaped regions.

use crate::editor::ZoneEditor;
use crate::engine::{buffer_polygon, cascaded_union, Shape};
use crate::error::{Result, ZoneEditError};
use crate::utils::parallel::filter_map_parts;
use geo::ConvexHull;
use geo_types::MultiPolygon;
use geojson::{Geometry, Value};

/// Replaces every part of `region` by its convex hull, optionally grown by
/// `distance`, and unions the hulls.
pub fn split_and_hull_buff(
    region: &MultiPolygon<f64>,
    distance: Option<f64>,
    quad_segs: u32,
) -> MultiPolygon<f64> {
    let hulls = filter_map_parts(&region.0, |part| {
        let hull = part.convex_hull();
        Some(match distance {
            Some(d) => buffer_polygon(&hull, d, quad_segs),
            None => MultiPolygon::new(vec![hull]),
        })
    });
    cascaded_union(hulls.into_iter().flat_map(|mp| mp.0))
}

/// Two hull passes: the first grows and joins nearby parts, the second
/// re-hulls what the first produced.
///
/// A positive `distance` is scaled by the editor's per-unit merge buffer;
/// otherwise the default merge buffer applies.
pub fn merge_zone(editor: &ZoneEditor, region: &MultiPolygon<f64>, distance: f64) -> MultiPolygon<f64> {
    let merge_dist = if distance > 0.0 {
        distance * editor.merge_buffer_meter
    } else {
        editor.merge_buffer_distance
    };
    let joined = split_and_hull_buff(region, Some(merge_dist), editor.merge_buffer_segs);
    split_and_hull_buff(&joined, None, editor.merge_buffer_segs)
}

pub fn to_geojson(shape: Shape) -> Result<String> {
    let value = match shape {
        Shape::Polygon(poly) => Value::from(&poly),
        Shape::MultiPolygon(mpoly) => Value::from(&mpoly),
        Shape::Empty => Value::MultiPolygon(vec![]),
        other @ (Shape::LineString(_) | Shape::LinearRing(_)) => {
            return Err(ZoneEditError::InternalConsistency(format!(
                "zone merge produced a {}",
                other.geometry_type()
            )))
        }
    };
    serde_json::to_string(&Geometry::new(value))
        .map_err(|e| ZoneEditError::InternalConsistency(e.to_string()))
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
