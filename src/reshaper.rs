//! Reshaping a zone along a line.
//!
//! Both variants share the line classification and the trimming recipe
//! for crossing lines. They differ in how a spanning line is merged into
//! the zone and in how a multi-component result is flattened:
//!
//! * [`reshape`] widens the line slightly, unions it in, then removes
//!   every hole. Several resulting components are all kept.
//! * [`reshape2`] leaves the zone alone when it already contains the
//!   line, otherwise unions in a wider corridor and removes only the holes
//!   the corridor touches. The result is always a single region.

use crate::classifier::{classify, LineCase};
use crate::cleaner::{build_polygon, muff, remove_concat_holes, remove_smaller_polygons};
use crate::cutter::{exclude_closed_line, CUT_LINE_QUAD_SEGS};
use crate::editor::ZoneEditor;
use crate::engine::{buffer_line, contains_line, is_simple_ring, largest_component, Shape};
use crate::error::{Result, ZoneEditError};
use geo::{BooleanOps, Intersects};
use geo_types::{LineString, MultiPolygon, Polygon};

pub fn reshape(editor: &ZoneEditor, target: &Shape, line: &LineString<f64>) -> Result<Shape> {
    let region = target.to_region()?;
    let edited = match classify(&region, line)? {
        LineCase::NoIntersection => return Ok(skip_or_exclude(target, &region, line)),
        LineCase::Spanning => {
            let corridor = buffer_line(line, editor.cut_line_buff_dist, CUT_LINE_QUAD_SEGS);
            muff(&region.union(&corridor))
        }
        LineCase::Crossing => trim_crossing(editor, &region, line),
        LineCase::Invalid => return Err(ZoneEditError::WrongPositionedLine),
    };
    // Several components stay a multipolygon.
    Ok(Shape::from_region(edited))
}

pub fn reshape2(editor: &ZoneEditor, target: &Shape, line: &LineString<f64>) -> Result<Shape> {
    let region = target.to_region()?;
    let edited = match classify(&region, line)? {
        LineCase::NoIntersection => return Ok(skip_or_exclude(target, &region, line)),
        LineCase::Spanning if contains_line(&region, line) => {
            match exclude_closed_line(&region, line) {
                Some(excluded) => excluded,
                None => return Ok(target.clone()),
            }
        }
        LineCase::Spanning => merge_line(editor, &region, line)?,
        LineCase::Crossing => trim_crossing(editor, &region, line),
        LineCase::Invalid => return Err(ZoneEditError::WrongPositionedLine),
    };
    Ok(single_region(edited))
}

fn skip_or_exclude(target: &Shape, region: &MultiPolygon<f64>, line: &LineString<f64>) -> Shape {
    match exclude_closed_line(region, line) {
        Some(excluded) => Shape::from_region(excluded),
        None => target.clone(),
    }
}

/// Unions a wide corridor around `line` into the zone and clears the
/// holes it joins.
///
/// Of several resulting components, the largest one the corridor touches
/// is kept.
fn merge_line(
    editor: &ZoneEditor,
    region: &MultiPolygon<f64>,
    line: &LineString<f64>,
) -> Result<MultiPolygon<f64>> {
    let corridor = buffer_line(line, editor.merge_line_buff_dist, CUT_LINE_QUAD_SEGS);
    let merged = region.union(&corridor);
    if merged.0.len() > 1 {
        log::info!("got multi polygon in line merge, {} components", merged.0.len());
    }
    let (edited, untouched): (Vec<Polygon<f64>>, Vec<Polygon<f64>>) = merged
        .0
        .into_iter()
        .map(|poly| remove_concat_holes(poly, &corridor))
        .partition(|poly| corridor.intersects(poly));
    let candidates = if edited.is_empty() { untouched } else { edited };
    let main = largest_component(MultiPolygon::new(candidates)).ok_or_else(|| {
        ZoneEditError::InternalConsistency("line merge produced an empty region".to_owned())
    })?;
    Ok(MultiPolygon::new(vec![main]))
}

/// Trims the part of the zone a crossing line cuts off.
///
/// A line of more than three points is closed into a polygon and
/// subtracted exactly when that polygon is simple. Otherwise the line's
/// corridor is cut out and only the largest piece of each part is kept.
fn trim_crossing(
    editor: &ZoneEditor,
    region: &MultiPolygon<f64>,
    line: &LineString<f64>,
) -> MultiPolygon<f64> {
    let np = line.0.len();
    if np > 3 {
        let trim = build_polygon(line, np);
        if is_simple_ring(trim.exterior()) {
            return region.difference(&trim);
        }
        log::debug!("trim polygon of {} points is self-intersecting", np);
    }
    let corridor = buffer_line(line, editor.cut_line_buff_dist, CUT_LINE_QUAD_SEGS);
    remove_smaller_polygons(region, &corridor)
}

/// Flattens to one region, choosing the largest component.
fn single_region(region: MultiPolygon<f64>) -> Shape {
    if region.0.len() > 1 {
        log::debug!("flattening {} components to the largest", region.0.len());
    }
    match largest_component(region) {
        Some(poly) => Shape::Polygon(poly),
        None => Shape::Empty,
    }
}

#[cfg(test)]
#[path = "reshaper_tests.rs"]
mod tests;
