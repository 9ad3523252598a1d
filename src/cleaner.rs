//! Topology cleanup applied to edit results: hole removal, fragment
//! pruning and ring closing.

use crate::engine::{cascaded_union, largest_component};
use crate::utils::parallel::{filter_map_parts, iterate_mut};
use geo::{BooleanOps, Intersects};
use geo_types::{LineString, MultiPolygon, Polygon};

/// Copy of `poly` keeping only its exterior ring.
pub fn muff_polygon(poly: &Polygon<f64>) -> Polygon<f64> {
    Polygon::new(poly.exterior().clone(), vec![])
}

fn strip_holes(poly: &mut Polygon<f64>) {
    if !poly.interiors().is_empty() {
        *poly = muff_polygon(poly);
    }
}

/// Removes every hole of a region.
///
/// A single component is returned hole-free as-is. Several components are
/// hole-stripped, unioned to resolve overlaps, and stripped again since
/// the union may enclose new holes between parts.
pub fn muff(region: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    let mut parts = region.0.clone();
    iterate_mut(&mut parts, strip_holes);
    if parts.len() <= 1 {
        return MultiPolygon::new(parts);
    }

    log::debug!("muff unions {} hole-free components", parts.len());
    let mut merged = cascaded_union(parts);
    iterate_mut(&mut merged.0, strip_holes);
    merged
}

/// Cuts `corridor` out of each part of `region` and keeps only the
/// largest piece per part, discarding the slivers the cut leaves behind.
/// Parts swallowed entirely by the corridor are dropped.
pub fn remove_smaller_polygons(
    region: &MultiPolygon<f64>,
    corridor: &MultiPolygon<f64>,
) -> MultiPolygon<f64> {
    let kept = filter_map_parts(&region.0, |part| {
        let pieces = part.difference(corridor);
        if pieces.0.len() > 1 {
            log::debug!("keeping largest of {} pieces", pieces.0.len());
        }
        largest_component(pieces)
    });
    MultiPolygon::new(kept)
}

/// Polygon whose exterior is the first `n` points of `line`, closed by
/// repeating the first point when the sequence is open.
pub fn build_polygon(line: &LineString<f64>, n: usize) -> Polygon<f64> {
    Polygon::new(close_ring(line, n), vec![])
}

pub fn close_ring(line: &LineString<f64>, n: usize) -> LineString<f64> {
    let mut ring = LineString::new(line.0.iter().take(n).copied().collect());
    ring.close();
    ring
}

/// Drops only the holes whose ring touches `corridor`; other holes
/// survive.
pub fn remove_concat_holes(poly: Polygon<f64>, corridor: &MultiPolygon<f64>) -> Polygon<f64> {
    let (exterior, interiors) = poly.into_inner();
    let before = interiors.len();
    let kept: Vec<LineString<f64>> = interiors
        .into_iter()
        .filter(|ring| !corridor.intersects(ring))
        .collect();
    if kept.len() != before {
        log::debug!("removed {} holes joined by the line", before - kept.len());
    }
    Polygon::new(exterior, kept)
}

#[cfg(test)]
#[path = "cleaner_tests.rs"]
mod tests;
