use crate::editor::ZoneEditor;
use crate::engine::{buffer_region, simplify_preserving_topology};
use geo::Area;
use geo_types::MultiPolygon;

/// Simplifies `region` at `tolerance` (the editor default when not
/// positive), then removes the jagged artifacts of simplification with an
/// erosion followed by an equal dilation scaled to the region's size.
///
/// A region whose simplified area is not positive comes back empty.
pub fn simp_geo(editor: &ZoneEditor, region: &MultiPolygon<f64>, tolerance: f64) -> MultiPolygon<f64> {
    let tolerance = if tolerance <= 0.0 { editor.simplify_t } else { tolerance };
    log::info!("simplify geo, tolerance {}", tolerance);

    let simplified = simplify_preserving_topology(region, tolerance);
    let area = simplified.unsigned_area();
    if area <= 0.0 {
        return MultiPolygon::new(vec![]);
    }

    let buff = area.sqrt() * editor.buff_percent;
    let eroded = buffer_region(&simplified, -buff, editor.buff_quad_segs);
    buffer_region(&eroded, buff, editor.buff_quad_segs)
}

#[cfg(test)]
#[path = "simplifier_tests.rs"]
mod tests;
