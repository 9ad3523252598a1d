use crate::engine::{parse_geojson, parse_wkb, parse_wkt, Shape};
use crate::error::{Result, ZoneEditError};
use crate::{cleaner, cutter, merge, reshaper, simplifier, subtract};
use geo_types::LineString;

/// Half-width of the corridor a cut line is widened to.
pub const CUT_LINE_BUFF_DIST: f64 = 0.0001;
/// Half-width of the corridor a merge line is widened to.
pub const MERGE_LINE_BUFF_DIST: f64 = 0.002;
/// Denoise buffer as a fraction of the square root of the area.
pub const BUFF_PERCENT: f64 = 0.05;
pub const BUFF_QUAD_SEGS: u32 = 12;
/// Default simplification tolerance.
pub const SIMPLIFY_T: f64 = 1.0;
pub const MERGE_BUFFER_DISTANCE: f64 = 0.005;
/// Merge buffer per unit of caller-supplied merge distance.
pub const MERGE_BUFFER_METER: f64 = 0.00001;
pub const MERGE_BUFFER_SEGS: u32 = 24;

/// Entry point for every zone edit. Holds the tunable distances; each
/// call is independent and leaves the editor untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneEditor {
    pub cut_line_buff_dist: f64,
    pub merge_line_buff_dist: f64,
    pub buff_percent: f64,
    pub buff_quad_segs: u32,
    pub simplify_t: f64,
    pub merge_buffer_distance: f64,
    pub merge_buffer_meter: f64,
    pub merge_buffer_segs: u32,
}

impl Default for ZoneEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneEditor {
    pub fn new() -> Self {
        Self {
            cut_line_buff_dist: CUT_LINE_BUFF_DIST,
            merge_line_buff_dist: MERGE_LINE_BUFF_DIST,
            buff_percent: BUFF_PERCENT,
            buff_quad_segs: BUFF_QUAD_SEGS,
            simplify_t: SIMPLIFY_T,
            merge_buffer_distance: MERGE_BUFFER_DISTANCE,
            merge_buffer_meter: MERGE_BUFFER_METER,
            merge_buffer_segs: MERGE_BUFFER_SEGS,
        }
    }

    pub fn with_cut_line_buff_dist(mut self, dist: f64) -> Self {
        self.cut_line_buff_dist = dist;
        self
    }

    pub fn with_merge_line_buff_dist(mut self, dist: f64) -> Self {
        self.merge_line_buff_dist = dist;
        self
    }

    pub fn with_simplify_tolerance(mut self, tolerance: f64) -> Self {
        self.simplify_t = tolerance;
        self
    }

    pub fn with_denoise(mut self, buff_percent: f64, quad_segs: u32) -> Self {
        self.buff_percent = buff_percent;
        self.buff_quad_segs = quad_segs;
        self
    }

    pub fn with_merge_buffer(mut self, distance: f64, per_unit: f64, quad_segs: u32) -> Self {
        self.merge_buffer_distance = distance;
        self.merge_buffer_meter = per_unit;
        self.merge_buffer_segs = quad_segs;
        self
    }

    /// Parses the zone and the edit line, checking both types and the
    /// line's point count.
    fn parse_and_check(&self, wkt: &str, line: &str) -> Result<(Shape, LineString<f64>)> {
        let line = parse_wkt(line)?.into_line()?;
        let target = parse_wkt(wkt)?;
        if let Shape::LineString(_) | Shape::LinearRing(_) = target {
            return Err(ZoneEditError::WrongGeometryType(
                "target must be a Polygon or MultiPolygon",
            ));
        }
        if line.0.len() < 2 {
            return Err(ZoneEditError::NotEnoughLinePoints(line.0.len()));
        }
        Ok((target, line))
    }

    /// Splits a zone along `line` into pieces, returned as WKT.
    pub fn cut(&self, wkt: &str, line: &str) -> Result<Vec<String>> {
        log::info!("start cut wkt");
        let (target, line) = self.parse_and_check(wkt, line)?;
        let pieces = cutter::cut(self, &target, &line)?;
        log::debug!("cut produced {} pieces", pieces.len());
        Ok(pieces.iter().map(Shape::to_wkt).collect())
    }

    /// Reshapes a zone along `line`, keeping every resulting component.
    pub fn reshape(&self, wkt: &str, line: &str) -> Result<String> {
        log::info!("start reshape wkt");
        let (target, line) = self.parse_and_check(wkt, line)?;
        Ok(reshaper::reshape(self, &target, &line)?.to_wkt())
    }

    /// Reshapes a zone along `line` into a single region. Holes unrelated
    /// to the line survive.
    pub fn reshape2(&self, wkt: &str, line: &str) -> Result<String> {
        log::info!("start reshape2 wkt");
        let (target, line) = self.parse_and_check(wkt, line)?;
        Ok(reshaper::reshape2(self, &target, &line)?.to_wkt())
    }

    /// Simplifies a zone with the default tolerance and denoises it.
    pub fn simplify(&self, wkt: &str) -> Result<String> {
        log::info!("start simplify wkt");
        let region = parse_wkt(wkt)?.into_region()?;
        let simplified = simplifier::simp_geo(self, &region, 0.0);
        Ok(Shape::from_region(simplified).to_wkt())
    }

    /// Removes the zone's holes, then simplifies it with `tolerance`
    /// (the default tolerance when not positive).
    pub fn muff_and_simp(&self, wkt: &str, tolerance: f64) -> Result<String> {
        log::info!("start muff and simp wkt");
        let region = parse_wkt(wkt)?.into_region()?;
        let muffed = cleaner::muff(&region);
        let simplified = simplifier::simp_geo(self, &muffed, tolerance);
        Ok(Shape::from_region(simplified).to_wkt())
    }

    /// Consolidates a multi-part zone into hull-merged regions, returned
    /// as a GeoJSON geometry.
    pub fn merge_zone(&self, wkt: &str, distance: f64) -> Result<String> {
        log::info!("start process zone merge, distance {}", distance);
        let region = parse_wkt(wkt)?.into_region()?;
        let merged = merge::merge_zone(self, &region, distance);
        merge::to_geojson(Shape::from_region(merged))
    }

    /// Same as [`ZoneEditor::merge_zone`] for a WKB-encoded zone.
    pub fn merge_zone_wkb(&self, wkb: &[u8], distance: f64) -> Result<String> {
        log::info!("start process zone merge, {} wkb bytes, distance {}", wkb.len(), distance);
        let region = parse_wkb(wkb)?.into_region()?;
        let merged = merge::merge_zone(self, &region, distance);
        merge::to_geojson(Shape::from_region(merged))
    }

    /// Removes the WKB zones `subs` from the GeoJSON zone `geojson` and
    /// returns the remainder as WKB. Undecodable zones in `subs` are
    /// skipped.
    pub fn subtract_zones<B: AsRef<[u8]>>(&self, geojson: &str, subs: &[B]) -> Result<Vec<u8>> {
        log::info!("start subtract zones, {} zones to subtract", subs.len());
        let region = parse_geojson(geojson)?.into_region()?;
        let subtrahends = subtract::decode_subtrahends(subs);
        let remainder = subtract::subtract_zones(&region, &subtrahends);
        Shape::from_region(remainder).to_wkb()
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
