pub mod classifier;
pub mod cleaner;
pub mod cutter;
pub mod editor;
pub mod engine;
pub mod error;
pub mod merge;
pub mod reshaper;
pub mod simplifier;
pub mod subtract;
pub mod utils;
pub mod wasm;

pub use classifier::LineCase;
pub use editor::ZoneEditor;
pub use engine::Shape;
pub use error::{Result, ZoneEditError};

/// Splits `wkt` along `line` with the default editor.
pub fn cut(wkt: &str, line: &str) -> Result<Vec<String>> {
    ZoneEditor::new().cut(wkt, line)
}

pub fn reshape(wkt: &str, line: &str) -> Result<String> {
    ZoneEditor::new().reshape(wkt, line)
}

pub fn reshape2(wkt: &str, line: &str) -> Result<String> {
    ZoneEditor::new().reshape2(wkt, line)
}

pub fn simplify(wkt: &str) -> Result<String> {
    ZoneEditor::new().simplify(wkt)
}

pub fn muff_and_simp(wkt: &str, tolerance: f64) -> Result<String> {
    ZoneEditor::new().muff_and_simp(wkt, tolerance)
}

pub fn merge_zone(wkt: &str, distance: f64) -> Result<String> {
    ZoneEditor::new().merge_zone(wkt, distance)
}

pub fn merge_zone_wkb(wkb: &[u8], distance: f64) -> Result<String> {
    ZoneEditor::new().merge_zone_wkb(wkb, distance)
}

/// Removes the WKB zones `subs` from a GeoJSON zone, returning WKB.
pub fn subtract_zones<B: AsRef<[u8]>>(geojson: &str, subs: &[B]) -> Result<Vec<u8>> {
    ZoneEditor::new().subtract_zones(geojson, subs)
}
