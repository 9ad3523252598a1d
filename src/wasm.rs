use wasm_bindgen::prelude::*;
use crate::ZoneEditor;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_err(op: &str, e: crate::ZoneEditError) -> JsValue {
    JsValue::from_str(&format!("{} failed: {}", op, e))
}

/// Returns the cut pieces as a JS array of WKT strings.
#[wasm_bindgen(js_name = cutZone)]
pub fn cut_zone(wkt: &str, line: &str) -> Result<JsValue, JsValue> {
    let pieces = ZoneEditor::new().cut(wkt, line).map_err(|e| js_err("Cut", e))?;
    serde_wasm_bindgen::to_value(&pieces)
        .map_err(|e| JsValue::from_str(&format!("Failed to convert pieces: {}", e)))
}

#[wasm_bindgen(js_name = reshapeZone)]
pub fn reshape_zone(wkt: &str, line: &str) -> Result<String, JsValue> {
    ZoneEditor::new().reshape(wkt, line).map_err(|e| js_err("Reshape", e))
}

#[wasm_bindgen(js_name = reshapeZone2)]
pub fn reshape_zone2(wkt: &str, line: &str) -> Result<String, JsValue> {
    ZoneEditor::new().reshape2(wkt, line).map_err(|e| js_err("Reshape", e))
}

#[wasm_bindgen(js_name = simplifyZone)]
pub fn simplify_zone(wkt: &str) -> Result<String, JsValue> {
    ZoneEditor::new().simplify(wkt).map_err(|e| js_err("Simplify", e))
}

#[wasm_bindgen(js_name = muffAndSimp)]
pub fn muff_and_simp(wkt: &str, tolerance: f64) -> Result<String, JsValue> {
    ZoneEditor::new()
        .muff_and_simp(wkt, tolerance)
        .map_err(|e| js_err("Muff and simplify", e))
}

/// Returns the merged zone as a GeoJSON geometry string.
#[wasm_bindgen(js_name = mergeZone)]
pub fn merge_zone(wkt: &str, distance: f64) -> Result<String, JsValue> {
    ZoneEditor::new()
        .merge_zone(wkt, distance)
        .map_err(|e| js_err("Zone merge", e))
}

#[wasm_bindgen(js_name = mergeZoneWkb)]
pub fn merge_zone_wkb(wkb: &[u8], distance: f64) -> Result<String, JsValue> {
    ZoneEditor::new()
        .merge_zone_wkb(wkb, distance)
        .map_err(|e| js_err("Zone merge", e))
}

/// `subs` is a JS array of WKB byte arrays.
#[wasm_bindgen(js_name = subtractZones)]
pub fn subtract_zones(geojson: &str, subs: JsValue) -> Result<Vec<u8>, JsValue> {
    let subs: Vec<Vec<u8>> = serde_wasm_bindgen::from_value(subs)
        .map_err(|e| JsValue::from_str(&format!("Failed to read zones to subtract: {}", e)))?;
    ZoneEditor::new()
        .subtract_zones(geojson, &subs)
        .map_err(|e| js_err("Subtract zones", e))
}
