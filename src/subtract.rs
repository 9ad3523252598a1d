//! Removal of other zones from a zone.

use crate::engine::parse_wkb;
use geo::BooleanOps;
use geo_types::MultiPolygon;

/// Subtracts every region in `subs` from `region`, in order.
pub fn subtract_zones(region: &MultiPolygon<f64>, subs: &[MultiPolygon<f64>]) -> MultiPolygon<f64> {
    subs.iter()
        .fold(region.clone(), |acc, sub| acc.difference(sub))
}

/// Decodes the WKB zones to subtract. Zones that fail to decode, or that
/// are not areal, are skipped.
pub fn decode_subtrahends<B: AsRef<[u8]>>(subs: &[B]) -> Vec<MultiPolygon<f64>> {
    subs.iter()
        .enumerate()
        .filter_map(|(i, bytes)| {
            match parse_wkb(bytes.as_ref()).and_then(|shape| shape.into_region()) {
                Ok(region) => Some(region),
                Err(e) => {
                    log::warn!("skipping zone {} to subtract: {}", i, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "subtract_tests.rs"]
mod tests;
