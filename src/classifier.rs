use crate::engine::line_ends;
use crate::error::{Result, ZoneEditError};
use geo::Intersects;
use geo_types::{LineString, MultiPolygon};

/// How an edit line sits relative to the zone it edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCase {
    /// The line misses the zone entirely.
    NoIntersection,
    /// The line is a ring, or both of its ends lie on the zone.
    Spanning,
    /// Both ends lie outside the zone; the line passes through it.
    Crossing,
    /// Exactly one end lies on the zone.
    Invalid,
}

pub fn classify(region: &MultiPolygon<f64>, line: &LineString<f64>) -> Result<LineCase> {
    let np = line.0.len();
    if np < 2 {
        return Err(ZoneEditError::NotEnoughLinePoints(np));
    }
    if !region.intersects(line) {
        return Ok(LineCase::NoIntersection);
    }

    let ends = line_ends(line);
    let case = match ends.as_slice() {
        [] => LineCase::Spanning,
        [start, end] => match (region.intersects(start), region.intersects(end)) {
            (true, true) => LineCase::Spanning,
            (false, false) => LineCase::Crossing,
            _ => LineCase::Invalid,
        },
        other => return Err(ZoneEditError::WrongLineEndsCount(other.len())),
    };
    log::debug!("line with {} points classified as {:?}", np, case);
    Ok(case)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
