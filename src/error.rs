use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoneEditError {
    #[error("Invalid WKT: {0}")]
    InvalidWkt(String),

    #[error("Invalid WKB: {0}")]
    InvalidWkb(String),

    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),

    #[error("Wrong geometry type: {0}")]
    WrongGeometryType(&'static str),

    #[error("Not enough line points: got {0}, need at least 2")]
    NotEnoughLinePoints(usize),

    #[error("Wrong line ends count: {0}")]
    WrongLineEndsCount(usize),

    #[error("Wrong positioned line: exactly one end touches the zone")]
    WrongPositionedLine,

    /// The engine produced a geometry the edit recipe cannot interpret.
    #[error("Internal consistency failure: {0}")]
    InternalConsistency(String),
}

pub type Result<T> = std::result::Result<T, ZoneEditError>;
