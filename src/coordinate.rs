//! Validated latitude/longitude value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point on the globe in degrees.
///
/// Ranges are checked once, at construction, so the algorithms that take a
/// `Coordinate` never see a latitude outside [-90, 90] or a longitude outside
/// [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub fn latitude(&self) -> f64 {
        self.lat
    }

    pub fn longitude(&self) -> f64 {
        self.lng
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((lat, lng): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(lat, lng)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    Latitude(f64),
    Longitude(f64),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::Latitude(value) => {
                write!(f, "latitude {} is outside [-90, 90]", value)
            }
            CoordinateError::Longitude(value) => {
                write!(f, "longitude {} is outside [-180, 180]", value)
            }
        }
    }
}

impl std::error::Error for CoordinateError {}
