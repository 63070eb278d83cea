//! Route geometries in Google's encoded polyline format.
//!
//! Routing services return geometry as a compact ASCII string. Each point is
//! stored as the delta from the previous one, zig-zag mapped to an unsigned
//! integer and split into 5-bit chunks offset by 63. Decoding happens at the
//! boundary (when receiving a route), after which the rest of the crate works
//! with [`Coordinate`] values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, CoordinateError};

/// Precision used by Google Directions and OSRM's `polyline` geometry.
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest precision accepted; beyond this the fixed-point values lose
/// meaning as `f64`.
pub const MAX_PRECISION: u32 = 10;

const CHUNK_OFFSET: u8 = 63;
const CONTINUATION: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1f;

/// A route geometry as decoded coordinates, in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes a precision-5 encoded polyline.
    ///
    /// An empty string yields an empty polyline.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        Self::decode_with_precision(encoded, DEFAULT_PRECISION)
    }

    /// Decodes an encoded polyline whose values carry `precision` decimal
    /// digits (6 for OSRM's `polyline6`).
    pub fn decode_with_precision(encoded: &str, precision: u32) -> Result<Self, PolylineError> {
        let factor = factor_for(precision)?;
        let bytes = encoded.as_bytes();

        let mut index = 0;
        let mut lat: i64 = 0;
        let mut lng: i64 = 0;
        let mut points = Vec::new();

        while index < bytes.len() {
            let start = index;

            let delta = next_value(bytes, &mut index)?;
            lat = lat
                .checked_add(delta)
                .ok_or(PolylineError::Overflow { offset: start })?;

            if index >= bytes.len() {
                // latitude without its longitude
                return Err(PolylineError::Truncated { offset: index });
            }

            let lng_start = index;
            let delta = next_value(bytes, &mut index)?;
            lng = lng
                .checked_add(delta)
                .ok_or(PolylineError::Overflow { offset: lng_start })?;

            let point = Coordinate::new(lat as f64 / factor, lng as f64 / factor)
                .map_err(|source| PolylineError::Coordinate { offset: start, source })?;
            points.push(point);
        }

        Ok(Self { points })
    }

    /// Encodes the points at precision 5.
    pub fn encode(&self) -> String {
        encode_points(&self.points, 10f64.powi(DEFAULT_PRECISION as i32))
    }

    pub fn encode_with_precision(&self, precision: u32) -> Result<String, PolylineError> {
        Ok(encode_points(&self.points, factor_for(precision)?))
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn factor_for(precision: u32) -> Result<f64, PolylineError> {
    if precision > MAX_PRECISION {
        return Err(PolylineError::UnsupportedPrecision(precision));
    }
    Ok(10f64.powi(precision as i32))
}

/// Reads one zig-zag encoded value starting at `index`, advancing past it.
fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::Truncated { offset: *index });
        };
        if !(CHUNK_OFFSET..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { offset: *index, byte });
        }

        let chunk = u64::from(byte - CHUNK_OFFSET);
        let bits = chunk & CHUNK_MASK;
        if shift > 60 || (shift == 60 && bits > 0xf) {
            return Err(PolylineError::Overflow { offset: *index });
        }

        result |= bits << shift;
        shift += 5;
        *index += 1;

        if chunk < CONTINUATION {
            break;
        }
    }

    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok(value as i64)
}

fn encode_points(points: &[Coordinate], factor: f64) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.latitude() * factor).round() as i64;
        let lng = (point.longitude() * factor).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn encode_value(delta: i64, out: &mut String) {
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;
    while value >= CONTINUATION {
        out.push(char::from((CONTINUATION | (value & CHUNK_MASK)) as u8 + CHUNK_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHUNK_OFFSET));
}

/// Why an encoded polyline could not be decoded. Offsets are byte offsets
/// into the encoded string.
#[derive(Debug, Clone, PartialEq)]
pub enum PolylineError {
    Truncated { offset: usize },
    InvalidCharacter { offset: usize, byte: u8 },
    Overflow { offset: usize },
    Coordinate { offset: usize, source: CoordinateError },
    UnsupportedPrecision(u32),
}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolylineError::Truncated { offset } => {
                write!(f, "polyline truncated at byte {}", offset)
            }
            PolylineError::InvalidCharacter { offset, byte } => {
                write!(f, "invalid polyline byte 0x{:02x} at {}", byte, offset)
            }
            PolylineError::Overflow { offset } => {
                write!(f, "polyline value overflows at byte {}", offset)
            }
            PolylineError::Coordinate { offset, source } => {
                write!(f, "point starting at byte {}: {}", offset, source)
            }
            PolylineError::UnsupportedPrecision(precision) => {
                write!(f, "precision {} exceeds {}", precision, MAX_PRECISION)
            }
        }
    }
}

impl std::error::Error for PolylineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PolylineError::Coordinate { source, .. } => Some(source),
            _ => None,
        }
    }
}
