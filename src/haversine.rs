//! Great-circle distance and a straight-line route provider.
//!
//! The router is the fallback when OSRM is unavailable: it ignores roads
//! but always answers.

use crate::coordinate::Coordinate;
use crate::polyline::Polyline;
use crate::route::{RouteError, RouteSummary};
use crate::traits::RouteProvider;

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lng = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * central_angle
}

/// Straight-line route provider.
///
/// Estimates travel time using straight-line distance and an assumed speed.
#[derive(Debug, Clone)]
pub struct HaversineRouter {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineRouter {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl HaversineRouter {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Convert distance in km to travel time in seconds.
    fn km_to_seconds(&self, km: f64) -> u64 {
        if self.speed_kmh <= 0.0 {
            return 0;
        }
        let hours = km / self.speed_kmh;
        (hours * 3600.0).round() as u64
    }
}

impl RouteProvider for HaversineRouter {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RouteError> {
        let km = distance_km(from, to);
        Ok(RouteSummary::new(
            Polyline::new(vec![from, to]),
            km,
            self.km_to_seconds(km),
        ))
    }
}
