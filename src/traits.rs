//! Seams between the estimation core and its collaborators.

use crate::coordinate::Coordinate;
use crate::route::{RouteError, RouteSummary};

/// Looks up a drivable route between two points.
///
/// Implemented by the OSRM client and the haversine fallback; tests supply
/// their own.
pub trait RouteProvider {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RouteError>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for &P {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RouteError> {
        (**self).route(from, to)
    }
}

impl<P: RouteProvider + ?Sized> RouteProvider for Box<P> {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RouteError> {
        (**self).route(from, to)
    }
}
