//! Crate-level error wrapping the per-module errors.

use std::fmt;

use crate::coordinate::CoordinateError;
use crate::fare::FareError;
use crate::polyline::PolylineError;
use crate::route::RouteError;

#[derive(Debug)]
pub enum Error {
    Coordinate(CoordinateError),
    Polyline(PolylineError),
    Fare(FareError),
    Route(RouteError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Coordinate(err) => fmt::Display::fmt(err, f),
            Error::Polyline(err) => fmt::Display::fmt(err, f),
            Error::Fare(err) => fmt::Display::fmt(err, f),
            Error::Route(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Coordinate(err) => Some(err),
            Error::Polyline(err) => Some(err),
            Error::Fare(err) => Some(err),
            Error::Route(err) => Some(err),
        }
    }
}

impl From<CoordinateError> for Error {
    fn from(err: CoordinateError) -> Self {
        Error::Coordinate(err)
    }
}

impl From<PolylineError> for Error {
    fn from(err: PolylineError) -> Self {
        Error::Polyline(err)
    }
}

impl From<FareError> for Error {
    fn from(err: FareError) -> Self {
        Error::Fare(err)
    }
}

impl From<RouteError> for Error {
    fn from(err: RouteError) -> Self {
        Error::Route(err)
    }
}
