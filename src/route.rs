//! Route lookup results and provider composition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::polyline::{Polyline, PolylineError};
use crate::traits::RouteProvider;

/// What the map screen needs from a route lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub polyline: Polyline,
    /// Length along the route in kilometers.
    pub distance_km: f64,
    pub duration_secs: u64,
    /// Human-readable duration, e.g. "1 hour 5 mins".
    pub duration_text: String,
}

impl RouteSummary {
    pub fn new(polyline: Polyline, distance_km: f64, duration_secs: u64) -> Self {
        Self {
            polyline,
            distance_km,
            duration_secs,
            duration_text: format_duration(duration_secs),
        }
    }
}

/// Formats a duration the way directions services display it.
///
/// Rounds to the nearest minute; anything under a minute but above zero
/// shows as "1 min".
pub fn format_duration(seconds: u64) -> String {
    let mut minutes = seconds / 60 + u64::from(seconds % 60 >= 30);
    if seconds > 0 && minutes == 0 {
        minutes = 1;
    }

    let hours = minutes / 60;
    let rest = minutes % 60;

    match (hours, rest) {
        (0, m) => plural(m, "min"),
        (h, 0) => plural(h, "hour"),
        (h, m) => format!("{} {}", plural(h, "hour"), plural(m, "min")),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Tries `primary`, answering from `fallback` when it fails.
#[derive(Debug, Clone)]
pub struct FallbackRouter<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackRouter<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: RouteProvider, F: RouteProvider> RouteProvider for FallbackRouter<P, F> {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RouteError> {
        match self.primary.route(from, to) {
            Ok(summary) => Ok(summary),
            Err(err) => {
                tracing::warn!(%from, %to, error = %err, "primary route lookup failed, using fallback");
                self.fallback.route(from, to)
            }
        }
    }
}

#[derive(Debug)]
pub enum RouteError {
    Http(reqwest::Error),
    /// The service answered but had no route, e.g. OSRM code "NoRoute".
    NoRoute { code: String, message: Option<String> },
    Polyline(PolylineError),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Http(err) => write!(f, "route request failed: {}", err),
            RouteError::NoRoute { code, message } => match message {
                Some(message) => write!(f, "no route ({}): {}", code, message),
                None => write!(f, "no route ({})", code),
            },
            RouteError::Polyline(err) => write!(f, "bad route geometry: {}", err),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Http(err) => Some(err),
            RouteError::Polyline(err) => Some(err),
            RouteError::NoRoute { .. } => None,
        }
    }
}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::Http(err)
    }
}

impl From<PolylineError> for RouteError {
    fn from(err: PolylineError) -> Self {
        RouteError::Polyline(err)
    }
}
