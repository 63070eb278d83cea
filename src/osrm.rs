//! OSRM HTTP adapter for route lookups.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::polyline::Polyline;
use crate::route::{RouteError, RouteSummary};
use crate::traits::RouteProvider;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OsrmConfig {
    /// Defaults overridden by `OSRM_BASE_URL`, `OSRM_PROFILE` and
    /// `OSRM_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timeout_secs = match lookup("OSRM_TIMEOUT_SECS") {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(%value, "ignoring unparsable OSRM_TIMEOUT_SECS");
                defaults.timeout_secs
            }),
            None => defaults.timeout_secs,
        };
        Self {
            base_url: lookup("OSRM_BASE_URL").unwrap_or(defaults.base_url),
            profile: lookup("OSRM_PROFILE").unwrap_or(defaults.profile),
            timeout_secs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, from: Coordinate, to: Coordinate) -> String {
        // OSRM wants lng,lat
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=polyline",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude(),
        )
    }
}

impl RouteProvider for OsrmClient {
    #[tracing::instrument(skip(self), fields(profile = %self.config.profile))]
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RouteError> {
        let url = self.route_url(from, to);

        // OSRM answers 400 with a JSON body for NoRoute/InvalidQuery, so
        // parse the body before looking at the status.
        let body: OsrmRouteResponse = self.client.get(url).send()?.json()?;

        if body.code != "Ok" {
            return Err(RouteError::NoRoute {
                code: body.code,
                message: body.message,
            });
        }

        let Some(route) = body.routes.into_iter().next() else {
            return Err(RouteError::NoRoute {
                code: "NoRoute".to_string(),
                message: Some("empty routes array".to_string()),
            });
        };

        let polyline = Polyline::decode(&route.geometry)?;
        tracing::debug!(
            points = polyline.len(),
            distance_m = route.distance,
            duration_s = route.duration,
            "route found"
        );

        Ok(RouteSummary::new(
            polyline,
            route.distance / 1000.0,
            route.duration.max(0.0).round() as u64,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: String,
    /// meters
    distance: f64,
    /// seconds
    duration: f64,
}
