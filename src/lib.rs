//! ride-fare core
//!
//! Distance, fare, and route-geometry estimation for a ride-sharing client.

pub mod coordinate;
pub mod error;
pub mod estimate;
pub mod fare;
pub mod haversine;
pub mod osrm;
pub mod polyline;
pub mod route;
pub mod traits;

pub use coordinate::{Coordinate, CoordinateError};
pub use error::Error;
pub use estimate::{estimate_trip, TripEstimate};
pub use fare::{price, FareError, FareQuote, FareSchedule, RideClass, TripRequest};
pub use haversine::{distance_km, HaversineRouter};
pub use polyline::{Polyline, PolylineError};
pub use route::{FallbackRouter, RouteError, RouteSummary};
pub use traits::RouteProvider;
