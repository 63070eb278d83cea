//! End-to-end estimation tests with real Jakarta locations and a mock
//! routing service.

mod fixtures;

use std::cell::RefCell;

use ride_fare::{
    distance_km, estimate_trip, Coordinate, Error, FallbackRouter, FareSchedule, HaversineRouter,
    Polyline, RideClass, RouteError, RouteProvider, RouteSummary, TripRequest,
};

use fixtures::{BANDUNG_CENTER, CAMPUSES, JAKARTA_CENTER, LANDMARKS};

// ============================================================================
// Test Infrastructure
// ============================================================================

/// Answers every lookup with the same encoded geometry, recording requests.
struct MockRouter {
    geometry: &'static str,
    distance_km: f64,
    duration_secs: u64,
    requests: RefCell<Vec<(Coordinate, Coordinate)>>,
}

impl MockRouter {
    fn new(geometry: &'static str) -> Self {
        Self {
            geometry,
            distance_km: 3.2,
            duration_secs: 780,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl RouteProvider for MockRouter {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RouteSummary, RouteError> {
        self.requests.borrow_mut().push((from, to));
        let polyline = Polyline::decode(self.geometry)?;
        Ok(RouteSummary::new(polyline, self.distance_km, self.duration_secs))
    }
}

struct DownRouter;

impl RouteProvider for DownRouter {
    fn route(&self, _: Coordinate, _: Coordinate) -> Result<RouteSummary, RouteError> {
        Err(RouteError::NoRoute {
            code: "InvalidUrl".to_string(),
            message: None,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn estimate_combines_route_and_fares() {
    let pickup = CAMPUSES[1].coordinate();
    let dropoff = LANDMARKS[0].coordinate();
    let router = MockRouter::new("_p~iF~ps|U_ulLnnqC_mqNvxq`@");

    let estimate = estimate_trip(&router, &FareSchedule::default(), pickup, dropoff).unwrap();

    assert_eq!(router.requests.borrow().as_slice(), &[(pickup, dropoff)]);
    assert_eq!(estimate.route.polyline.len(), 3);
    assert_eq!(estimate.route.duration_text, "13 mins");

    // fares come from the straight-line distance, not the route length
    let straight = distance_km(pickup, dropoff);
    assert_eq!(estimate.distance_km, straight);
    for quote in &estimate.quotes {
        assert_eq!(
            quote.amount,
            ride_fare::price(straight, quote.ride_class).unwrap()
        );
    }
    assert_eq!(
        estimate
            .quotes
            .iter()
            .map(|quote| quote.ride_class)
            .collect::<Vec<_>>(),
        RideClass::ALL.to_vec()
    );
}

#[test]
fn malformed_route_geometry_is_an_error() {
    let router = MockRouter::new("_p~iF~ps|U_");
    let result = estimate_trip(
        &router,
        &FareSchedule::default(),
        JAKARTA_CENTER.coordinate(),
        LANDMARKS[1].coordinate(),
    );

    assert!(matches!(
        result,
        Err(Error::Route(RouteError::Polyline(_)))
    ));
}

#[test]
fn fallback_router_keeps_estimates_available() {
    let router = FallbackRouter::new(DownRouter, HaversineRouter::default());
    let pickup = JAKARTA_CENTER.coordinate();
    let dropoff = BANDUNG_CENTER.coordinate();

    let estimate = estimate_trip(&router, &FareSchedule::default(), pickup, dropoff).unwrap();

    assert_eq!(estimate.route.polyline.points(), &[pickup, dropoff]);
    let scooter = estimate.quote_for(RideClass::Scooter).unwrap();
    // ~116 km intercity trip
    assert!(scooter.amount > 150_000 && scooter.amount < 200_000, "got {}", scooter.amount);
    assert_eq!(scooter.amount % 1000, 0);
}

#[test]
fn unreachable_service_without_fallback_fails() {
    let result = estimate_trip(
        &DownRouter,
        &FareSchedule::default(),
        JAKARTA_CENTER.coordinate(),
        BANDUNG_CENTER.coordinate(),
    );
    assert!(matches!(result, Err(Error::Route(RouteError::NoRoute { .. }))));
}

#[test]
fn batch_quotes_every_campus_to_every_landmark() {
    let trips: Vec<TripRequest> = CAMPUSES
        .iter()
        .flat_map(|campus| {
            LANDMARKS.iter().flat_map(move |landmark| {
                RideClass::ALL.into_iter().map(move |ride_class| TripRequest {
                    pickup: campus.coordinate(),
                    dropoff: landmark.coordinate(),
                    ride_class,
                })
            })
        })
        .collect();

    let schedule = FareSchedule::default();
    let quotes = schedule.quote_all(&trips).unwrap();

    assert_eq!(quotes.len(), CAMPUSES.len() * LANDMARKS.len() * RideClass::ALL.len());
    for (trip, quote) in trips.iter().zip(&quotes) {
        assert_eq!(quote.ride_class, trip.ride_class);
        assert_eq!(quote.distance_km, distance_km(trip.pickup, trip.dropoff));
        assert_eq!(quote.amount % schedule.rounding_step, 0);
    }
}

#[test]
fn ride_class_text_from_the_client() {
    assert_eq!("Scooter".parse::<RideClass>().unwrap(), RideClass::Scooter);
    assert!("Bajaj".parse::<RideClass>().is_err());
}
