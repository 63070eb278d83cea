//! Trip estimation: route for the map, fares for every ride class.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::Error;
use crate::fare::{FareQuote, FareSchedule, RideClass};
use crate::haversine;
use crate::route::RouteSummary;
use crate::traits::RouteProvider;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEstimate {
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
    /// Great-circle distance; fares are priced from this, not the route.
    pub distance_km: f64,
    pub route: RouteSummary,
    /// One quote per [`RideClass::ALL`] entry, in that order.
    pub quotes: Vec<FareQuote>,
}

impl TripEstimate {
    pub fn quote_for(&self, ride_class: RideClass) -> Option<&FareQuote> {
        self.quotes.iter().find(|quote| quote.ride_class == ride_class)
    }
}

#[tracing::instrument(skip(provider, schedule))]
pub fn estimate_trip<P>(
    provider: &P,
    schedule: &FareSchedule,
    pickup: Coordinate,
    dropoff: Coordinate,
) -> Result<TripEstimate, Error>
where
    P: RouteProvider + ?Sized,
{
    let route = provider.route(pickup, dropoff)?;
    let distance_km = haversine::distance_km(pickup, dropoff);

    let quotes = RideClass::ALL
        .into_iter()
        .map(|ride_class| {
            schedule.price(distance_km, ride_class).map(|amount| FareQuote {
                ride_class,
                distance_km,
                amount,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        distance_km,
        duration = %route.duration_text,
        quotes = quotes.len(),
        "trip estimated"
    );

    Ok(TripEstimate {
        pickup,
        dropoff,
        distance_km,
        route,
        quotes,
    })
}
