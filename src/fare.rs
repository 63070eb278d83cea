//! Fare estimation.
//!
//! Prices are whole Rupiah: the distance is scaled by a per-kilometer rate,
//! truncated, then rounded up to the next rounding step.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::haversine;

/// Vehicle category offered to the rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideClass {
    Scooter,
    Car,
}

impl RideClass {
    pub const ALL: [RideClass; 2] = [RideClass::Scooter, RideClass::Car];

    pub fn as_str(&self) -> &'static str {
        match self {
            RideClass::Scooter => "Scooter",
            RideClass::Car => "Car",
        }
    }
}

impl fmt::Display for RideClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RideClass {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        RideClass::ALL
            .into_iter()
            .find(|class| class.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FareError::UnrecognizedRideClass(s.to_string()))
    }
}

/// Per-class rates and rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareSchedule {
    /// Rupiah per kilometer.
    pub scooter_per_km: u64,
    /// Rupiah per kilometer.
    pub car_per_km: u64,
    /// Prices are rounded up to a multiple of this.
    pub rounding_step: u64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            scooter_per_km: 1500,
            car_per_km: 1500,
            rounding_step: 1000,
        }
    }
}

impl FareSchedule {
    pub fn rate_for(&self, ride_class: RideClass) -> u64 {
        match ride_class {
            RideClass::Scooter => self.scooter_per_km,
            RideClass::Car => self.car_per_km,
        }
    }

    /// Price for `distance_km`, rounded up to the rounding step.
    pub fn price(&self, distance_km: f64, ride_class: RideClass) -> Result<u64, FareError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(FareError::InvalidDistance(distance_km));
        }
        if self.rounding_step == 0 {
            return Err(FareError::ZeroRoundingStep);
        }

        let scaled = distance_km * self.rate_for(ride_class) as f64;
        if scaled >= u64::MAX as f64 {
            return Err(FareError::Overflow(distance_km));
        }
        // truncating
        let scaled = scaled as u64;

        let steps = scaled
            .checked_add(self.rounding_step - 1)
            .ok_or(FareError::Overflow(distance_km))?
            / self.rounding_step;
        steps
            .checked_mul(self.rounding_step)
            .ok_or(FareError::Overflow(distance_km))
    }

    /// Quotes a straight-line trip between two points.
    pub fn quote(
        &self,
        pickup: Coordinate,
        dropoff: Coordinate,
        ride_class: RideClass,
    ) -> Result<FareQuote, FareError> {
        let distance_km = haversine::distance_km(pickup, dropoff);
        let amount = self.price(distance_km, ride_class)?;
        Ok(FareQuote {
            ride_class,
            distance_km,
            amount,
        })
    }

    /// Quotes a batch of trips in parallel. Output order matches input.
    pub fn quote_all(&self, trips: &[TripRequest]) -> Result<Vec<FareQuote>, FareError> {
        trips
            .par_iter()
            .map(|trip| self.quote(trip.pickup, trip.dropoff, trip.ride_class))
            .collect()
    }
}

/// Price with the default schedule.
pub fn price(distance_km: f64, ride_class: RideClass) -> Result<u64, FareError> {
    FareSchedule::default().price(distance_km, ride_class)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
    pub ride_class: RideClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    pub ride_class: RideClass,
    pub distance_km: f64,
    /// Whole Rupiah.
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FareError {
    InvalidDistance(f64),
    Overflow(f64),
    ZeroRoundingStep,
    UnrecognizedRideClass(String),
}

impl fmt::Display for FareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FareError::InvalidDistance(km) => write!(f, "invalid distance {} km", km),
            FareError::Overflow(km) => write!(f, "fare for {} km overflows", km),
            FareError::ZeroRoundingStep => f.write_str("rounding step must be positive"),
            FareError::UnrecognizedRideClass(name) => {
                write!(f, "unrecognized ride class {:?}", name)
            }
        }
    }
}

impl std::error::Error for FareError {}
