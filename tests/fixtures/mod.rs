//! Test fixtures for ride-fare.
//!
//! Provides real Jakarta / Bandung pickup and drop-off points.

pub mod jakarta_locations;

pub use jakarta_locations::*;
