//! Real Jakarta / Bandung locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

use ride_fare::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng).expect("fixture coordinates are in range")
    }
}

// ============================================================================
// Campuses (typical pickup points)
// ============================================================================

pub const CAMPUSES: &[Location] = &[
    Location::new("Universitas Indonesia Depok", -6.3606, 106.8272),
    Location::new("Universitas Indonesia Salemba", -6.1946, 106.8489),
    Location::new("Binus Anggrek", -6.2018, 106.7819),
    Location::new("Universitas Trisakti", -6.1676, 106.7906),
    Location::new("Institut Teknologi Bandung", -6.8915, 107.6107),
];

// ============================================================================
// Landmarks (typical drop-off points)
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Monas", -6.1754, 106.8272),
    Location::new("Bundaran HI", -6.1950, 106.8230),
    Location::new("Grand Indonesia", -6.1951, 106.8211),
    Location::new("Kota Tua", -6.1352, 106.8133),
    Location::new("Stasiun Gambir", -6.1767, 106.8306),
    Location::new("Gedung Sate", -6.9025, 107.6188),
];

pub const JAKARTA_CENTER: Location = Location::new("Jakarta", -6.2088, 106.8456);
pub const BANDUNG_CENTER: Location = Location::new("Bandung", -6.9175, 107.6191);
