//! Geographic Classification Library
//!
//! Coarse ocean/land classification from fixed bounding boxes, great-circle
//! distance to a reference coastline set, location-type mapping from
//! reverse-geocode address fields, and the id-seeded impact-site generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Mean Earth radius for haversine distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Impact site derived deterministically from an asteroid id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImpactSite {
    pub latitude: f64,
    pub longitude: f64,
}

/// Coarse land-use classification of an impact point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Ocean,
    UrbanHigh,
    UrbanMedium,
    Rural,
    Unknown,
}

/// Address fields as returned by a reverse-geocoding collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub suburb: Option<String>,
    pub country: Option<String>,
}

// Rectangular ocean approximations: (lat_min, lat_max, lng_min, lng_max).
// Union semantics; boxes may overlap near the Atlantic/Indian seam.
const OCEAN_BOXES: [(f64, f64, f64, f64); 3] = [
    (-60.0, 60.0, -180.0, -60.0), // Pacific
    (-60.0, 60.0, -60.0, 20.0),   // Atlantic
    (-60.0, 30.0, 20.0, 120.0),   // Indian
];

/// Reference coastal cities for distance-to-coast estimation.
const COASTAL_POINTS: [(f64, f64); 19] = [
    (40.7, -74.0),   // New York
    (34.0, -118.2),  // Los Angeles
    (25.8, -80.2),   // Miami
    (47.6, -122.3),  // Seattle
    (-34.6, -58.4),  // Buenos Aires
    (-23.5, -46.6),  // Sao Paulo
    (-33.4, -70.7),  // Santiago
    (51.5, -0.1),    // London
    (43.3, -8.4),    // A Coruna
    (41.9, 12.5),    // Rome
    (33.6, -7.6),    // Casablanca
    (-33.9, 18.4),   // Cape Town
    (35.7, 139.7),   // Tokyo
    (22.3, 114.2),   // Hong Kong
    (1.3, 103.8),    // Singapore
    (-33.9, 151.2),  // Sydney
    (-37.8, 144.9),  // Melbourne
    (-41.3, 174.8),  // Wellington
    (-43.5, 172.6),  // Christchurch
];

/// True if the point falls inside any of the fixed ocean boxes.
///
/// Total over all inputs; never errors.
pub fn is_ocean(lat: f64, lng: f64) -> bool {
    OCEAN_BOXES
        .iter()
        .any(|&(lat_min, lat_max, lng_min, lng_max)| {
            lat >= lat_min && lat <= lat_max && lng >= lng_min && lng <= lng_max
        })
}

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance from an ocean point to the nearest reference coastal point.
///
/// Land points return 0 (they are already at or past the coast).
pub fn distance_to_coast_km(lat: f64, lng: f64) -> f64 {
    if !is_ocean(lat, lng) {
        return 0.0;
    }

    let here = GeoPoint::new(lat, lng);
    COASTAL_POINTS
        .iter()
        .map(|&(clat, clng)| haversine_km(here, GeoPoint::new(clat, clng)))
        .fold(f64::INFINITY, f64::min)
}

/// Map reverse-geocode address fields to a location type.
///
/// The ocean box test takes precedence upstream; this mapping handles the
/// land side only. Missing collaborator data maps to `Unknown`.
pub fn location_type_from_address(address: Option<&Address>) -> LocationType {
    let Some(addr) = address else {
        return LocationType::Unknown;
    };

    if addr.city.is_some() || addr.town.is_some() {
        LocationType::UrbanHigh
    } else if addr.village.is_some() || addr.suburb.is_some() {
        LocationType::UrbanMedium
    } else if addr.country.is_some() {
        LocationType::Rural
    } else {
        LocationType::Unknown
    }
}

/// Deterministic impact site for an asteroid id.
///
/// Each call builds its own id-seeded generator, so concurrent callers
/// cannot contaminate one another and there is no global state to restore.
/// Latitude is drawn first, then longitude.
pub fn impact_site(asteroid_id: i64) -> ImpactSite {
    let mut rng = StdRng::seed_from_u64(asteroid_id as u64);
    let latitude = rng.gen_range(-60.0..=60.0);
    let longitude = rng.gen_range(-180.0..=180.0);
    ImpactSite { latitude, longitude }
}
