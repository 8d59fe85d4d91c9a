//! Place name resolution.

use crate::ephemeris::types::GeoLocation;
use crate::error::ChartError;
use regex::Regex;

/// Resolves a place name to coordinates.
pub trait LocationResolver {
    fn resolve(&self, name: &str) -> Result<GeoLocation, ChartError>;
}

lazy_static::lazy_static! {
    // "53.48N 2.24W", "53.48° N, 2.24° W"
    static ref HEMISPHERE_COORDS: Regex = Regex::new(
        r"^\s*(\d+(?:\.\d+)?)\s*°?\s*([NSns])[\s,]+(\d+(?:\.\d+)?)\s*°?\s*([EWew])\s*$"
    ).expect("valid hemisphere pattern");
    // "53.48, -2.24"
    static ref SIGNED_COORDS: Regex = Regex::new(
        r"^\s*([+-]?\d+(?:\.\d+)?)\s*,\s*([+-]?\d+(?:\.\d+)?)\s*$"
    ).expect("valid signed pattern");
}

const BUILTIN_PLACES: &[(&str, f64, f64)] = &[
    ("manchester", 53.4807593, -2.2426305),
    ("london", 51.5072, -0.1276),
    ("greenwich", 51.4769, 0.0),
    ("paris", 48.8566, 2.3522),
    ("new york", 40.7128, -74.0060),
    ("washington", 38.9072, -77.0369),
    ("tokyo", 35.6762, 139.6503),
    ("sydney", -33.8688, 151.2093),
];

/// Built-in place table, extendable with configured entries, that also
/// accepts literal coordinate strings.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    places: Vec<(String, GeoLocation)>,
}

impl Gazetteer {
    pub fn new() -> Self {
        let places = BUILTIN_PLACES
            .iter()
            .map(|&(name, lat, lon)| (name.to_string(), GeoLocation { lat, lon }))
            .collect();
        Self { places }
    }

    /// Add or replace a named place. Names match case-insensitively.
    pub fn insert(&mut self, name: &str, location: GeoLocation) {
        let key = name.trim().to_lowercase();
        self.places.retain(|(n, _)| *n != key);
        self.places.push((key, location));
    }

    fn lookup(&self, name: &str) -> Option<GeoLocation> {
        let key = name.trim().to_lowercase();
        self.places
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, loc)| *loc)
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver for Gazetteer {
    fn resolve(&self, name: &str) -> Result<GeoLocation, ChartError> {
        if let Some(parsed) = parse_coordinates(name) {
            return parsed;
        }
        self.lookup(name).ok_or_else(|| ChartError::LocationNotFound {
            name: name.to_string(),
        })
    }
}

/// Parse a literal coordinate string. Returns `None` if `text` is not
/// shaped like coordinates at all.
pub fn parse_coordinates(text: &str) -> Option<Result<GeoLocation, ChartError>> {
    if let Some(caps) = HEMISPHERE_COORDS.captures(text) {
        let lat: f64 = caps[1].parse().ok()?;
        let lon: f64 = caps[3].parse().ok()?;
        let lat = if caps[2].eq_ignore_ascii_case("s") { -lat } else { lat };
        let lon = if caps[4].eq_ignore_ascii_case("w") { -lon } else { lon };
        return Some(GeoLocation::new(lat, lon));
    }
    if let Some(caps) = SIGNED_COORDS.captures(text) {
        let lat: f64 = caps[1].parse().ok()?;
        let lon: f64 = caps[2].parse().ok()?;
        return Some(GeoLocation::new(lat, lon));
    }
    None
}

/// Resolve `name`, substituting `fallback` on any failure.
pub fn resolve_or_default(
    resolver: &dyn LocationResolver,
    name: &str,
    fallback: GeoLocation,
) -> GeoLocation {
    match resolver.resolve(name) {
        Ok(location) => {
            log::info!(
                "Resolved location '{}' to {:.4}, {:.4}",
                name,
                location.lat,
                location.lon
            );
            location
        }
        Err(e) => {
            log::warn!(
                "Can not find location '{}' ({}); defaulting to {:.4}, {:.4}",
                name,
                e,
                fallback.lat,
                fallback.lon
            );
            fallback
        }
    }
}
