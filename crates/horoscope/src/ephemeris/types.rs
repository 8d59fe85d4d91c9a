use crate::angle::Angle;
use crate::error::ChartError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instant a chart is cast for. Timezone handling happens before this point.
pub type Moment = DateTime<Utc>;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    /// Manchester, used when a place name cannot be resolved.
    pub const MANCHESTER: GeoLocation = GeoLocation {
        lat: 53.4807593,
        lon: -2.2426305,
    };

    pub fn new(lat: f64, lon: f64) -> Result<Self, ChartError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(ChartError::InvalidLocation {
                lat,
                lon,
                message: "Coordinates must be finite".to_string(),
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ChartError::InvalidLocation {
                lat,
                lon,
                message: "Latitude must lie in [-90, 90]".to_string(),
            });
        }
        Ok(Self { lat, lon })
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        GeoLocation::MANCHESTER
    }
}

/// Bodies placed on the chart, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Body::Sun => "☉",
            Body::Moon => "☾",
            Body::Mercury => "☿",
            Body::Venus => "♀",
            Body::Mars => "♂",
            Body::Jupiter => "♃",
            Body::Saturn => "♄",
            Body::Uranus => "♅",
            Body::Neptune => "♆",
        }
    }

    /// Sun and Moon get the wider aspect orb.
    pub fn is_luminary(self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.name().to_lowercase() == lower)
            .ok_or_else(|| ChartError::EphemerisUnavailable {
                body: s.to_string(),
                message: "Unknown body".to_string(),
            })
    }
}

/// A body and its geocentric ecliptic longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub body: Body,
    pub longitude: Angle,
}

impl CelestialBody {
    pub fn new(body: Body, longitude: impl Into<Angle>) -> Self {
        Self {
            body,
            longitude: longitude.into(),
        }
    }
}
