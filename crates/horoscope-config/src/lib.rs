use chrono::{DateTime, Utc};
use horoscope::{
    AspectSettings, Body, ChartSettings, Gazetteer, GeoLocation, Moment, TableEphemeris,
    EARTH_OBLIQUITY,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Output size of the generated chart spec, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub width: f32,
    pub height: f32,
}

/// A fully parsed chart request.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub moment: Moment,
    /// Place name or literal coordinates, resolved against `gazetteer`.
    pub location: String,
    /// Local sidereal time in degrees, bypassing the clock when set.
    pub sidereal_time: Option<f64>,
    pub fallback_location: GeoLocation,
    pub gazetteer: Gazetteer,
    pub ephemeris: TableEphemeris,
    pub settings: ChartSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartRequestToml {
    moment: String,
    #[serde(default = "default_location")]
    location: String,
    #[serde(default)]
    sidereal_time: Option<f64>,
    #[serde(default = "default_obliquity")]
    obliquity: f64,
    #[serde(default)]
    fallback_location: Option<CoordinatesToml>,
    #[serde(default)]
    aspects: AspectsToml,
    #[serde(default)]
    places: Vec<PlaceToml>,
    #[serde(default)]
    longitudes: BTreeMap<String, f64>,
    #[serde(default)]
    render: RenderToml,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct CoordinatesToml {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct PlaceToml {
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct AspectsToml {
    #[serde(default = "default_orb")]
    default_orb: f64,
    #[serde(default = "default_luminary_orb")]
    luminary_orb: f64,
}

impl Default for AspectsToml {
    fn default() -> Self {
        Self {
            default_orb: default_orb(),
            luminary_orb: default_luminary_orb(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RenderToml {
    #[serde(default = "default_render_size")]
    width: f32,
    #[serde(default = "default_render_size")]
    height: f32,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            width: default_render_size(),
            height: default_render_size(),
        }
    }
}

fn default_location() -> String {
    "Manchester".to_string()
}

fn default_obliquity() -> f64 {
    EARTH_OBLIQUITY
}

fn default_orb() -> f64 {
    8.0
}

fn default_luminary_orb() -> f64 {
    10.0
}

fn default_render_size() -> f32 {
    800.0
}

pub fn load_chart_request(path: &Path) -> anyhow::Result<ChartRequest> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read chart request {}: {e}", path.display()))?;
    parse_chart_request(&text)
}

pub fn parse_chart_request(text: &str) -> anyhow::Result<ChartRequest> {
    let raw: ChartRequestToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse chart request: {e}"))?;
    let ChartRequestToml {
        moment,
        location,
        sidereal_time,
        obliquity,
        fallback_location,
        aspects,
        places,
        longitudes,
        render,
    } = raw;

    let moment = DateTime::parse_from_rfc3339(moment.trim())
        .map_err(|e| anyhow::anyhow!("moment must be an RFC 3339 timestamp ({moment}): {e}"))?
        .with_timezone(&Utc);

    if let Some(lst) = sidereal_time {
        if !lst.is_finite() {
            anyhow::bail!("sidereal_time must be finite, got {lst}");
        }
    }
    if !obliquity.is_finite() || !(0.0..90.0).contains(&obliquity) {
        anyhow::bail!("obliquity must lie in [0, 90), got {obliquity}");
    }
    if aspects.default_orb < 0.0 || aspects.luminary_orb < 0.0 {
        anyhow::bail!(
            "aspect orbs must be non-negative (default_orb {}, luminary_orb {})",
            aspects.default_orb,
            aspects.luminary_orb
        );
    }
    if render.width <= 0.0 || render.height <= 0.0 {
        anyhow::bail!("render size must be positive, got {}x{}", render.width, render.height);
    }

    let fallback_location = match fallback_location {
        Some(c) => GeoLocation::new(c.lat, c.lon)
            .map_err(|e| anyhow::anyhow!("Invalid [fallback_location]: {e}"))?,
        None => GeoLocation::MANCHESTER,
    };

    let mut gazetteer = Gazetteer::new();
    for place in places {
        let loc = GeoLocation::new(place.lat, place.lon)
            .map_err(|e| anyhow::anyhow!("Invalid place '{}': {e}", place.name))?;
        gazetteer.insert(&place.name, loc);
    }

    if longitudes.is_empty() {
        anyhow::bail!("Missing [longitudes] table (body = ecliptic longitude in degrees)");
    }
    let mut ephemeris = TableEphemeris::new();
    for (name, lon) in longitudes {
        let body: Body = name
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid [longitudes] entry: {e}"))?;
        if !lon.is_finite() {
            anyhow::bail!("Longitude for {body} must be finite, got {lon}");
        }
        ephemeris.insert(body, lon);
    }

    let settings = ChartSettings {
        obliquity,
        bodies: ephemeris.bodies(),
        aspects: AspectSettings {
            default_orb: aspects.default_orb,
            luminary_orb: aspects.luminary_orb,
            ..AspectSettings::default()
        },
    };

    Ok(ChartRequest {
        moment,
        location,
        sidereal_time,
        fallback_location,
        gazetteer,
        ephemeris,
        settings,
        render: RenderSettings {
            width: render.width,
            height: render.height,
        },
    })
}
