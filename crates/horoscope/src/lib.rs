//! Geocentric birth chart computation: ascendant, midheaven, house cusps,
//! zodiac and house classification, aspects, and a drawable chart wheel.

pub mod angle;
pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod rendering;
pub mod western;

pub use angle::{Angle, Dms};
pub use aspects::{detect_aspects, Aspect, AspectCalculator, AspectKind, AspectSettings};
pub use chart::{
    compute_chart_frame, render_report, BodyPlacement, ChartFrame, ChartSettings, HouseCusps,
    NatalChart, EARTH_OBLIQUITY,
};
pub use ephemeris::{
    resolve_or_default, Body, CelestialBody, EphemerisProvider, Gazetteer, GeoLocation,
    LocationResolver, MeanSiderealClock, Moment, SiderealTimeProvider, TableEphemeris,
};
pub use error::ChartError;
pub use western::{classify, zodiac_sign, AstrologicalPosition, Element, Placement, ZodiacSign};
