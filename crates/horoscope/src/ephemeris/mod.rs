pub mod adapter;
pub mod location;
pub mod types;

pub use adapter::{
    julian_day, EphemerisProvider, FixedSiderealTime, MeanSiderealClock, SiderealTimeProvider,
    TableEphemeris,
};
pub use location::{parse_coordinates, resolve_or_default, Gazetteer, LocationResolver};
pub use types::{Body, CelestialBody, GeoLocation, Moment};
