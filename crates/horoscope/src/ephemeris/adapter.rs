use crate::angle::Angle;
use crate::ephemeris::types::{Body, CelestialBody, Moment};
use crate::error::ChartError;
use std::collections::HashMap;

/// Julian day of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Julian day of J2000.0.
const J2000_JD: f64 = 2_451_545.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Source of geocentric ecliptic longitudes.
pub trait EphemerisProvider {
    fn longitude_of(&self, body: Body, moment: &Moment) -> Result<Angle, ChartError>;

    /// Positions for every body in `bodies`, in the given order.
    fn positions(
        &self,
        bodies: &[Body],
        moment: &Moment,
    ) -> Result<Vec<CelestialBody>, ChartError> {
        bodies
            .iter()
            .map(|&body| {
                self.longitude_of(body, moment)
                    .map(|longitude| CelestialBody { body, longitude })
            })
            .collect()
    }
}

/// Source of local sidereal time.
pub trait SiderealTimeProvider {
    /// Local sidereal time in degrees for an observer at east longitude `longitude`.
    fn sidereal_time(&self, moment: &Moment, longitude: f64) -> Angle;
}

/// Ephemeris backed by a fixed longitude table, ignoring the moment.
///
/// Used when positions come from an external almanac or a chart request file.
#[derive(Debug, Clone, Default)]
pub struct TableEphemeris {
    longitudes: HashMap<Body, Angle>,
}

impl TableEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, body: Body, longitude: f64) -> Self {
        self.insert(body, longitude);
        self
    }

    pub fn insert(&mut self, body: Body, longitude: f64) {
        self.longitudes.insert(body, Angle::new(longitude));
    }

    /// Bodies present in the table, in presentation order.
    pub fn bodies(&self) -> Vec<Body> {
        Body::ALL
            .iter()
            .copied()
            .filter(|b| self.longitudes.contains_key(b))
            .collect()
    }
}

impl EphemerisProvider for TableEphemeris {
    fn longitude_of(&self, body: Body, _moment: &Moment) -> Result<Angle, ChartError> {
        self.longitudes
            .get(&body)
            .copied()
            .ok_or_else(|| ChartError::EphemerisUnavailable {
                body: body.name().to_string(),
                message: "No longitude in table".to_string(),
            })
    }
}

/// Sidereal time from the mean Greenwich sidereal time polynomial.
///
/// Nutation is ignored, so this is mean (not apparent) sidereal time.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSiderealClock;

impl MeanSiderealClock {
    pub fn new() -> Self {
        Self
    }

    /// Greenwich mean sidereal time in degrees (Meeus, eq. 12.4).
    pub fn greenwich_mean_sidereal_time(&self, moment: &Moment) -> Angle {
        let jd = julian_day(moment);
        let d = jd - J2000_JD;
        let t = d / 36_525.0;
        let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0;
        Angle::new(theta)
    }
}

impl SiderealTimeProvider for MeanSiderealClock {
    fn sidereal_time(&self, moment: &Moment, longitude: f64) -> Angle {
        self.greenwich_mean_sidereal_time(moment).rotate(longitude)
    }
}

/// Fixed sidereal time, for charts whose sidereal time is already known.
#[derive(Debug, Clone, Copy)]
pub struct FixedSiderealTime(pub Angle);

impl SiderealTimeProvider for FixedSiderealTime {
    fn sidereal_time(&self, _moment: &Moment, _longitude: f64) -> Angle {
        self.0
    }
}

/// Convert a UTC moment to a Julian day number.
pub fn julian_day(moment: &Moment) -> f64 {
    let seconds = moment.timestamp() as f64 + moment.timestamp_subsec_nanos() as f64 * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_julian_day_j2000() {
        let moment = chrono::Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(&moment) - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn test_table_ephemeris_missing_body() {
        let table = TableEphemeris::new().with(Body::Sun, 10.0);
        let moment = chrono::Utc.with_ymd_and_hms(2018, 4, 28, 14, 0, 0).unwrap();
        assert!(table.longitude_of(Body::Moon, &moment).is_err());
        assert_eq!(table.bodies(), vec![Body::Sun]);
    }
}
