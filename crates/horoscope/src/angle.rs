//! Circular angle helpers.
//!
//! Every longitude, cusp and sidereal time in this crate is carried as an
//! [`Angle`]: degrees normalized to `[0, 360)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Wrap any finite degree value into `[0, 360)`.
///
/// Non-finite input is returned unchanged so callers can detect it.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return degrees;
    }
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Absolute separation of two longitudes, reflected into `[0, 180]`.
pub fn separation(a: f64, b: f64) -> f64 {
    let raw = (a - b).abs();
    if raw > 180.0 {
        FULL_TURN - raw
    } else {
        raw
    }
}

/// An angle in degrees, always normalized to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub fn new(degrees: f64) -> Self {
        Angle(normalize_degrees(degrees))
    }

    pub fn from_radians(radians: f64) -> Self {
        Angle::new(radians.to_degrees())
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// The diametrically opposite point.
    pub fn opposite(self) -> Self {
        Angle::new(self.0 + 180.0)
    }

    /// Shift by `delta` degrees, wrapping around the circle.
    pub fn rotate(self, delta: f64) -> Self {
        Angle::new(self.0 + delta)
    }

    /// Separation to `other`, reflected into `[0, 180]`.
    pub fn separation(self, other: Angle) -> f64 {
        separation(self.0, other.0)
    }

    pub fn to_dms(self) -> Dms {
        Dms::from_degrees(self.0)
    }
}

impl From<f64> for Angle {
    fn from(degrees: f64) -> Self {
        Angle::new(degrees)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

/// Degrees, minutes and seconds of a non-negative angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    pub fn from_degrees(value: f64) -> Self {
        let value = value.abs();
        let degrees = value.floor();
        let minutes_total = (value - degrees) * 60.0;
        let minutes = minutes_total.floor();
        let seconds = (minutes_total - minutes) * 60.0;
        Dms {
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
        }
    }

    pub fn to_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }

    /// Round to whole seconds, carrying into minutes and degrees.
    pub fn rounded(&self) -> (u32, u32, u32) {
        let mut seconds = self.seconds.round() as u32;
        let mut minutes = self.minutes;
        let mut degrees = self.degrees;
        if seconds >= 60 {
            seconds -= 60;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1;
        }
        (degrees, minutes, seconds)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, m, s) = self.rounded();
        write!(f, "{}° {:>2}′ {:>2}″", d, m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_negative() {
        assert_eq!(normalize_degrees(-30.0), 330.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert!(normalize_degrees(-1e-18) < FULL_TURN);
    }

    #[test]
    fn test_separation_reflects() {
        assert_eq!(separation(350.0, 10.0), 20.0);
        assert_eq!(separation(10.0, 190.0), 180.0);
    }

    #[test]
    fn test_dms_carry() {
        let dms = Dms::from_degrees(12.0 + 59.0 / 60.0 + 59.7 / 3600.0);
        assert_eq!(dms.rounded(), (13, 0, 0));
    }
}
