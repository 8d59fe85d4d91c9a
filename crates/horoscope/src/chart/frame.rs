//! Chart angles and house cusps from local sidereal time.
//!
//! House cusps live in an ascendant-relative frame: every longitude is
//! shifted by `180 - ascendant`, which puts cusp 1 at 180° (the left-hand
//! side of a drawn wheel).

use crate::angle::{normalize_degrees, Angle};
use crate::error::ChartError;
use serde::{Deserialize, Serialize};

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
pub const EARTH_OBLIQUITY: f64 = 23.4392911;

/// |cos(LST)| below this is treated as the midheaven singularity.
const MIDHEAVEN_SINGULARITY: f64 = 1e-12;

/// Ecliptic longitude rising on the eastern horizon.
///
/// `atan2` yields the setting point; shifting by 180° (add below 180,
/// subtract otherwise) picks the rising one.
pub fn ascendant(sidereal_time: Angle, latitude: f64, obliquity: f64) -> Angle {
    let lst = sidereal_time.radians();
    let lat = latitude.to_radians();
    let inc = obliquity.to_radians();

    let a = -lst.cos();
    let b = lst.sin() * inc.cos();
    let c = lat.tan() * inc.sin();
    let raw = a.atan2(b + c).to_degrees();

    let asc = if raw < 180.0 { raw + 180.0 } else { raw - 180.0 };
    Angle::new(asc)
}

/// Ecliptic longitude culminating on the local meridian.
///
/// `atan(tan(LST) / cos(obliquity))` only covers half the circle, so the
/// result is moved 180° when the meridian lies in the western half
/// (`cos(LST) < 0`). The formula divides by `cos(LST)` and is undefined at
/// LST = 90° and 270°.
pub fn midheaven(sidereal_time: Angle, obliquity: f64) -> Result<Angle, ChartError> {
    let lst = sidereal_time.radians();
    let cos_lst = lst.cos();
    if cos_lst.abs() < MIDHEAVEN_SINGULARITY {
        return Err(ChartError::Domain {
            quantity: "midheaven",
            input: "local sidereal time",
            value: sidereal_time.degrees(),
            message: "tan(LST) diverges where cos(LST) = 0".to_string(),
        });
    }
    let inc = obliquity.to_radians();
    let principal = (lst.tan() / inc.cos()).atan().to_degrees();
    let culminating = if cos_lst < 0.0 {
        principal + 180.0
    } else {
        principal
    };
    Ok(Angle::new(culminating))
}

/// The 12 house cusps in the ascendant-relative frame, plus a 13th
/// boundary equal to cusp 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps([Angle; 13]);

impl HouseCusps {
    /// Close the ring of 12 cusps with a 13th boundary equal to cusp 1.
    pub fn from_cusps(cusps: [Angle; 12]) -> Self {
        let mut boundaries = [Angle::ZERO; 13];
        boundaries[..12].copy_from_slice(&cusps);
        boundaries[12] = cusps[0];
        Self(boundaries)
    }

    /// Cusp of `house` (1..=12). Returns `None` outside that range.
    pub fn get(&self, house: u8) -> Option<Angle> {
        match house {
            1..=12 => Some(self.0[house as usize - 1]),
            _ => None,
        }
    }

    /// All 13 boundaries, the last repeating the first.
    pub fn boundaries(&self) -> &[Angle; 13] {
        &self.0
    }

    /// Half-open `[start, end)` interval of `house`, possibly wrapping past 0°.
    pub fn interval(&self, house: u8) -> Option<(Angle, Angle)> {
        match house {
            1..=12 => {
                let i = house as usize - 1;
                Some((self.0[i], self.0[i + 1]))
            }
            _ => None,
        }
    }

    /// Whether the frame-relative angle `x` lies inside `house`.
    pub fn contains(&self, house: u8, x: Angle) -> bool {
        let Some((start, end)) = self.interval(house) else {
            return false;
        };
        let (start, end, x) = (start.degrees(), end.degrees(), x.degrees());
        if start <= end {
            start <= x && x < end
        } else {
            x >= start || x < end
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Angle> + '_ {
        self.0[..12].iter().copied()
    }
}

/// House cusps by unequal quadrant subdivision.
///
/// The ascendant-to-midheaven quadrants (houses 1-3 and 7-9) are split by
/// `d2`, the other two (houses 4-6 and 10-12) by `d1`.
pub fn house_cusps(ascendant: Angle, midheaven: Angle) -> HouseCusps {
    let asc = ascendant.degrees();
    let asc_deg = asc + (180.0 - asc);
    let mid_deg = normalize_degrees(midheaven.degrees() + (180.0 - asc));

    let d1 = (asc_deg - mid_deg) / 3.0;
    let d2 = (mid_deg - (180.0 - asc_deg)) / 3.0;
    let steps = [d2, d2, d2, d1, d1, d1, d2, d2, d2, d1, d1];

    let mut cusps = [Angle::ZERO; 12];
    cusps[0] = Angle::new(asc_deg);
    for (i, step) in steps.iter().enumerate() {
        cusps[i + 1] = Angle::new(cusps[i].degrees() + step);
    }
    HouseCusps::from_cusps(cusps)
}

/// Ascendant, midheaven and house cusps for one time and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    sidereal_time: Angle,
    latitude: f64,
    obliquity: f64,
    ascendant: Angle,
    midheaven: Angle,
    cusps: HouseCusps,
}

impl ChartFrame {
    pub fn compute(
        sidereal_time: Angle,
        latitude: f64,
        obliquity: f64,
    ) -> Result<Self, ChartError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartError::Domain {
                quantity: "chart frame",
                input: "latitude",
                value: latitude,
                message: "latitude must lie in [-90, 90]".to_string(),
            });
        }
        let ascendant = ascendant(sidereal_time, latitude, obliquity);
        let midheaven = midheaven(sidereal_time, obliquity)?;
        let cusps = house_cusps(ascendant, midheaven);

        log::debug!(
            "Chart frame: LST {} lat {:.4} -> Asc {} MC {}",
            sidereal_time,
            latitude,
            ascendant,
            midheaven
        );

        Ok(Self {
            sidereal_time,
            latitude,
            obliquity,
            ascendant,
            midheaven,
            cusps,
        })
    }

    pub fn sidereal_time(&self) -> Angle {
        self.sidereal_time
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn obliquity(&self) -> f64 {
        self.obliquity
    }

    pub fn ascendant(&self) -> Angle {
        self.ascendant
    }

    pub fn descendant(&self) -> Angle {
        self.ascendant.opposite()
    }

    pub fn midheaven(&self) -> Angle {
        self.midheaven
    }

    pub fn imum_coeli(&self) -> Angle {
        self.midheaven.opposite()
    }

    pub fn cusps(&self) -> &HouseCusps {
        &self.cusps
    }

    /// Rotation that carries ecliptic longitudes into the cusp frame.
    pub fn frame_offset(&self) -> f64 {
        180.0 - self.ascendant.degrees()
    }

    /// Ecliptic longitude expressed in the ascendant-relative frame.
    pub fn to_frame(&self, longitude: Angle) -> Angle {
        longitude.rotate(self.frame_offset())
    }

    /// Ecliptic longitude of the cusp of `house` (1..=12).
    pub fn cusp_longitude(&self, house: u8) -> Option<Angle> {
        self.cusps
            .get(house)
            .map(|c| c.rotate(-self.frame_offset()))
    }
}

/// Chart frame at the standard J2000 obliquity.
pub fn compute_chart_frame(
    sidereal_time: Angle,
    latitude: f64,
) -> Result<ChartFrame, ChartError> {
    ChartFrame::compute(sidereal_time, latitude, EARTH_OBLIQUITY)
}
