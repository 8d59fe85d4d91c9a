use crate::angle::{Angle, Dms};
use crate::chart::frame::ChartFrame;
use crate::error::ChartError;
use crate::western::signs::{zodiac_sign, ZodiacSign};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longitude expressed as a degree within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstrologicalPosition {
    pub sign: ZodiacSign,
    /// Degrees past the start of the sign, in `[0, 30)`.
    pub degree_in_sign: f64,
}

impl AstrologicalPosition {
    pub fn from_longitude(longitude: Angle) -> Result<Self, ChartError> {
        let sign = zodiac_sign(longitude)?;
        Ok(Self {
            sign,
            degree_in_sign: longitude.degrees() - sign.start(),
        })
    }

    pub fn dms(&self) -> Dms {
        Dms::from_degrees(self.degree_in_sign)
    }

    /// Ecliptic longitude this position stands for.
    pub fn longitude(&self) -> Angle {
        Angle::new(self.sign.start() + self.degree_in_sign)
    }
}

impl fmt::Display for AstrologicalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mut d, m, s) = self.dms().rounded();
        let mut sign = self.sign;
        // Rounding up to a full sign carries into the next one.
        if d >= ZodiacSign::WIDTH as u32 {
            d -= ZodiacSign::WIDTH as u32;
            sign = ZodiacSign::from_index((sign.index() + 1) % 12).unwrap_or(sign);
        }
        write!(f, "{:>2} {} {:>2}′ {:>2}″", d, sign.abbreviation(), m, s)
    }
}

/// Sign and house of one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub sign: ZodiacSign,
    pub house: u8,
}

pub fn classify(longitude: Angle, frame: &ChartFrame) -> Result<Placement, ChartError> {
    Ok(Placement {
        sign: zodiac_sign(longitude)?,
        house: frame.house_of(longitude)?,
    })
}
