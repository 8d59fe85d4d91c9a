use crate::angle::Angle;
use crate::chart::frame::{house_cusps, ChartFrame, HouseCusps};
use crate::error::ChartError;

/// House (1..=12) whose cusp interval holds the frame-relative angle `x`.
///
/// Cusps are not sorted before wrapping, so a miss is possible for
/// degenerate frames and is reported rather than defaulted.
pub fn house_in_cusps(x: Angle, cusps: &HouseCusps) -> Result<u8, ChartError> {
    (1..=12u8)
        .find(|&house| cusps.contains(house, x))
        .ok_or(ChartError::Classification {
            longitude: x.degrees(),
            target: "house",
        })
}

/// House of an ecliptic longitude given the chart's ascendant and midheaven.
pub fn house_of(longitude: Angle, ascendant: Angle, midheaven: Angle) -> Result<u8, ChartError> {
    let cusps = house_cusps(ascendant, midheaven);
    let rotated = longitude.rotate(180.0 - ascendant.degrees());
    house_in_cusps(rotated, &cusps)
        .map_err(|_| ChartError::Classification {
            longitude: longitude.degrees(),
            target: "house",
        })
}

impl ChartFrame {
    /// House of an ecliptic longitude in this frame.
    pub fn house_of(&self, longitude: Angle) -> Result<u8, ChartError> {
        house_in_cusps(self.to_frame(longitude), self.cusps()).map_err(|_| {
            ChartError::Classification {
                longitude: longitude.degrees(),
                target: "house",
            }
        })
    }
}
