use crate::angle::Angle;
use crate::aspects::{Aspect, AspectCalculator, AspectSettings};
use crate::chart::frame::{ChartFrame, EARTH_OBLIQUITY};
use crate::ephemeris::{
    Body, CelestialBody, EphemerisProvider, GeoLocation, Moment, SiderealTimeProvider,
};
use crate::error::ChartError;
use crate::western::{classify, AstrologicalPosition, ZodiacSign};
use serde::{Deserialize, Serialize};

/// Inputs that shape a chart beyond time and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    pub obliquity: f64,
    pub bodies: Vec<Body>,
    pub aspects: AspectSettings,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            obliquity: EARTH_OBLIQUITY,
            bodies: Body::ALL.to_vec(),
            aspects: AspectSettings::default(),
        }
    }
}

/// A body with its derived sign, house and in-sign position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: Body,
    pub longitude: Angle,
    pub sign: ZodiacSign,
    pub house: u8,
    pub position: AstrologicalPosition,
}

impl BodyPlacement {
    pub fn celestial(&self) -> CelestialBody {
        CelestialBody {
            body: self.body,
            longitude: self.longitude,
        }
    }
}

/// A computed birth chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub moment: Option<Moment>,
    pub location: Option<GeoLocation>,
    pub frame: ChartFrame,
    pub placements: Vec<BodyPlacement>,
    pub aspects: Vec<Aspect>,
}

impl NatalChart {
    /// Cast a chart for `moment` at `location`.
    pub fn cast(
        moment: Moment,
        location: GeoLocation,
        ephemeris: &dyn EphemerisProvider,
        clock: &dyn SiderealTimeProvider,
        settings: &ChartSettings,
    ) -> Result<Self, ChartError> {
        let sidereal_time = clock.sidereal_time(&moment, location.lon);
        let frame = ChartFrame::compute(sidereal_time, location.lat, settings.obliquity)?;
        let bodies = ephemeris.positions(&settings.bodies, &moment)?;

        log::info!(
            "Casting chart for {} at {:.4}, {:.4} (LST {})",
            moment.format("%Y-%m-%d %H:%M:%S UTC"),
            location.lat,
            location.lon,
            sidereal_time
        );

        let mut chart = Self::from_parts(frame, &bodies, &settings.aspects)?;
        chart.moment = Some(moment);
        chart.location = Some(location);
        Ok(chart)
    }

    /// Assemble a chart from an already computed frame and body longitudes.
    ///
    /// Placements follow presentation order regardless of input order.
    pub fn from_parts(
        frame: ChartFrame,
        bodies: &[CelestialBody],
        aspect_settings: &AspectSettings,
    ) -> Result<Self, ChartError> {
        let mut ordered = bodies.to_vec();
        ordered.sort_by_key(|b| b.body);

        let placements = ordered
            .iter()
            .map(|b| {
                let placement = classify(b.longitude, &frame)?;
                Ok(BodyPlacement {
                    body: b.body,
                    longitude: b.longitude,
                    sign: placement.sign,
                    house: placement.house,
                    position: AstrologicalPosition::from_longitude(b.longitude)?,
                })
            })
            .collect::<Result<Vec<_>, ChartError>>()?;

        let aspects =
            AspectCalculator::with_settings(aspect_settings.clone()).detect_aspects(&ordered);

        Ok(Self {
            moment: None,
            location: None,
            frame,
            placements,
            aspects,
        })
    }

    pub fn placement(&self, body: Body) -> Option<&BodyPlacement> {
        self.placements.iter().find(|p| p.body == body)
    }
}
