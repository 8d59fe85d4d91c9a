pub mod calculator;
pub mod types;

pub use calculator::AspectCalculator;
pub use types::{Aspect, AspectKind, AspectSettings};

use crate::ephemeris::CelestialBody;

/// Aspects among `bodies` with the default orbs.
pub fn detect_aspects(bodies: &[CelestialBody]) -> Vec<Aspect> {
    AspectCalculator::new().detect_aspects(bodies)
}
