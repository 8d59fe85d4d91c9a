use crate::angle::separation;
use crate::aspects::types::{Aspect, AspectKind, AspectSettings};
use crate::ephemeris::{Body, CelestialBody};
use std::collections::BTreeMap;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    /// Create a calculator with the default orbs (8°, 10° for luminaries)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Aspects between every unordered pair of distinct bodies.
    ///
    /// Each pair yields at most one aspect. When a body appears more than
    /// once, the tightest candidate for the pair wins, so the result is
    /// sorted by body presentation order and does not depend on the order
    /// of `bodies`.
    pub fn detect_aspects(&self, bodies: &[CelestialBody]) -> Vec<Aspect> {
        let mut found: BTreeMap<(Body, Body), Aspect> = BTreeMap::new();

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                let Some(candidate) = self.calculate_aspect(a, b) else {
                    continue;
                };
                let key = (candidate.first, candidate.second);
                match found.get(&key) {
                    Some(current) if !tighter(&candidate, current) => {}
                    _ => {
                        found.insert(key, candidate);
                    }
                }
            }
        }

        found.into_values().collect()
    }

    /// Aspect between two bodies, if any.
    pub fn calculate_aspect(&self, a: &CelestialBody, b: &CelestialBody) -> Option<Aspect> {
        if a.body == b.body {
            return None;
        }
        let (first, second) = if a.body < b.body { (a, b) } else { (b, a) };
        let sep = separation(first.longitude.degrees(), second.longitude.degrees());
        let orb = self.settings.orb_for(first.body, second.body);
        self.closest_kind(sep, orb).map(|kind| Aspect {
            first: first.body,
            second: second.body,
            kind,
            separation: sep,
            orb: sep - kind.angle(),
        })
    }

    /// The kind within `orb` of `sep` with the smallest deviation; ties go
    /// to the lower exact angle.
    fn closest_kind(&self, sep: f64, orb: f64) -> Option<AspectKind> {
        let mut best: Option<(AspectKind, f64)> = None;
        for &kind in &self.settings.kinds {
            let deviation = (sep - kind.angle()).abs();
            if deviation > orb {
                continue;
            }
            best = match best {
                Some((current, current_dev))
                    if current_dev < deviation
                        || (current_dev == deviation && current.angle() <= kind.angle()) =>
                {
                    Some((current, current_dev))
                }
                _ => Some((kind, deviation)),
            };
        }
        best.map(|(kind, _)| kind)
    }
}

/// Smaller deviation first, then the lower exact angle, then the smaller
/// separation.
fn tighter(a: &Aspect, b: &Aspect) -> bool {
    let rank = |x: &Aspect| (x.orb.abs(), x.kind.angle(), x.separation);
    rank(a).partial_cmp(&rank(b)) == Some(std::cmp::Ordering::Less)
}
