use crate::ephemeris::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect kinds, ordered by exact angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Opposition,
    ];

    /// Exact separation for this aspect (0, 60, 90, 120, 180)
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between an unordered pair of bodies.
///
/// `first` always precedes `second` in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub first: Body,
    pub second: Body,
    pub kind: AspectKind,
    /// Separation between the two longitudes, in `[0, 180]`.
    pub separation: f64,
    /// Signed deviation from exact: `separation - kind.angle()`.
    pub orb: f64,
}

impl Aspect {
    /// Whether the aspect is exact (within 0.1 degrees)
    pub fn is_exact(&self) -> bool {
        self.orb.abs() < 0.1
    }

    pub fn involves(&self, body: Body) -> bool {
        self.first == body || self.second == body
    }

    /// `"Mars and Sun in trine orb 3°"`, names sorted alphabetically.
    pub fn describe(&self) -> String {
        let (a, b) = if self.first.name() <= self.second.name() {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        };
        format!("{} and {} in {} orb {:.0}°", a, b, self.kind, self.orb)
    }
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSettings {
    /// Aspect kinds to look for
    pub kinds: Vec<AspectKind>,
    /// Orb when neither body is a luminary
    pub default_orb: f64,
    /// Orb when the Sun or Moon is involved
    pub luminary_orb: f64,
}

impl AspectSettings {
    pub fn orb_for(&self, a: Body, b: Body) -> f64 {
        if a.is_luminary() || b.is_luminary() {
            self.luminary_orb
        } else {
            self.default_orb
        }
    }
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            kinds: AspectKind::ALL.to_vec(),
            default_orb: 8.0,
            luminary_orb: 10.0,
        }
    }
}
