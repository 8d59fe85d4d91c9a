//! Plain-text chart summary.

use crate::angle::Angle;
use crate::chart::natal::{BodyPlacement, NatalChart};
use crate::error::ChartError;
use crate::western::AstrologicalPosition;

fn angle_line(label: &str, angle: Angle) -> Result<String, ChartError> {
    let position = AstrologicalPosition::from_longitude(angle)?;
    Ok(format!("{:<12}\t{:>6.2}\t{}", label, angle.degrees(), position))
}

/// Glyph, name, position and house of one body, e.g. `☉ Sun  10 Ari  0′  0″  H8`.
pub fn placement_line(p: &BodyPlacement) -> String {
    format!(
        "{} {:<10}  {}  H{}",
        p.body.glyph(),
        p.body.name(),
        p.position,
        p.house
    )
}

/// Aspect descriptions in lexical order.
pub fn aspect_lines(chart: &NatalChart) -> Vec<String> {
    let mut lines: Vec<String> = chart.aspects.iter().map(|a| a.describe()).collect();
    lines.sort();
    lines
}

/// Angles, body placements and aspects, one per line.
pub fn render_report(chart: &NatalChart) -> Result<String, ChartError> {
    let mut out = String::new();
    let frame = &chart.frame;

    for (label, angle) in [
        ("Ascendant", frame.ascendant()),
        ("Descendant", frame.descendant()),
        ("Midheaven", frame.midheaven()),
        ("Imum coeli", frame.imum_coeli()),
    ] {
        out.push_str(&angle_line(label, angle)?);
        out.push('\n');
    }
    out.push('\n');

    for p in &chart.placements {
        out.push_str(&placement_line(p));
        out.push('\n');
    }

    let lines = aspect_lines(chart);
    if !lines.is_empty() {
        out.push('\n');
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
    }

    Ok(out)
}
