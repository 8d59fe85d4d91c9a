use crate::aspects::AspectKind;
use crate::ephemeris::Body;
use crate::rendering::primitives::{Color, Point, Stroke};

/// A 2D plane accepting chart drawing primitives.
///
/// Coordinates are chart units with the origin at the wheel centre and y
/// pointing up.
pub trait DrawingSurface {
    fn circle(&mut self, center: Point, radius: f32, stroke: &Stroke);

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// A filled marker of diameter `size`.
    fn point(&mut self, at: Point, size: f32, color: Color);

    /// Text centred on `at`.
    fn text(&mut self, at: Point, content: &str, size: f32, color: Color);

    fn body_glyph(&mut self, at: Point, body: Body, size: f32, color: Color) {
        self.text(at, body.glyph(), size, color);
    }

    fn aspect_line(&mut self, from: Point, to: Point, _kind: AspectKind, stroke: &Stroke) {
        self.line(from, to, stroke);
    }
}
