use crate::aspects::AspectKind;
use crate::ephemeris::Body;
use crate::rendering::primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
use crate::rendering::surface::DrawingSurface;
use serde::{Deserialize, Serialize};

/// Chart metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub ascendant: f64,
    pub midheaven: f64,
    pub bodies: Vec<String>,
    pub aspect_count: usize,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    /// Pixels per chart unit
    pub scale: f32,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            scale: 1.0,
            background_color: Color::BLACK,
            shapes: Vec::new(),
            metadata: ChartMetadata::default(),
        }
    }

    /// Scale so that a wheel of `outer_radius` chart units fits with `padding` pixels spare.
    pub fn fit_radius(mut self, outer_radius: f32, padding: f32) -> Self {
        let available = (self.width.min(self.height) / 2.0 - padding).max(1.0);
        self.scale = available / outer_radius;
        self
    }

    /// Chart units (y up) to pixel space (y down).
    pub fn to_pixels(&self, p: Point) -> Point {
        Point {
            x: self.center.x + p.x * self.scale,
            y: self.center.y - p.y * self.scale,
        }
    }
}

impl DrawingSurface for ChartSpec {
    fn circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        let center = self.to_pixels(center);
        self.shapes.push(Shape::Circle {
            center,
            radius: radius * self.scale,
            fill: None,
            stroke: Some(stroke.clone()),
        });
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let (from, to) = (self.to_pixels(from), self.to_pixels(to));
        self.shapes.push(Shape::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn point(&mut self, at: Point, size: f32, color: Color) {
        let center = self.to_pixels(at);
        self.shapes.push(Shape::Circle {
            center,
            radius: size / 2.0,
            fill: Some(color),
            stroke: None,
        });
    }

    fn text(&mut self, at: Point, content: &str, size: f32, color: Color) {
        let position = self.to_pixels(at);
        self.shapes.push(Shape::Text {
            position,
            content: content.to_string(),
            size,
            color,
            anchor: TextAnchor::Middle,
            rotation: None,
        });
    }

    fn body_glyph(&mut self, at: Point, body: Body, size: f32, color: Color) {
        let center = self.to_pixels(at);
        self.shapes.push(Shape::PlanetGlyph {
            center,
            planet_id: body.name().to_lowercase(),
            size,
            color,
        });
    }

    fn aspect_line(&mut self, from: Point, to: Point, kind: AspectKind, stroke: &Stroke) {
        let (from, to) = (self.to_pixels(from), self.to_pixels(to));
        self.shapes.push(Shape::AspectLine {
            from,
            to,
            aspect_type: kind.name().to_string(),
            color: stroke.color,
            width: stroke.width,
            style: if stroke.dash_array.is_some() {
                LineStyle::Dotted
            } else {
                LineStyle::Solid
            },
        });
    }
}
