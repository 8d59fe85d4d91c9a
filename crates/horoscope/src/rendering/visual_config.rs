use crate::aspects::AspectKind;
use crate::rendering::primitives::{Color, Point};
use crate::western::Element;
use std::collections::HashMap;

/// Ring radii in chart units, innermost first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingRadii {
    pub inner: f32,
    pub house_label: f32,
    pub angle_marker: f32,
    pub zodiac_inner: f32,
    pub sign_glyph: f32,
    pub outer: f32,
}

impl Default for RingRadii {
    fn default() -> Self {
        Self {
            inner: 10.0,
            house_label: 20.0,
            angle_marker: 35.0,
            zodiac_inner: 40.0,
            sign_glyph: 50.0,
            outer: 60.0,
        }
    }
}

/// Visual styling configuration for chart elements
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub radii: RingRadii,
    pub element_colors: HashMap<Element, Color>,
    pub aspect_colors: HashMap<AspectKind, Color>,
    pub background_color: Color,
    pub circle_color: Color,
    pub line_color: Color,
    pub marker_color: Color,
    pub body_color: Color,
    pub stroke_width: f32,
    pub aspect_stroke_width: f32,
    pub sign_glyph_size: f32,
    pub body_glyph_size: f32,
    pub body_marker_size: f32,
    pub angle_marker_size: f32,
    pub angle_label_size: f32,
    pub house_label_size: f32,
    /// Top line of the body placement table, in chart units.
    pub body_legend_origin: Point,
    /// Top line of the aspect list, in chart units.
    pub aspect_legend_origin: Point,
    pub legend_text_size: f32,
    pub legend_line_height: f32,
}

impl VisualConfig {
    pub fn element_color(&self, element: Element) -> Color {
        self.element_colors
            .get(&element)
            .copied()
            .unwrap_or(self.line_color)
    }

    pub fn aspect_color(&self, kind: AspectKind) -> Color {
        self.aspect_colors
            .get(&kind)
            .copied()
            .unwrap_or(self.line_color)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        let grey = Color::from_hex("#808080").unwrap_or(Color::BLACK);

        let color = |hex: &str| Color::from_hex(hex).unwrap_or(grey);

        let mut element_colors = HashMap::new();
        element_colors.insert(Element::Fire, color("#FF6347")); // tomato
        element_colors.insert(Element::Earth, color("#8FBC8F")); // dark sea green
        element_colors.insert(Element::Air, color("#DAA520")); // goldenrod
        element_colors.insert(Element::Water, color("#4169E1")); // royal blue

        let mut aspect_colors = HashMap::new();
        aspect_colors.insert(AspectKind::Conjunction, color("#008000"));
        aspect_colors.insert(AspectKind::Sextile, color("#20B2AA"));
        aspect_colors.insert(AspectKind::Square, color("#FF0000"));
        aspect_colors.insert(AspectKind::Trine, color("#0000FF"));
        aspect_colors.insert(AspectKind::Opposition, color("#800080"));

        Self {
            radii: RingRadii::default(),
            element_colors,
            aspect_colors,
            background_color: Color::WHITE,
            circle_color: Color::BLACK,
            line_color: grey,
            marker_color: Color::WHITE,
            body_color: color("#FFA500"), // orange
            stroke_width: 1.0,
            aspect_stroke_width: 1.0,
            sign_glyph_size: 30.0,
            body_glyph_size: 15.0,
            body_marker_size: 17.0,
            angle_marker_size: 24.0,
            angle_label_size: 14.0,
            house_label_size: 10.0,
            body_legend_origin: Point { x: 50.0, y: 40.0 },
            aspect_legend_origin: Point { x: 50.0, y: -70.0 },
            legend_text_size: 10.0,
            legend_line_height: 4.0,
        }
    }
}
