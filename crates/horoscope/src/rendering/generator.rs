use crate::chart::{aspect_lines, placement_line, NatalChart};
use crate::ephemeris::Body;
use crate::rendering::primitives::{Point, Stroke};
use crate::rendering::spec::{ChartMetadata, ChartSpec};
use crate::rendering::surface::DrawingSurface;
use crate::rendering::visual_config::VisualConfig;
use crate::western::ZodiacSign;

/// Padding around the outer ring, in pixels.
const PADDING: f32 = 20.0;

/// Angular houses get solid cusp lines.
const ANGULAR_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Draws a natal chart wheel in the ascendant-relative frame.
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with default configs
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    /// Generate a pixel-space ChartSpec for `chart`.
    pub fn generate(&self, chart: &NatalChart, width: f32, height: f32) -> ChartSpec {
        let mut spec =
            ChartSpec::new(width, height).fit_radius(self.visual_config.radii.outer, PADDING);
        spec.background_color = self.visual_config.background_color;

        self.draw(chart, &mut spec);

        spec.metadata = ChartMetadata {
            ascendant: chart.frame.ascendant().degrees(),
            midheaven: chart.frame.midheaven().degrees(),
            bodies: chart
                .placements
                .iter()
                .map(|p| p.body.name().to_lowercase())
                .collect(),
            aspect_count: chart.aspects.len(),
        };
        spec
    }

    /// Draw every layer of the wheel onto `surface`.
    pub fn draw(&self, chart: &NatalChart, surface: &mut impl DrawingSurface) {
        self.draw_angles(chart, surface);
        self.draw_cusps(chart, surface);
        self.draw_zodiac(chart, surface);
        self.draw_circles(surface);
        self.draw_bodies(chart, surface);
        self.draw_aspects(chart, surface);
        self.draw_legend(chart, surface);
    }

    fn draw_angles(&self, chart: &NatalChart, surface: &mut impl DrawingSurface) {
        let cfg = &self.visual_config;
        let frame = &chart.frame;
        for (label, angle) in [("Asc", frame.ascendant()), ("Mᶜ", frame.midheaven())] {
            let at = Point::polar(cfg.radii.angle_marker, frame.to_frame(angle).degrees());
            surface.point(at, cfg.angle_marker_size, cfg.marker_color);
            surface.text(at, label, cfg.angle_label_size, cfg.line_color);
        }
    }

    fn draw_cusps(&self, chart: &NatalChart, surface: &mut impl DrawingSurface) {
        let cfg = &self.visual_config;
        for (i, cusp) in chart.frame.cusps().iter().enumerate() {
            let house = i as u8 + 1;
            let stroke = if ANGULAR_HOUSES.contains(&house) {
                Stroke::solid(cfg.line_color, cfg.stroke_width)
            } else {
                Stroke::dotted(cfg.line_color, cfg.stroke_width)
            };
            let c = cusp.degrees();
            surface.line(
                Point::polar(cfg.radii.inner, c),
                Point::polar(cfg.radii.zodiac_inner, c),
                &stroke,
            );
            surface.text(
                Point::polar(cfg.radii.house_label, c + 15.0),
                &house.to_string(),
                cfg.house_label_size,
                cfg.line_color,
            );
        }
    }

    fn draw_zodiac(&self, chart: &NatalChart, surface: &mut impl DrawingSurface) {
        let cfg = &self.visual_config;
        let r = cfg.radii.zodiac_inner;
        let stroke = Stroke::solid(cfg.line_color, cfg.stroke_width);
        let offset = chart.frame.frame_offset();

        for sign in ZodiacSign::ALL {
            let base = sign.start() + offset;
            surface.line(Point::polar(r, base), Point::polar(cfg.radii.outer, base), &stroke);

            for degree in 1..30u32 {
                let length = match degree {
                    10 | 20 => 4.0,
                    5 | 15 | 25 => 2.0,
                    _ => 1.0,
                };
                let at = base + degree as f64;
                surface.line(Point::polar(r, at), Point::polar(r + length, at), &stroke);
            }

            surface.text(
                Point::polar(cfg.radii.sign_glyph, base + 15.0),
                sign.glyph(),
                cfg.sign_glyph_size,
                cfg.element_color(sign.element()),
            );
        }
    }

    fn draw_circles(&self, surface: &mut impl DrawingSurface) {
        let cfg = &self.visual_config;
        let stroke = Stroke::solid(cfg.circle_color, cfg.stroke_width);
        for radius in [cfg.radii.inner, cfg.radii.zodiac_inner, cfg.radii.outer] {
            surface.circle(Point::ORIGIN, radius, &stroke);
        }
    }

    fn body_point(&self, chart: &NatalChart, body: Body) -> Option<Point> {
        chart.placement(body).map(|p| {
            Point::polar(
                self.visual_config.radii.zodiac_inner,
                chart.frame.to_frame(p.longitude).degrees(),
            )
        })
    }

    fn draw_bodies(&self, chart: &NatalChart, surface: &mut impl DrawingSurface) {
        let cfg = &self.visual_config;
        for p in &chart.placements {
            if let Some(at) = self.body_point(chart, p.body) {
                surface.point(at, cfg.body_marker_size, cfg.marker_color);
                surface.body_glyph(at, p.body, cfg.body_glyph_size, cfg.body_color);
            }
        }
    }

    fn draw_aspects(&self, chart: &NatalChart, surface: &mut impl DrawingSurface) {
        let cfg = &self.visual_config;
        for aspect in &chart.aspects {
            let (Some(from), Some(to)) = (
                self.body_point(chart, aspect.first),
                self.body_point(chart, aspect.second),
            ) else {
                continue;
            };
            let stroke = Stroke::solid(cfg.aspect_color(aspect.kind), cfg.aspect_stroke_width);
            surface.aspect_line(from, to, aspect.kind, &stroke);
        }
    }

    /// Body placement table and the sorted aspect list beside the wheel.
    fn draw_legend(&self, chart: &NatalChart, surface: &mut impl DrawingSurface) {
        let cfg = &self.visual_config;
        let bodies: Vec<String> = chart.placements.iter().map(placement_line).collect();
        self.draw_text_block(&bodies, cfg.body_legend_origin, surface);
        self.draw_text_block(&aspect_lines(chart), cfg.aspect_legend_origin, surface);
    }

    fn draw_text_block(&self, lines: &[String], origin: Point, surface: &mut impl DrawingSurface) {
        let cfg = &self.visual_config;
        for (i, line) in lines.iter().enumerate() {
            let at = Point {
                x: origin.x,
                y: origin.y - i as f32 * cfg.legend_line_height,
            };
            surface.text(at, line, cfg.legend_text_size, cfg.line_color);
        }
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}
