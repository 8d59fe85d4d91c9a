use horoscope::rendering::primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
use horoscope::rendering::{ChartSpec, ChartSpecGenerator, DrawingSurface, VisualConfig};
use horoscope::chart::{aspect_lines, placement_line};
use horoscope::{
    compute_chart_frame, Angle, AspectKind, AspectSettings, Body, CelestialBody, GeoLocation,
    NatalChart,
};

fn sample_chart() -> NatalChart {
    let frame = compute_chart_frame(Angle::new(45.0), GeoLocation::MANCHESTER.lat).unwrap();
    let bodies = vec![
        CelestialBody::new(Body::Sun, 10.0),
        CelestialBody::new(Body::Venus, 79.0),
    ];
    NatalChart::from_parts(frame, &bodies, &AspectSettings::default()).unwrap()
}

#[test]
fn test_chartspec_new() {
    let spec = ChartSpec::new(800.0, 600.0);

    assert_eq!(spec.width, 800.0);
    assert_eq!(spec.height, 600.0);
    assert_eq!(spec.center.x, 400.0);
    assert_eq!(spec.center.y, 300.0);
    assert_eq!(spec.scale, 1.0);
    assert_eq!(spec.background_color, Color::BLACK);
    assert!(spec.shapes.is_empty());
}

#[test]
fn test_chartspec_to_pixels_flips_y() {
    let spec = ChartSpec::new(800.0, 600.0).fit_radius(60.0, 20.0);
    let p = spec.to_pixels(Point { x: 60.0, y: 60.0 });
    assert!((p.x - 680.0).abs() < 1e-3);
    assert!((p.y - 20.0).abs() < 1e-3);
}

#[test]
fn test_polar_point() {
    let p = Point::polar(10.0, 90.0);
    assert!(p.x.abs() < 1e-5);
    assert!((p.y - 10.0).abs() < 1e-5);

    let p = Point::polar(40.0, 180.0);
    assert!((p.x + 40.0).abs() < 1e-5);
}

#[test]
fn test_color_from_hex_rgb() {
    let color = Color::from_hex("#FF0000").unwrap();
    assert_eq!(color.r, 255);
    assert_eq!(color.g, 0);
    assert_eq!(color.b, 0);
    assert_eq!(color.a, 255); // Default alpha
}

#[test]
fn test_color_from_hex_rgba() {
    let color = Color::from_hex("#FF000080").unwrap();
    assert_eq!(color.r, 255);
    assert_eq!(color.a, 128);
}

#[test]
fn test_color_from_hex_invalid() {
    assert!(Color::from_hex("invalid").is_none());
    assert!(Color::from_hex("#FF").is_none());
    assert!(Color::from_hex("#FF00000").is_none()); // Wrong length
    assert!(Color::from_hex("#GG0000").is_none());
}

#[test]
fn test_color_to_css_string() {
    let opaque = Color { r: 255, g: 0, b: 0, a: 255 };
    assert_eq!(opaque.to_css_string(), "rgb(255, 0, 0)");

    let transparent = Color { r: 255, g: 0, b: 0, a: 128 };
    let css = transparent.to_css_string();
    assert!(css.starts_with("rgba"));
    assert!(css.contains("0.5"));
}

#[test]
fn test_default_palette() {
    let config = VisualConfig::default();
    assert_eq!(config.aspect_color(AspectKind::Square), Color::from_hex("#FF0000").unwrap());
    assert_eq!(config.aspect_color(AspectKind::Sextile), Color::from_hex("#20B2AA").unwrap());
    assert_eq!(config.body_color, Color::from_hex("#FFA500").unwrap());
    assert_eq!(config.radii.outer, 60.0);
}

#[test]
fn test_shape_serialization_tagged() {
    let shape = Shape::Text {
        position: Point { x: 50.0, y: 50.0 },
        content: "Asc".to_string(),
        size: 14.0,
        color: Color::WHITE,
        anchor: TextAnchor::Middle,
        rotation: None,
    };
    let json = serde_json::to_string(&shape).unwrap();
    assert!(json.contains("\"type\":\"Text\""));
    let back: Shape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);
}

#[test]
fn test_generate_shape_counts() {
    let spec = ChartSpecGenerator::new().generate(&sample_chart(), 800.0, 600.0);

    let count = |f: fn(&Shape) -> bool| spec.shapes.iter().filter(|s| f(s)).count();

    // angles 2x2, cusps 12x2, zodiac 12x31, rings 3, bodies 2x2, aspects 1,
    // legend 2 bodies + 1 aspect
    assert_eq!(spec.shapes.len(), 4 + 24 + 372 + 3 + 4 + 1 + 3);
    assert_eq!(count(|s| matches!(s, Shape::PlanetGlyph { .. })), 2);
    assert_eq!(count(|s| matches!(s, Shape::AspectLine { .. })), 1);
    assert_eq!(
        count(|s| matches!(s, Shape::Line { stroke, .. } if stroke.dash_array.is_some())),
        8
    );
    assert_eq!(
        count(|s| matches!(s, Shape::Circle { fill: None, .. })),
        3
    );
}

#[test]
fn test_generate_scale_and_metadata() {
    let spec = ChartSpecGenerator::new().generate(&sample_chart(), 800.0, 600.0);

    assert!((spec.scale - 280.0 / 60.0).abs() < 1e-4);
    assert_eq!(spec.background_color, Color::WHITE);
    assert_eq!(spec.metadata.bodies, vec!["sun".to_string(), "venus".to_string()]);
    assert_eq!(spec.metadata.aspect_count, 1);
    assert!((spec.metadata.ascendant - 149.194_958_57).abs() < 1e-6);

    let outer = spec
        .shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Circle { radius, fill: None, .. } => Some(*radius),
            _ => None,
        })
        .fold(0.0_f32, f32::max);
    assert!((outer - 280.0).abs() < 1e-3);
}

#[test]
fn test_generate_aspect_line_style() {
    let spec = ChartSpecGenerator::new().generate(&sample_chart(), 800.0, 600.0);
    let line = spec
        .shapes
        .iter()
        .find_map(|s| match s {
            Shape::AspectLine { aspect_type, color, style, .. } => {
                Some((aspect_type, color, style))
            }
            _ => None,
        })
        .unwrap();
    assert_eq!(line.0, "sextile");
    assert_eq!(*line.1, Color::from_hex("#20B2AA").unwrap());
    assert_eq!(*line.2, LineStyle::Solid);
}

#[test]
fn test_generate_legend_panels() {
    let chart = sample_chart();
    let spec = ChartSpecGenerator::new().generate(&chart, 800.0, 600.0);
    let text_at = |content: &str| {
        spec.shapes.iter().find_map(|s| match s {
            Shape::Text { content: c, position, .. } if c == content => Some(*position),
            _ => None,
        })
    };

    let sun = placement_line(&chart.placements[0]);
    assert!(sun.starts_with("☉ Sun"));
    let at = text_at(&sun).unwrap();
    let expected = spec.to_pixels(Point { x: 50.0, y: 40.0 });
    assert!((at.x - expected.x).abs() < 1e-3);
    assert!((at.y - expected.y).abs() < 1e-3);

    // The second row sits below the first
    let venus = text_at(&placement_line(&chart.placements[1])).unwrap();
    assert!(venus.y > at.y);

    let aspects = aspect_lines(&chart);
    assert_eq!(aspects.len(), 1);
    let at = text_at(&aspects[0]).unwrap();
    let expected = spec.to_pixels(Point { x: 50.0, y: -70.0 });
    assert!((at.x - expected.x).abs() < 1e-3);
    assert!((at.y - expected.y).abs() < 1e-3);
}

#[test]
fn test_ascendant_drawn_on_left() {
    let spec = ChartSpecGenerator::new().generate(&sample_chart(), 800.0, 600.0);
    let asc = spec
        .shapes
        .iter()
        .find_map(|s| match s {
            Shape::Text { content, position, .. } if content == "Asc" => Some(*position),
            _ => None,
        })
        .unwrap();
    assert!(asc.x < spec.center.x);
    assert!((asc.y - spec.center.y).abs() < 1e-2);
}

#[derive(Default)]
struct Recorder {
    circles: usize,
    lines: usize,
    points: usize,
    texts: Vec<String>,
}

impl DrawingSurface for Recorder {
    fn circle(&mut self, _center: Point, _radius: f32, _stroke: &Stroke) {
        self.circles += 1;
    }

    fn line(&mut self, _from: Point, _to: Point, _stroke: &Stroke) {
        self.lines += 1;
    }

    fn point(&mut self, _at: Point, _size: f32, _color: Color) {
        self.points += 1;
    }

    fn text(&mut self, _at: Point, content: &str, _size: f32, _color: Color) {
        self.texts.push(content.to_string());
    }
}

#[test]
fn test_draw_on_custom_surface() {
    let mut recorder = Recorder::default();
    ChartSpecGenerator::new().draw(&sample_chart(), &mut recorder);

    assert_eq!(recorder.circles, 3);
    // cusps 12, sign boundaries 12, ticks 12x29, one aspect line
    assert_eq!(recorder.lines, 12 + 12 + 348 + 1);
    assert_eq!(recorder.points, 4);
    // Body glyphs fall back to text
    assert!(recorder.texts.iter().any(|t| t == "☉"));
    assert!(recorder.texts.iter().any(|t| t == "♈"));
    assert!(recorder.texts.iter().any(|t| t == "Mᶜ"));
    assert!(recorder.texts.iter().any(|t| t == "12"));
    // Legend rows reuse the report lines
    let chart = sample_chart();
    for p in &chart.placements {
        assert!(recorder.texts.contains(&placement_line(p)));
    }
    for line in aspect_lines(&chart) {
        assert!(recorder.texts.contains(&line));
    }
}
