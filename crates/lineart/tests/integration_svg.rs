//! Integration tests for SVG output of composed scenes.

use lineart_lib::fixtures::*;
use lineart_lib::svg::to_svg;
use lineart_lib::{compose_scene, GeneratorRegistry, ProjectionConfig};

#[test]
fn test_unit_square_svg() {
    let config = ProjectionConfig::default()
        .with_draw_scale(1.0)
        .with_stroke("black", 0.25);
    let doc = compose_scene(&unit_square_scene(), &GeneratorRegistry::new(), &config).unwrap();
    let svg = to_svg(&doc);

    assert!(svg.contains(r#"width="21" height="21" viewBox="0 0 21 21""#));
    assert_eq!(svg.matches("<line ").count(), 4);
    assert!(svg.contains(
        r#"<line x1="10" y1="10" x2="11" y2="10" stroke="black" stroke-width="0.25"/>"#
    ));
}

#[test]
fn test_svg_is_deterministic() {
    let scene = mixed_scene();
    let config = ProjectionConfig::default();
    let registry = GeneratorRegistry::new();

    let a = to_svg(&compose_scene(&scene, &registry, &config).unwrap());
    let b = to_svg(&compose_scene(&scene, &registry, &config).unwrap());
    assert_eq!(a, b);
}

#[test]
fn test_default_config_scales_by_ten() {
    let doc = compose_scene(&unit_square_scene(), &GeneratorRegistry::new(), &ProjectionConfig::default()).unwrap();
    assert_eq!(doc.width, 30.0);
    assert_eq!(doc.height, 30.0);
    assert!(to_svg(&doc).contains(r#"stroke="red" stroke-width="1""#));
}
