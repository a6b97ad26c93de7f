//! Integration tests for scene composition.
//!
//! Tests end-to-end: SceneDescription -> compose_scene -> Document.

use lineart_lib::fixtures::*;
use lineart_lib::{
    compose_scene, CanvasPoint, Document, ExportError, GeneratorRegistry, ProjectionConfig,
};
use shared::{SceneDescription, Transform, ViewPlane};

fn square_config() -> ProjectionConfig {
    ProjectionConfig::default().with_draw_scale(1.0).with_padding(10.0)
}

fn endpoints(doc: &Document) -> Vec<(CanvasPoint, CanvasPoint)> {
    doc.lines().map(|l| (l.start(), l.end())).collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_unit_square_end_to_end() {
    let doc = compose_scene(&unit_square_scene(), &GeneratorRegistry::new(), &square_config()).unwrap();

    assert_eq!(doc.width, 21.0);
    assert_eq!(doc.height, 21.0);
    assert_eq!(doc.elements.len(), 4);

    for line in doc.lines() {
        for v in [line.x1, line.y1, line.x2, line.y2] {
            assert!((10.0..=11.0).contains(&v), "coordinate {v} outside [10, 11]");
        }
        assert_eq!(line.stroke_color, "red");
        assert_eq!(line.stroke_width, 1.0);
    }

    let p = CanvasPoint::new;
    assert_eq!(
        endpoints(&doc),
        vec![
            (p(10.0, 10.0), p(11.0, 10.0)),
            (p(11.0, 10.0), p(11.0, 11.0)),
            (p(11.0, 11.0), p(10.0, 11.0)),
            (p(10.0, 11.0), p(10.0, 10.0)),
        ]
    );
}

#[test]
fn test_bounds_corners_map_to_padding() {
    let scene = SceneDescription::new(vec![
        cube_object_at("a", 2.0, [-4.0, 3.0, 0.0]),
        cube_object_at("b", 1.0, [6.0, -2.0, 1.0]),
    ]);
    let config = ProjectionConfig::default().with_draw_scale(1.0).with_padding(3.0);
    let doc = compose_scene(&scene, &GeneratorRegistry::new(), &config).unwrap();

    // world bounds x: -4..7, y: -2..5
    assert_eq!(doc.width, 11.0 + 6.0);
    assert_eq!(doc.height, 7.0 + 6.0);

    let points: Vec<CanvasPoint> = doc.elements.iter().flat_map(|e| e.points()).collect();
    let min = CanvasPoint::min(points.iter().copied()).unwrap();
    let max = CanvasPoint::max(points.iter().copied()).unwrap();
    assert_eq!(min, CanvasPoint::new(3.0, 3.0));
    assert_eq!(max, CanvasPoint::new(11.0 + 3.0, 7.0 + 3.0));
}

#[test]
fn test_draw_scale_and_view_plane() {
    let scene = SceneDescription::new(vec![cube_object_at("c", 2.0, [1.0, 1.0, 1.0])]);
    let config = ProjectionConfig::for_view(ViewPlane::Xz).with_padding(5.0);
    let doc = compose_scene(&scene, &GeneratorRegistry::new(), &config).unwrap();

    assert_eq!(doc.elements.len(), 12);
    assert_eq!(doc.width, 30.0);
    assert_eq!(doc.height, 30.0);
}

#[test]
fn test_rotated_object() {
    let mut square = unit_square_object("sq");
    square.transform = Transform {
        position: [0.0; 3],
        rotation: [0.0, 0.0, 45.0],
        scale: [1.0; 3],
    };
    let scene = SceneDescription::new(vec![square]);
    let doc = compose_scene(&scene, &GeneratorRegistry::new(), &square_config()).unwrap();

    let diagonal = 2.0_f64.sqrt();
    assert!(approx(doc.width, diagonal + 20.0));
    assert!(approx(doc.height, diagonal + 20.0));
}

#[test]
fn test_hidden_objects_excluded() {
    let mut scene = unit_square_scene();
    let mut far = hidden_object("far");
    far.transform = Transform::at([50.0, 50.0, 0.0]);
    scene.objects.push(far);

    let doc = compose_scene(&scene, &GeneratorRegistry::new(), &square_config()).unwrap();
    assert_eq!(doc.elements.len(), 4);
    assert_eq!(doc.width, 21.0);
}

#[test]
fn test_mixed_scene_draws_only_square() {
    let doc = compose_scene(&mixed_scene(), &GeneratorRegistry::new(), &square_config()).unwrap();
    let square = compose_scene(&unit_square_scene(), &GeneratorRegistry::new(), &square_config()).unwrap();
    assert_eq!(doc, square);
}

#[test]
fn test_only_undrawable_objects_fails() {
    let result = compose_scene(&undrawable_scene(), &GeneratorRegistry::new(), &square_config());
    assert_eq!(result, Err(ExportError::EmptyScene));
}

#[test]
fn test_empty_scene_fails() {
    let result = compose_scene(&empty_scene(), &GeneratorRegistry::new(), &square_config());
    assert_eq!(result, Err(ExportError::EmptyScene));
}

#[test]
fn test_deterministic_output() {
    let scene = SceneDescription::new(vec![
        cube_object_at("a", 1.5, [0.3, -0.7, 2.0]),
        unit_square_object("b"),
    ]);
    let config = ProjectionConfig::for_view(ViewPlane::Yz);
    let registry = GeneratorRegistry::new();

    let first = compose_scene(&scene, &registry, &config).unwrap();
    let second = compose_scene(&scene, &registry, &config).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_scene_from_json() {
    let json = r#"{
        "version": 1,
        "objects": [
            {
                "id": "tri",
                "name": "Triangle",
                "kind": "mesh",
                "transform": {"position": [0, 0, 0], "rotation": [0, 0, 0], "scale": [2, 2, 2]},
                "data": {
                    "type": "mesh",
                    "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
                    "edges": [[0, 1], [1, 2], [2, 0]]
                }
            },
            {"id": "sun", "name": "Sun", "kind": "light"}
        ]
    }"#;
    let scene: SceneDescription = serde_json::from_str(json).unwrap();
    let doc = compose_scene(&scene, &GeneratorRegistry::new(), &square_config()).unwrap();

    assert_eq!(doc.elements.len(), 3);
    assert_eq!(doc.width, 22.0);
    assert_eq!(doc.height, 22.0);
}
