//! Factory functions for creating test scenes.
//!
//! Used by unit tests, integration tests, and as sample input for the CLI.

use shared::*;

// ── Meshes ──────────────────────────────────────────────────────

/// Unit square in the XY plane with its 4 boundary edges.
pub fn unit_square_mesh() -> MeshData {
    MeshData::new(
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ],
        vec![[0, 1], [1, 2], [2, 3], [3, 0]],
    )
}

/// Axis-aligned cube wireframe (12 edges) with side `size`, one corner at the origin.
pub fn cube_wireframe_mesh(size: f64) -> MeshData {
    let s = size;
    let vertices = vec![
        [0.0, 0.0, 0.0],
        [s, 0.0, 0.0],
        [s, s, 0.0],
        [0.0, s, 0.0],
        [0.0, 0.0, s],
        [s, 0.0, s],
        [s, s, s],
        [0.0, s, s],
    ];
    let faces = [
        vec![0, 1, 2, 3],
        vec![4, 5, 6, 7],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];
    MeshData::from_faces(vertices, &faces)
}

// ── Objects ─────────────────────────────────────────────────────

/// Unit square mesh object with identity transform.
pub fn unit_square_object(id: &str) -> SceneObject {
    SceneObject::mesh(id, "Square", unit_square_mesh())
}

/// Cube wireframe object at `position`.
pub fn cube_object_at(id: &str, size: f64, position: [f64; 3]) -> SceneObject {
    let mut obj = SceneObject::mesh(id, "Cube", cube_wireframe_mesh(size));
    obj.transform = Transform::at(position);
    obj
}

/// Mesh object flagged hidden-from-render.
pub fn hidden_object(id: &str) -> SceneObject {
    let mut obj = unit_square_object(id);
    obj.hide_render = true;
    obj
}

// ── Scenes ──────────────────────────────────────────────────────

/// Scene with a single unit square.
pub fn unit_square_scene() -> SceneDescription {
    SceneDescription::new(vec![unit_square_object("square")])
}

/// Square plus objects that must not be drawn: a hidden mesh, a light and a curve.
pub fn mixed_scene() -> SceneDescription {
    SceneDescription::new(vec![
        hidden_object("hidden"),
        SceneObject::empty("lamp", "Lamp", ObjectKind::Light),
        unit_square_object("square"),
        SceneObject::empty("path", "Path", ObjectKind::Curve),
    ])
}

/// Scene with nothing drawable.
pub fn undrawable_scene() -> SceneDescription {
    SceneDescription::new(vec![
        hidden_object("hidden"),
        SceneObject::empty("cam", "Camera", ObjectKind::Camera),
        SceneObject::empty("origin", "Empty", ObjectKind::Empty),
    ])
}

/// Empty scene.
pub fn empty_scene() -> SceneDescription {
    SceneDescription::default()
}
