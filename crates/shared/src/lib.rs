use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Unique identifier of an object in the scene
pub type ObjectId = String;

fn default_version() -> u32 {
    1
}

/// Kind of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Mesh,
    Curve,
    Empty,
    Camera,
    Light,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Mesh => "mesh",
            ObjectKind::Curve => "curve",
            ObjectKind::Empty => "empty",
            ObjectKind::Camera => "camera",
            ObjectKind::Light => "light",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// World plane used for orthographic views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPlane {
    #[serde(rename = "XY")]
    Xy,
    #[serde(rename = "XZ")]
    Xz,
    #[serde(rename = "YZ")]
    Yz,
}

impl ViewPlane {
    /// Matrix that moves the plane's two axes onto x/y.
    ///
    /// The dropped axis lands in z, so the projection stays invertible.
    pub fn projection_matrix(&self) -> DMat4 {
        match self {
            ViewPlane::Xy => DMat4::IDENTITY,
            ViewPlane::Xz => DMat4::from_cols(
                glam::DVec4::X,
                glam::DVec4::Z,
                glam::DVec4::Y,
                glam::DVec4::W,
            ),
            ViewPlane::Yz => DMat4::from_cols(
                glam::DVec4::Z,
                glam::DVec4::X,
                glam::DVec4::Y,
                glam::DVec4::W,
            ),
        }
    }
}

/// Object transform: translation, Euler XYZ rotation in degrees, scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    /// Identity transform moved to `position`
    pub fn at(position: [f64; 3]) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    /// World matrix `T * R * S`
    pub fn matrix(&self) -> DMat4 {
        let [rx, ry, rz] = self.rotation;
        let rotation = DQuat::from_euler(
            EulerRot::XYZ,
            rx.to_radians(),
            ry.to_radians(),
            rz.to_radians(),
        );
        DMat4::from_scale_rotation_translation(
            DVec3::from_array(self.scale),
            rotation,
            DVec3::from_array(self.position),
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluated mesh geometry in object-local space
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshData {
    /// Local-space vertex positions
    pub vertices: Vec<[f64; 3]>,
    /// Pairs of indices into `vertices`
    #[serde(default)]
    pub edges: Vec<[usize; 2]>,
}

impl MeshData {
    pub fn new(vertices: Vec<[f64; 3]>, edges: Vec<[usize; 2]>) -> Self {
        Self { vertices, edges }
    }

    /// Build a mesh whose edges are the unique undirected sides of `faces`,
    /// in the order they are first met.
    pub fn from_faces(vertices: Vec<[f64; 3]>, faces: &[Vec<usize>]) -> Self {
        let mut seen = std::collections::HashSet::new();
        let mut edges = Vec::new();

        for face in faces {
            if face.len() < 2 {
                continue;
            }
            for (i, &a) in face.iter().enumerate() {
                let b = face[(i + 1) % face.len()];
                if a == b {
                    continue;
                }
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    edges.push([a, b]);
                }
            }
        }

        Self { vertices, edges }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Geometry payload carried by an object
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectData {
    Mesh(MeshData),
    #[default]
    None,
}

/// Object in the scene, already evaluated (modifiers applied)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub transform: Transform,
    /// Excluded from rendered output
    #[serde(default)]
    pub hide_render: bool,
    #[serde(default)]
    pub data: ObjectData,
}

impl SceneObject {
    /// Mesh object with the given geometry and identity transform
    pub fn mesh(id: &str, name: &str, mesh: MeshData) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: ObjectKind::Mesh,
            transform: Transform::new(),
            hide_render: false,
            data: ObjectData::Mesh(mesh),
        }
    }

    /// Object without geometry
    pub fn empty(id: &str, name: &str, kind: ObjectKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            transform: Transform::new(),
            hide_render: false,
            data: ObjectData::None,
        }
    }

    pub fn world_matrix(&self) -> DMat4 {
        self.transform.matrix()
    }

    pub fn mesh_data(&self) -> Option<&MeshData> {
        match &self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            ObjectData::None => None,
        }
    }
}

/// Scene description: ordered list of objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            version: default_version(),
            objects: Vec::new(),
        }
    }
}

impl SceneDescription {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self {
            version: default_version(),
            objects,
        }
    }

    pub fn find(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }
}
