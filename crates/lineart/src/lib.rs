// Library crate: the projection and composition pipeline, plus the SVG writer
// and test fixtures. The CLI in main.rs is a thin wrapper around `compose_scene`.

pub mod canvas;
pub mod compose;
pub mod document;
pub mod error;
pub mod fixtures;
pub mod generators;
pub mod projection;
pub mod svg;

pub use canvas::{CanvasPoint, CanvasRect, CanvasValue};
pub use compose::compose_scene;
pub use document::{Document, ElementRecord, GeometryElement, Line};
pub use error::{ExportError, Result};
pub use generators::{ElementGenerator, GeneratorRegistry, MeshEdgeGenerator};
pub use projection::ProjectionConfig;
