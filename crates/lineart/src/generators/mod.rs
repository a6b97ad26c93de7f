//! Element generators keyed by object kind.
//!
//! Each generator turns one scene object into a lazy sequence of
//! [`ElementRecord`]s. The composer looks generators up by [`ObjectKind`];
//! kinds without a registered generator are skipped.

mod mesh;

pub use mesh::{MeshEdgeGenerator, MeshEdges};

use std::collections::HashMap;

use shared::{ObjectKind, SceneObject};

use crate::document::ElementRecord;
use crate::error::{ExportError, Result};
use crate::projection::ProjectionConfig;

/// Lazy, finite sequence of records produced for one object
pub type ElementIter<'a> = Box<dyn Iterator<Item = Result<ElementRecord>> + 'a>;

/// Produces drawable elements for objects of a single kind
pub trait ElementGenerator {
    /// Kind of object this generator understands
    fn kind(&self) -> ObjectKind;

    /// Start generating elements for `object`.
    ///
    /// Fails with [`ExportError::InvalidObjectKind`] when `object` is not of
    /// [`Self::kind`].
    fn generate<'a>(
        &self,
        object: &'a SceneObject,
        config: &'a ProjectionConfig,
    ) -> Result<ElementIter<'a>>;
}

/// Rejects objects whose kind differs from `expected`
pub(crate) fn check_kind(object: &SceneObject, expected: ObjectKind) -> Result<()> {
    if object.kind == expected {
        Ok(())
    } else {
        Err(ExportError::InvalidObjectKind {
            object: object.id.clone(),
            expected,
            found: object.kind,
        })
    }
}

/// Dispatch table from object kind to generator
pub struct GeneratorRegistry {
    generators: HashMap<ObjectKind, Box<dyn ElementGenerator>>,
}

impl GeneratorRegistry {
    /// Registry with no generators
    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Registry with the built-in generators
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(MeshEdgeGenerator);
        registry
    }

    /// Add `generator` under its kind, returning the one it replaces
    pub fn register<G>(&mut self, generator: G) -> Option<Box<dyn ElementGenerator>>
    where
        G: ElementGenerator + 'static,
    {
        let kind = generator.kind();
        tracing::debug!("registering element generator for {kind}");
        self.generators.insert(kind, Box::new(generator))
    }

    pub fn get(&self, kind: ObjectKind) -> Option<&dyn ElementGenerator> {
        self.generators.get(&kind).map(|g| g.as_ref())
    }

    pub fn supports(&self, kind: ObjectKind) -> bool {
        self.generators.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasPoint, CanvasRect};
    use crate::document::{GeometryElement, Line};

    /// Draws a fixed marker line for every camera
    struct CameraMarker;

    impl ElementGenerator for CameraMarker {
        fn kind(&self) -> ObjectKind {
            ObjectKind::Camera
        }

        fn generate<'a>(
            &self,
            object: &'a SceneObject,
            config: &'a ProjectionConfig,
        ) -> Result<ElementIter<'a>> {
            check_kind(object, ObjectKind::Camera)?;
            let a = CanvasPoint::ZERO;
            let b = CanvasPoint::new(1.0, 0.0);
            let line = Line::new(a, b, &config.line_color, config.line_width);
            let record = ElementRecord::new(GeometryElement::Line(line), CanvasRect::new(a, b));
            Ok(Box::new(std::iter::once(Ok(record))))
        }
    }

    #[test]
    fn test_default_registry_has_mesh_only() {
        let r = GeneratorRegistry::default();
        assert_eq!(r.len(), 1);
        assert!(r.supports(ObjectKind::Mesh));
        assert!(!r.supports(ObjectKind::Curve));
        assert!(r.get(ObjectKind::Light).is_none());
    }

    #[test]
    fn test_empty_registry() {
        let r = GeneratorRegistry::empty();
        assert!(r.is_empty());
        assert!(!r.supports(ObjectKind::Mesh));
    }

    #[test]
    fn test_register_custom_generator() {
        let mut r = GeneratorRegistry::new();
        assert!(r.register(CameraMarker).is_none());
        assert!(r.supports(ObjectKind::Camera));

        let cam = SceneObject::empty("cam", "Camera", ObjectKind::Camera);
        let config = ProjectionConfig::default();
        let records: Vec<_> = r
            .get(ObjectKind::Camera)
            .unwrap()
            .generate(&cam, &config)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut r = GeneratorRegistry::new();
        let previous = r.register(MeshEdgeGenerator);
        assert!(previous.is_some());
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn test_check_kind_mismatch() {
        let light = SceneObject::empty("l", "Light", ObjectKind::Light);
        let err = check_kind(&light, ObjectKind::Mesh).unwrap_err();
        assert_eq!(
            err,
            ExportError::InvalidObjectKind {
                object: "l".to_string(),
                expected: ObjectKind::Mesh,
                found: ObjectKind::Light,
            }
        );
    }
}
