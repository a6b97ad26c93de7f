//! Mesh edges as canvas lines

use glam::{DMat4, DVec3};
use shared::{MeshData, ObjectKind, SceneObject};

use super::{check_kind, ElementGenerator, ElementIter};
use crate::canvas::CanvasRect;
use crate::document::{ElementRecord, GeometryElement, Line};
use crate::error::{ExportError, Result};
use crate::projection::ProjectionConfig;

/// One line per mesh edge, in the mesh's edge order
pub struct MeshEdgeGenerator;

impl ElementGenerator for MeshEdgeGenerator {
    fn kind(&self) -> ObjectKind {
        ObjectKind::Mesh
    }

    fn generate<'a>(
        &self,
        object: &'a SceneObject,
        config: &'a ProjectionConfig,
    ) -> Result<ElementIter<'a>> {
        check_kind(object, ObjectKind::Mesh)?;

        let Some(mesh) = object.mesh_data() else {
            tracing::debug!("mesh object {} carries no geometry", object.id);
            return Ok(Box::new(std::iter::empty()));
        };

        tracing::debug!(
            "mesh {}: {} vertices, {} edges",
            object.id,
            mesh.vertex_count(),
            mesh.edge_count()
        );

        Ok(Box::new(MeshEdges::new(object, mesh, config)))
    }
}

/// Lazy iterator over the projected edges of one mesh object
pub struct MeshEdges<'a> {
    object: &'a SceneObject,
    mesh: &'a MeshData,
    config: &'a ProjectionConfig,
    world: DMat4,
    next_edge: usize,
}

impl<'a> MeshEdges<'a> {
    pub fn new(object: &'a SceneObject, mesh: &'a MeshData, config: &'a ProjectionConfig) -> Self {
        Self {
            object,
            mesh,
            config,
            world: object.world_matrix(),
            next_edge: 0,
        }
    }

    fn vertex(&self, edge: usize, index: usize) -> Result<DVec3> {
        self.mesh
            .vertices
            .get(index)
            .map(|co| DVec3::from_array(*co))
            .ok_or_else(|| ExportError::VertexOutOfRange {
                object: self.object.id.clone(),
                edge,
                index,
                vertex_count: self.mesh.vertex_count(),
            })
    }

    fn record(&self, edge: usize, [a, b]: [usize; 2]) -> Result<ElementRecord> {
        let start = self.config.world_to_canvas(self.world.transform_point3(self.vertex(edge, a)?));
        let end = self.config.world_to_canvas(self.world.transform_point3(self.vertex(edge, b)?));

        let line = Line::new(start, end, &self.config.line_color, self.config.line_width);
        Ok(ElementRecord::new(
            GeometryElement::Line(line),
            CanvasRect::new(start, end),
        ))
    }
}

impl Iterator for MeshEdges<'_> {
    type Item = Result<ElementRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.next_edge;
        let indices = *self.mesh.edges.get(edge)?;
        self.next_edge += 1;
        Some(self.record(edge, indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.mesh.edges.len().saturating_sub(self.next_edge);
        (remaining, Some(remaining))
    }
}
