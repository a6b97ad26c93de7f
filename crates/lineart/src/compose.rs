//! Scene composition: collect every element with its bounds, then shift the
//! whole drawing so it sits inside a padded canvas.

use shared::{SceneDescription, SceneObject};

use crate::canvas::{CanvasPoint, CanvasRect};
use crate::document::{Document, ElementRecord};
use crate::error::{ExportError, Result};
use crate::generators::GeneratorRegistry;
use crate::projection::ProjectionConfig;

/// Objects that will be drawn: not hidden and with a registered generator
pub fn renderable_objects<'a>(
    scene: &'a SceneDescription,
    registry: &'a GeneratorRegistry,
) -> impl Iterator<Item = &'a SceneObject> + 'a {
    scene
        .objects
        .iter()
        .filter(|obj| {
            if obj.hide_render {
                tracing::debug!("skipping {} ({}): hidden from render", obj.id, obj.kind);
                return false;
            }
            true
        })
        .filter(|obj| {
            if !registry.supports(obj.kind) {
                tracing::debug!("skipping {} ({}): no generator", obj.id, obj.kind);
                return false;
            }
            true
        })
}

/// Run every renderable object through its generator.
///
/// Each generator is drained into owned records before the next one starts.
pub fn collect_elements(
    scene: &SceneDescription,
    registry: &GeneratorRegistry,
    config: &ProjectionConfig,
) -> Result<Vec<ElementRecord>> {
    let mut records = Vec::new();

    for obj in renderable_objects(scene, registry) {
        let Some(generator) = registry.get(obj.kind) else {
            continue;
        };
        let before = records.len();
        for record in generator.generate(obj, config)? {
            records.push(record?);
        }
        tracing::debug!("{} ({}): {} elements", obj.id, obj.kind, records.len() - before);
    }

    Ok(records)
}

/// Offset that moves `bounds.min` to `(padding, padding)`
pub fn centering_offset(bounds: &CanvasRect, padding: f64) -> CanvasPoint {
    -bounds.min() + padding
}

/// Shift collected records into a padded canvas and build the document
pub fn normalize(records: Vec<ElementRecord>, padding: f64) -> Result<Document> {
    if records.is_empty() {
        return Err(ExportError::EmptyScene);
    }

    let bounds = CanvasRect::union_all(records.iter().map(|r| r.bounds))?;
    let offset = centering_offset(&bounds, padding);

    let elements = records
        .into_iter()
        .map(|record| {
            let mut element = record.element;
            element.translate(offset);
            element
        })
        .collect();

    let dims = bounds.dims();
    Ok(Document {
        width: dims.x + padding * 2.0,
        height: dims.y + padding * 2.0,
        elements,
    })
}

/// Compose `scene` into a line drawing.
///
/// Fails with [`ExportError::EmptyScene`] if nothing in the scene produced an
/// element; no partial document is ever returned.
pub fn compose_scene(
    scene: &SceneDescription,
    registry: &GeneratorRegistry,
    config: &ProjectionConfig,
) -> Result<Document> {
    let records = collect_elements(scene, registry, config)?;
    let document = normalize(records, config.padding)?;

    tracing::info!(
        "composed {} elements on a {}x{} canvas",
        document.elements.len(),
        document.width,
        document.height
    );

    Ok(document)
}
